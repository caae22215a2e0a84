use crate::model::Issue;
use crate::priority::{self, Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: u64,
    pub title: String,
    pub priority: Priority,
    pub score: Option<i64>,
}

impl Classification {
    pub fn of(issue: &Issue) -> Self {
        let score = priority::extract_priority_score(issue.body());
        let priority = priority::classify(&issue.title, issue.body(), score);
        tracing::debug!(number = issue.number, %priority, ?score, "classified issue");
        Self {
            number: issue.number,
            title: issue.title.clone(),
            priority,
            score,
        }
    }
}

/// Most severe first. Equal priorities keep their scan order.
pub fn rank(mut classifications: Vec<Classification>) -> Vec<Classification> {
    classifications.sort_by(|a, b| b.priority.cmp(&a.priority));
    classifications
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: u64, priority: Priority) -> Classification {
        Classification {
            number,
            title: format!("issue {number}"),
            priority,
            score: None,
        }
    }

    #[test]
    fn orders_by_descending_severity() {
        let ranked = rank(vec![
            entry(1, Priority::Low),
            entry(2, Priority::Critical),
            entry(3, Priority::Medium),
            entry(4, Priority::High),
        ]);
        let priorities: Vec<_> = ranked.iter().map(|c| c.priority).collect();
        assert_eq!(
            priorities,
            [Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn ties_keep_scan_order() {
        let ranked = rank(vec![
            entry(5, Priority::Medium),
            entry(1, Priority::High),
            entry(3, Priority::Medium),
            entry(2, Priority::Medium),
        ]);
        let numbers: Vec<_> = ranked.iter().map(|c| c.number).collect();
        assert_eq!(numbers, [1, 5, 3, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn classifies_issue_with_embedded_score() {
        let issue = Issue {
            number: 12,
            title: "Add dark mode".to_string(),
            state: "open".to_string(),
            body: Some("Details\nPriority Score: 8/10".to_string()),
            labels: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let classification = Classification::of(&issue);
        assert_eq!(classification.priority, Priority::High);
        assert_eq!(classification.score, Some(8));
    }
}
