use std::fmt;

const SCORE_MARKER: &str = "Priority Score:";

const CRITICAL_KEYWORDS: &[&str] = &["critical", "blocking", "crash", "security", "vulnerability"];
const HIGH_TITLE_KEYWORDS: &[&str] = &["fix:", "bug", "error", "fail", "broken"];
const HIGH_BODY_KEYWORDS: &[&str] = &["fix:", "bug", "error", "fail", "broken", "runtime error"];

/// Title-only rules, checked in order: (symbol marker, keyword, priority).
const TITLE_RULES: &[(&str, &str, Priority)] = &[
    ("\u{1f512}", "security", Priority::High),
    ("\u{26a1}", "performance", Priority::Medium),
    ("\u{1f9ea}", "testing", Priority::Medium),
    // Matches with and without the trailing U+FE0F variation selector.
    ("\u{26a0}", "technical debt", Priority::Medium),
    ("\u{1f4dd}", "documentation", Priority::Low),
    ("\u{267f}", "accessibility", Priority::Medium),
];

/// Declared from least to most severe, so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }

    fn from_score(score: i64) -> Self {
        if score >= 8 {
            Priority::High
        } else if score >= 6 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Reads the integer following `Priority Score:` on the first line that has it,
/// up to a `/` or a repeated marker, whichever comes first.
pub fn extract_priority_score(body: &str) -> Option<i64> {
    let line = body.lines().find(|line| line.contains(SCORE_MARKER))?;
    let after_marker = line.split(SCORE_MARKER).nth(1)?;
    let raw = after_marker.split('/').next().unwrap_or_default().trim();
    match raw.parse() {
        Ok(score) => Some(score),
        Err(err) => {
            tracing::debug!(value = raw, %err, "ignoring malformed priority score");
            None
        }
    }
}

/// First matching rule wins; the score only matters when no keyword does.
pub fn classify(title: &str, body: &str, score: Option<i64>) -> Priority {
    let title = title.to_lowercase();
    let body = body.to_lowercase();

    if contains_any(&title, CRITICAL_KEYWORDS) || contains_any(&body, CRITICAL_KEYWORDS) {
        return Priority::Critical;
    }
    if contains_any(&title, HIGH_TITLE_KEYWORDS) || contains_any(&body, HIGH_BODY_KEYWORDS) {
        return Priority::High;
    }
    for (marker, keyword, priority) in TITLE_RULES {
        if title.contains(marker) || title.contains(keyword) {
            return *priority;
        }
    }

    score.map_or(Priority::Medium, Priority::from_score)
}
