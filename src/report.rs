use std::io::Write;

use handlebars::Handlebars;
use serde_derive::Serialize;

use crate::model::{self, Issue};
use crate::ranking::{self, Classification};
use crate::template;

pub const LIST_PREVIEW_CHARS: usize = 200;
pub const OPEN_PREVIEW_CHARS: usize = 300;

const NO_DESCRIPTION: &str = "No description provided";

#[derive(Serialize)]
struct IssueView<'a> {
    position: usize,
    number: u64,
    title: &'a str,
    state: &'a str,
    labels: String,
    created_at: &'a str,
    updated_at: &'a str,
    description: String,
}

impl<'a> IssueView<'a> {
    fn new(position: usize, issue: &'a Issue, preview_chars: usize) -> Self {
        Self {
            position,
            number: issue.number,
            title: &issue.title,
            state: &issue.state,
            labels: format_labels(issue),
            created_at: &issue.created_at,
            updated_at: &issue.updated_at,
            description: description(issue.body(), preview_chars),
        }
    }
}

#[derive(Serialize)]
struct OpenIssueView<'a> {
    #[serde(flatten)]
    issue: IssueView<'a>,
    priority: String,
}

#[derive(Serialize)]
struct RankedView<'a> {
    rank: String,
    number: String,
    priority: String,
    title: &'a str,
    score: Option<String>,
}

impl<'a> RankedView<'a> {
    fn new(rank: usize, entry: &'a Classification) -> Self {
        Self {
            rank: format!("{:2}", rank),
            number: format!("{:3}", entry.number),
            priority: format!("{:8}", entry.priority),
            title: &entry.title,
            score: entry.score.map(|score| score.to_string()),
        }
    }
}

/// Flattens newlines to spaces and keeps the first `max_chars` characters.
pub fn body_preview(body: &str, max_chars: usize) -> String {
    body.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max_chars)
        .collect()
}

fn description(body: &str, max_chars: usize) -> String {
    if body.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        format!("{}...", body_preview(body, max_chars))
    }
}

/// Quotes like a Python string literal: single quotes unless the text holds
/// a `'` and no `"`.
fn quote_label(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(quote);
    for c in name.chars() {
        if c == '\\' || c == quote {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push(quote);
    quoted
}

fn format_labels(issue: &Issue) -> String {
    let names: Vec<_> = issue
        .labels
        .iter()
        .map(|label| quote_label(&label.name))
        .collect();
    format!("[{}]", names.join(", "))
}

fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

/// Renders the issue summaries as plain text into `out`.
pub struct Report<W> {
    out: W,
    registry: Handlebars<'static>,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string("issue", template::ISSUE)?;
        registry.register_template_string("open_issue", template::OPEN_ISSUE)?;
        registry.register_template_string("ranked", template::RANKED)?;
        Ok(Self { out, registry })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule('=', 80))?;
        Ok(())
    }

    fn render<T: serde::Serialize>(&mut self, name: &str, data: &T) -> anyhow::Result<()> {
        let text = self.registry.render(name, data)?;
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Every issue, with state and labels.
    pub fn list_issues(&mut self, issues: &[Issue]) -> anyhow::Result<()> {
        self.header(&format!("Total issues found: {}", issues.len()))?;
        for (i, issue) in issues.iter().enumerate() {
            self.render("issue", &IssueView::new(i + 1, issue, LIST_PREVIEW_CHARS))?;
        }
        Ok(())
    }

    /// Open issues with their priority, followed by the ranked summary.
    pub fn analyze_open_issues(&mut self, issues: &[Issue]) -> anyhow::Result<()> {
        let open = model::open_issues(issues);
        tracing::info!(total = issues.len(), open = open.len(), "filtered open issues");
        self.header(&format!("Total open issues found: {}", open.len()))?;

        let mut classifications = Vec::with_capacity(open.len());
        for (i, issue) in open.into_iter().enumerate() {
            let classification = Classification::of(issue);
            self.render(
                "open_issue",
                &OpenIssueView {
                    issue: IssueView::new(i + 1, issue, OPEN_PREVIEW_CHARS),
                    priority: classification.priority.to_string(),
                },
            )?;
            classifications.push(classification);
        }

        let ranked = ranking::rank(classifications);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule('=', 80))?;
        writeln!(self.out, "PRIORITIZED LIST (Highest to Lowest Priority)")?;
        writeln!(self.out, "{}", rule('=', 80))?;
        for (i, entry) in ranked.iter().enumerate() {
            self.render("ranked", &RankedView::new(i + 1, entry))?;
        }
        Ok(())
    }
}
