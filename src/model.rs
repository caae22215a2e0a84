use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    /// `null` and a missing field both end up as `None`.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub created_at: String,
    pub updated_at: String,
}

impl Issue {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

/// Keeps the open issues, in their original order.
pub fn open_issues(issues: &[Issue]) -> Vec<&Issue> {
    issues.iter().filter(|issue| issue.is_open()).collect()
}

pub fn parse_issues<R: Read>(reader: R) -> anyhow::Result<Vec<Issue>> {
    let issues = serde_json::from_reader(reader).context("Could not parse issues")?;
    Ok(issues)
}

/// Reads the whole collection into memory. Any failure here is fatal to the run.
pub fn load_issues(path: &Path) -> anyhow::Result<Vec<Issue>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open issues file '{}'", path.display()))?;
    let issues = parse_issues(std::io::BufReader::new(file))
        .with_context(|| format!("Could not load issues from '{}'", path.display()))?;
    tracing::info!(path = %path.display(), count = issues.len(), "loaded issues");
    Ok(issues)
}
