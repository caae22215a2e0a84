pub mod model;
pub mod priority;
pub mod ranking;
pub mod report;
mod template;

pub use model::{load_issues, open_issues, parse_issues, Issue, Label};
pub use priority::{classify, extract_priority_score, Priority};
pub use ranking::{rank, Classification};
pub use report::{body_preview, Report};
