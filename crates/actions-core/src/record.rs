use serde::{Deserialize, Serialize};
use std::fmt;

/// Column order of the output file.
pub const COLUMNS: [&str; 7] = [
    "action",
    "owner",
    "due_date",
    "account",
    "priority",
    "confidence",
    "source_line",
];

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// How explicit the action marker on a line was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionRecord
// ---------------------------------------------------------------------------

/// One extracted action item. Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: String,
    pub owner: String,
    pub due_date: String,
    pub account: String,
    pub priority: String,
    pub confidence: Confidence,
    /// 1-based line number in the input file.
    pub source_line: usize,
}
