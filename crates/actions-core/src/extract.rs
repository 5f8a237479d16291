use crate::record::{ActionRecord, Confidence};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Field patterns
// ---------------------------------------------------------------------------

static PRIORITY_RE: OnceLock<Regex> = OnceLock::new();
static ACCOUNT_RE: OnceLock<Regex> = OnceLock::new();
static OWNER_RE: OnceLock<Regex> = OnceLock::new();
static DUE_RE: OnceLock<Regex> = OnceLock::new();

fn priority_re() -> &'static Regex {
    PRIORITY_RE.get_or_init(|| Regex::new(r"(?i)\bP([123])\b").unwrap())
}

fn account_re() -> &'static Regex {
    ACCOUNT_RE.get_or_init(|| Regex::new(r"(?i)account:([^-]*)").unwrap())
}

fn owner_re() -> &'static Regex {
    OWNER_RE.get_or_init(|| Regex::new(r"(?i)owner:([^)]*)").unwrap())
}

fn due_re() -> &'static Regex {
    DUE_RE.get_or_init(|| Regex::new(r"(?i)\bdue:\s*(\d{4}-\d{2}-\d{2})").unwrap())
}

fn first_capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

/// `P1`..`P3` as a standalone word, normalized to uppercase.
pub fn priority(line: &str) -> String {
    first_capture(priority_re(), line)
        .map(|digit| format!("P{digit}"))
        .unwrap_or_default()
}

/// Text after `Account:` up to the next hyphen or end of line.
pub fn account(line: &str) -> String {
    first_capture(account_re(), line)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Text after `Owner:` up to the next closing parenthesis or end of line.
pub fn owner(line: &str) -> String {
    first_capture(owner_re(), line)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// `YYYY-MM-DD` following `Due:`. Not checked against the calendar.
pub fn due_date(line: &str) -> String {
    first_capture(due_re(), line)
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn confidence(line: &str) -> Confidence {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();
    if lowered.contains("action:") || trimmed.starts_with("- [ ]") || lowered.starts_with("todo:")
    {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

/// Build the record for a line the classifier accepted.
pub fn extract(line: &str, source_line: usize) -> ActionRecord {
    ActionRecord {
        action: line.trim().to_string(),
        owner: owner(line),
        due_date: due_date(line),
        account: account(line),
        priority: priority(line),
        confidence: confidence(line),
        source_line,
    }
}
