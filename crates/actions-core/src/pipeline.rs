use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::{ActionsError, Result};
use crate::extract::extract;
use crate::record::ActionRecord;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

static LINE_BREAK_RE: OnceLock<Regex> = OnceLock::new();

fn line_break_re() -> &'static Regex {
    LINE_BREAK_RE.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]").unwrap()
    })
}

/// Split `text` into lines on every Unicode line boundary: `\r\n`, lone `\r`,
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// line/paragraph separators. A trailing boundary does not start a new line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = line_break_re().split(text).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Load the rules at `config_path`, log anything [`Config::validate`] flags,
/// and build the classifier for a run.
pub fn prepare(config_path: &Path) -> Result<Classifier> {
    let config = Config::load(config_path)?;
    for warning in config.validate() {
        tracing::warn!(level = ?warning.level, "{}", warning.message);
    }
    Classifier::new(&config)
}

/// Classify every line of `text` and extract a record for each action, in
/// line order. Line numbers are 1-based.
pub fn extract_text(text: &str, classifier: &Classifier) -> Vec<ActionRecord> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| classifier.is_action(line))
        .map(|(idx, line)| {
            let record = extract(line, idx + 1);
            tracing::debug!(
                line = record.source_line,
                confidence = %record.confidence,
                "matched action"
            );
            record
        })
        .collect()
}

/// Read the notes file at `input` and extract its actions.
pub fn extract_file(input: &Path, classifier: &Classifier) -> Result<Vec<ActionRecord>> {
    if !input.exists() {
        return Err(ActionsError::InputNotFound(input.to_path_buf()));
    }
    let text = std::fs::read_to_string(input)?;
    Ok(extract_text(&text, classifier))
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub records: usize,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Load rules, extract actions from `input` and write them to `output`.
///
/// Config and input are both read before `output` is touched, so a missing
/// file leaves any previous output in place.
pub fn run(config_path: &Path, input: &Path, output: &Path) -> Result<RunReport> {
    let classifier = prepare(config_path)?;
    let records = extract_file(input, &classifier)?;

    crate::writer::write_records(output, &records)?;
    tracing::info!(
        records = records.len(),
        input = %input.display(),
        output = %output.display(),
        "extraction complete"
    );

    Ok(RunReport {
        records: records.len(),
        input: input.to_path_buf(),
        output: output.to_path_buf(),
    })
}
