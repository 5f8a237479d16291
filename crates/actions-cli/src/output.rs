use actions_core::record::ActionRecord;
use serde::Serialize;

/// Longest `action` cell shown in a table before it is cut with an ellipsis.
const MAX_ACTION_WIDTH: usize = 60;

const RECORD_HEADERS: [&str; 7] = [
    "line",
    "priority",
    "confidence",
    "owner",
    "due_date",
    "account",
    "action",
];

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print records as an aligned table. The free-text `action` column goes
/// last so short fields line up.
pub fn print_records(records: &[ActionRecord]) {
    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| {
            [
                r.source_line.to_string(),
                r.priority.clone(),
                r.confidence.to_string(),
                r.owner.clone(),
                r.due_date.clone(),
                r.account.clone(),
                truncate(&r.action, MAX_ACTION_WIDTH),
            ]
        })
        .collect();

    let mut widths = RECORD_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    println!("{}", render_row(&RECORD_HEADERS[..], &widths));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", rule.join("  "));
    for row in &rows {
        println!("{}", render_row(row.as_slice(), &widths));
    }
}

fn render_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:w$}", cell.as_ref()))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
