use crate::output::print_json;
use actions_core::{classifier::RuleHit, extract::extract, paths, pipeline};
use std::path::Path;

pub fn run(root: &Path, config: Option<&Path>, line: &str, json: bool) -> anyhow::Result<()> {
    let classifier = pipeline::prepare(&paths::config_path(root, config))?;
    let hit = classifier.explain(line);
    let record = hit.as_ref().map(|_| extract(line, 1));

    if json {
        let value = serde_json::json!({
            "is_action": hit.is_some(),
            "matched": hit,
            "record": record,
        });
        print_json(&value)?;
        return Ok(());
    }

    let Some(hit) = hit else {
        println!("not an action");
        return Ok(());
    };
    let matched = match &hit {
        RuleHit::Keyword(k) => format!("keyword '{k}'"),
        RuleHit::Prefix(p) => format!("prefix '{p}'"),
    };
    println!("action (matched {matched})");
    if let Some(r) = record {
        println!("  {:<11} {}", "owner:", r.owner);
        println!("  {:<11} {}", "due_date:", r.due_date);
        println!("  {:<11} {}", "account:", r.account);
        println!("  {:<11} {}", "priority:", r.priority);
        println!("  {:<11} {}", "confidence:", r.confidence);
    }
    Ok(())
}
