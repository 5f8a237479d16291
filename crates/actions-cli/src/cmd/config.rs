use crate::output::print_json;
use actions_core::{
    config::{Config, WarnLevel},
    paths,
};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective rules
    Show,

    /// Validate the rules for common mistakes
    Validate,

    /// Write the default rules file if none exists
    Init,
}

pub fn run(
    root: &Path,
    config: Option<&Path>,
    subcmd: ConfigSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let path = paths::config_path(root, config);
    match subcmd {
        ConfigSubcommand::Show => show(&path, json),
        ConfigSubcommand::Validate => validate(&path, json),
        ConfigSubcommand::Init => init(&path, json),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn show(path: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(path)?;

    if json {
        print_json(&config)?;
        return Ok(());
    }

    println!("Rules file:     {}", path.display());
    println!("Word boundary:  {}", config.word_boundary);
    print_list("Keywords:", &config.action_keywords);
    print_list("Prefixes:", &config.action_prefixes);
    Ok(())
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("{label:<15} (none)");
        return;
    }
    println!("{label}");
    for item in items {
        println!("  {item:?}");
    }
}

fn validate(path: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(path)?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}

fn init(path: &Path, json: bool) -> anyhow::Result<()> {
    let config =
        Config::init(path).with_context(|| format!("failed to create {}", path.display()))?;

    if json {
        let value = serde_json::json!({
            "path": path,
            "config": config,
        });
        print_json(&value)?;
    } else {
        println!("Wrote default rules to {}", path.display());
    }
    Ok(())
}
