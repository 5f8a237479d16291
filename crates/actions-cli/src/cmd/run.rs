use crate::output::{print_json, print_records};
use actions_core::{paths, pipeline};
use std::path::Path;

pub fn run(
    root: &Path,
    config: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config_path = paths::config_path(root, config);
    let input_path = paths::input_path(root, input);

    if dry_run {
        return preview(&config_path, &input_path, json);
    }

    let output_path = paths::output_path(root, output);
    let report = pipeline::run(&config_path, &input_path, &output_path)?;

    if json {
        print_json(&report)?;
    } else {
        println!(
            "Wrote {} actions to {}",
            report.records,
            report.output.display()
        );
    }
    Ok(())
}

fn preview(config_path: &Path, input_path: &Path, json: bool) -> anyhow::Result<()> {
    let classifier = pipeline::prepare(config_path)?;
    let records = pipeline::extract_file(input_path, &classifier)?;

    if json {
        print_json(&records)?;
        return Ok(());
    }

    if records.is_empty() {
        println!("No actions found in {}", input_path.display());
        return Ok(());
    }
    print_records(&records);
    Ok(())
}
