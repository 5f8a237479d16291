mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "extract-actions",
    about = "Extract action items (owner, due date, account, priority) from plain-text notes into CSV",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from config/action_rules.yaml or .git/)
    #[arg(long, global = true, env = "ACTIONS_ROOT")]
    root: Option<PathBuf>,

    /// Rules file (default: config/action_rules.yaml under the root)
    #[arg(long, global = true, env = "ACTIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the notes file and write the actions CSV
    Run {
        /// Notes file (default: data/notes.txt under the root)
        #[arg(long, short = 'i', env = "ACTIONS_INPUT")]
        input: Option<PathBuf>,

        /// CSV destination (default: data/actions.csv under the root)
        #[arg(long, short = 'o', env = "ACTIONS_OUTPUT")]
        output: Option<PathBuf>,

        /// Print the extracted actions instead of writing the CSV
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify a single line and show what would be extracted from it
    Check {
        #[arg(required = true)]
        line: Vec<String>,
    },

    /// Inspect, validate, or scaffold the rules file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            dry_run,
        } => cmd::run::run(
            &root,
            config,
            input.as_deref(),
            output.as_deref(),
            dry_run,
            cli.json,
        ),
        Commands::Check { line } => cmd::check::run(&root, config, &line.join(" "), cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, config, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
