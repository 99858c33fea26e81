mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "coach",
    about = "Responsible AI coach — intake questions, risk register, action plan, and templates",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config directory holding agents.yaml and tasks.yaml (default: auto-detect ./config)
    #[arg(long, global = true, env = "COACH_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold the default agents.yaml and tasks.yaml
    Init,

    /// Interactive chat session (describe → answer intake → report)
    Chat,

    /// Generate intake questions from a product description
    Intake {
        /// Free-text product description
        description: String,
    },

    /// Generate the full report from a description and numbered answers
    Report {
        /// Free-text product description
        #[arg(long)]
        description: String,

        /// Numbered intake answers ("1. ... 2. ...")
        #[arg(long)]
        answers: String,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config_dir = root::resolve_config_dir(cli.config.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&config_dir),
        Commands::Chat => cmd::chat::run(&config_dir),
        Commands::Intake { description } => cmd::intake::run(&config_dir, &description, cli.json),
        Commands::Report {
            description,
            answers,
        } => cmd::report::run(&config_dir, &description, &answers, cli.json),
        Commands::Serve { port } => cmd::serve::run(&config_dir, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
