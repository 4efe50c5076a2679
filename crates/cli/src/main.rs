//! `openlinkage` command line.

mod commands;
mod logging;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "openlinkage",
    version,
    about = "Multi-agent health advice with safety warnings"
)]
pub struct Cli {
    /// Directory containing `.openlinkage/`.
    #[arg(long, global = true, env = "OPENLINKAGE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Log at debug level unless OPENLINKAGE_LOG is set.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one analysis and print the aggregated advice.
    Analyze(commands::AnalyzeArgs),

    /// List the configured agents and the model backend.
    Agents,

    /// List the active warning rules in registration order.
    Rules,

    /// Write a `.openlinkage/` scaffold into --root.
    Init {
        /// Overwrite an existing `.openlinkage/` directory.
        #[arg(long)]
        force: bool,

        /// Only write config.toml.
        #[arg(long)]
        minimal: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => commands::analyze(&cli.root, args).await,
        Commands::Agents => commands::agents(&cli.root).await,
        Commands::Rules => commands::rules(&cli.root).await,
        Commands::Init { force, minimal } => commands::init(&cli.root, force, minimal).await,
    }
}
