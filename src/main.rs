use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold the project documentation portal", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Config file (defaults to ./docs-portal.toml when present)
    #[arg(long, global = true, env = "DOCS_PORTAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the documentation tree, skipping files that already exist
    Init {
        /// Output root (default: docs)
        root: Option<PathBuf>,

        /// Project name used in placeholders and the summary
        #[arg(long)]
        project: Option<String>,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the sections and files that init creates
    Tree {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    docs_portal::logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Init {
            root,
            project,
            dry_run,
            json,
        } => {
            commands::init::execute(commands::init::InitOptions {
                root,
                project,
                config: cli.config,
                dry_run,
                json,
            })?;
        }
        Commands::Tree { json } => {
            commands::tree::execute(json)?;
        }
    }

    Ok(())
}
