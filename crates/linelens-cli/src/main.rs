//! linelens CLI
//!
//! Command-line host for the linelens hover helper.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "linelens")]
#[command(author, version, about = "Line-level git history at a glance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show history for one line of one file
    Hover {
        /// File to inspect (absolute or repository-relative)
        file: PathBuf,

        /// 1-based line number
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// Directory to resolve the repository from
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,

        /// Bound the git query to this many seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Emit the hover payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve hover requests read from stdin, one `file:line` per line
    Watch {
        /// Directory to resolve the repository from
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,

        /// Bound each git query to this many seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("linelens=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("linelens=info")
            .init();
    }

    match cli.command {
        Commands::Hover {
            file,
            line,
            workdir,
            timeout,
            json,
        } => {
            commands::hover::run(file, line, workdir, timeout, json).await?;
        }
        Commands::Watch { workdir, timeout } => {
            commands::watch::run(workdir, timeout).await?;
        }
    }

    Ok(())
}
