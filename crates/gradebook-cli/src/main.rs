//! gradebook CLI: the interactive console over an in-memory gradebook.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod render;
mod session;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "In-memory student gradebook")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Interactive {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format for student lists: table, plain, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gradebook=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::interactive::execute(None, None),
        Some(Commands::Interactive { config, format }) => {
            commands::interactive::execute(config, format)
        }
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
