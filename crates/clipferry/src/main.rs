//! Clipferry CLI
//!
//! Synchronizes the local clipboard with one remote peer over ssh. The
//! `copy` and `paste` subcommands double as the verbs a peer invokes on
//! this host through the remote gateway.

mod commands;
mod config;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "clipferry")]
#[command(version, about = "Synchronize clipboards between hosts over ssh")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: ~/.clipferry)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Peer book file (default: <data-dir>/peers.json)
    #[arg(long, global = true, env = "CLIPFERRY_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write stdin to the local clipboard
    ///
    /// This is the verb a peer invokes over ssh to push content here.
    Copy,

    /// Print the local clipboard to stdout
    ///
    /// This is the verb a peer invokes over ssh to pull content from here.
    Paste,

    /// Keep the local clipboard and a peer's clipboard synchronized
    Watch {
        /// Peer name from the peer book (uses the default peer when omitted)
        peer: Option<String>,

        /// Polling interval in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },

    /// List recent propagation events
    History {
        /// Maximum number of events to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Copy => commands::copy::run().await,
        Commands::Paste => commands::paste::run().await,
        Commands::Watch { peer, interval_ms } => {
            let config = CliConfig::new(cli.data_dir, cli.config)?;
            commands::watch::run(&config, peer.as_deref(), interval_ms).await
        }
        Commands::History { limit } => {
            let config = CliConfig::new(cli.data_dir, cli.config)?;
            commands::history::run(&config, limit).await
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "clipferry", &mut io::stdout());
            Ok(())
        }
    }
}
