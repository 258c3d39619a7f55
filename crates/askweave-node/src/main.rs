//! # AskWeave
//!
//! Command-line front end for the AskWeave Q&A forum.
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments
//! 2. Install logging (`RUST_LOG`, default `info`; stderr, so stdout stays JSON)
//! 3. Load configuration from `AW_*` variables, then apply CLI overrides
//! 4. Open the store and wire the services
//! 5. Run one command, print its JSON result
//! 6. Close the store
//!
//! ```text
//! askweave --as alice ask "How do lifetimes work?" "..." -t rust
//! askweave --as bob answer <question-id> "..."
//! askweave list --sort hot
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use askweave_node::{execute, AskWeaveNode, Command, NodeConfig, StorageBackend};
use shared_types::Principal;

#[derive(Debug, Parser)]
#[command(name = "askweave")]
#[command(about = "AskWeave - questions, answers, votes, bounties and proposals", long_about = None)]
#[command(version)]
struct Cli {
    /// Principal to act as
    #[arg(long = "as", env = "AW_PRINCIPAL", global = true)]
    principal: Option<Principal>,

    /// Data directory (overrides AW_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    memory: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn config(&self) -> NodeConfig {
        let mut config = NodeConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        if self.memory {
            config.storage.backend = StorageBackend::Memory;
        }
        config
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    config.log_summary();

    let node = AskWeaveNode::start(config).await?;
    let result = execute(&node, cli.command, cli.principal.as_ref()).await;
    node.shutdown().await?;

    let output = serde_json::to_string_pretty(&result?).context("failed to render output")?;
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
