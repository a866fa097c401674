//! Access - command-line entry point
//!
//! Loads the store, runs one use case, prints its JSON result and writes
//! the store back when the command can change it.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::StoreConfig;

use crate::cli::Cli;
use crate::context::Context;
use crate::error::CommandResult;

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> CommandResult<()> {
    let path = cli.store.unwrap_or_else(|| StoreConfig::from_env().path);
    let ctx = Context::open(path).await?;
    tracing::debug!(path = %ctx.path().display(), "Store loaded");

    let writes = cli.command.writes();
    let mut result = commands::execute(cli.command, &ctx).await;

    // Registration may fail after its first write; keep whatever landed.
    if writes {
        result = settle(result, ctx.save().await);
    }

    let value = result?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Combine a command outcome with the save that followed it. A failed
/// command keeps its own error; the save failure is only logged.
fn settle(result: CommandResult<Value>, saved: CommandResult<()>) -> CommandResult<Value> {
    match (result, saved) {
        (Ok(value), saved) => saved.map(|()| value),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(save_error)) => {
            tracing::error!(error = %save_error, "Failed to save store after command error");
            Err(e)
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
