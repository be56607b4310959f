//! Agent Lab API
//!
//! HTTP backend for the agent collaboration web UI and a one-shot task
//! recorder invoked by the chat-bot integration.

use agent_lab_api::api;
use agent_lab_api::cli::{Cli, Command, RecordArgs};
use agent_lab_api::config::Settings;
use agent_lab_api::recorder::{self, RecordError};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    match cli.command {
        Some(Command::Record(args)) => run_record(&args).await,
        Some(Command::Check) => run_check().await,
        Some(Command::Serve) | None => run_serve().await,
    }
}

/// Run the HTTP API server until interrupted.
///
/// Configuration is validated up front; the process refuses to start
/// serving without credentials.
async fn run_serve() -> Result<()> {
    let settings = Settings::load()
        .context("SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must be set")?;

    api::run_server(&settings).await
}

/// Run the record subcommand.
///
/// Human-readable output on stdout and a non-zero exit code on failure,
/// which is the contract the chat-bot integration scripts against.
async fn run_record(args: &RecordArgs) -> Result<()> {
    match recorder::record_task(args).await {
        Ok(_) => {
            println!("Reflected task on web: {}", args.title);
            Ok(())
        }
        Err(RecordError::Config(e)) => {
            println!("Error: {}.", e);
            std::process::exit(1);
        }
        Err(e) => {
            println!("Error recording task: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the connectivity check subcommand.
async fn run_check() -> Result<()> {
    match recorder::check_connection().await {
        Ok(count) => {
            println!("Connection OK: {} agent(s) visible", count);
            Ok(())
        }
        Err(e) => {
            println!("Connection failed: {}", e);
            std::process::exit(1);
        }
    }
}
