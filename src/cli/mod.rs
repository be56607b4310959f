//! CLI command definitions for the agent lab API.
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands;
//! `serve` is the default when no subcommand is given.

use clap::{Args, Parser, Subcommand};

/// Agent collaboration API server and task recorder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server (default if no subcommand given)
    Serve,

    /// Record a task from the chat-bot trigger
    Record(RecordArgs),

    /// Verify that the configured credentials can reach the database
    Check,
}

/// Arguments for the `record` subcommand.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Task status
    #[arg(long, default_value = "running")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_title() {
        let result = Cli::try_parse_from(["agent-lab", "record"]);
        assert!(result.is_err());
    }

    #[test]
    fn record_status_defaults_to_running() {
        let cli = Cli::try_parse_from(["agent-lab", "record", "--title", "Test B"]).unwrap();

        match cli.command {
            Some(Command::Record(args)) => {
                assert_eq!(args.title, "Test B");
                assert_eq!(args.status, "running");
            }
            other => panic!("Expected record subcommand, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["agent-lab"]).unwrap();
        assert!(cli.command.is_none());
    }
}
