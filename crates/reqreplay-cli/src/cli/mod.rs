//! CLI for replaying outline request files.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reqreplay_core::config;
use std::path::PathBuf;

use commands::{run_check, run_print_urls, run_replay};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "reqreplay")]
#[command(about = "Replay HTTP requests declared in outline files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Send every URL with the chosen method's headers and save the responses.
    Replay {
        /// HTTP request method; selects the `** METHOD` header set (default from config).
        #[arg(short, long, value_name = "METHOD")]
        method: Option<String>,
        /// Write captures here instead of next to each outline file.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Outline files to replay, in order.
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Print request URLs with their query parameters.
    PrintUrls {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Parse outline files without sending any request.
    Check {
        /// Print each parsed document as JSON.
        #[arg(long)]
        json: bool,
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Replay {
                method,
                output_dir,
                files,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let method = method.unwrap_or_else(|| cfg.default_method.clone());
                let output_dir = output_dir.or_else(|| cfg.output_dir.clone());
                run_replay(&cfg, &method, output_dir.as_deref(), &files).await?;
            }
            CliCommand::PrintUrls { files } => run_print_urls(&files).await?,
            CliCommand::Check { json, files } => run_check(&files, json).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
