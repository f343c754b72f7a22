//! CLI for the igrab media grabber.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use igrab_core::config;
use std::path::PathBuf;

use commands::{run_check, run_grab, run_resolve};

/// Top-level CLI for the igrab media grabber.
#[derive(Debug, Parser)]
#[command(name = "igrab")]
#[command(about = "igrab: download the media file behind an Instagram post URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a post URL and download its media file.
    Grab {
        /// Post URL (a /p/ or /tv/ page).
        url: String,
        /// Directory to save into (default: config download_dir, else cwd).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
        /// Skip the completion notice.
        #[arg(long)]
        no_notify: bool,
    },

    /// Resolve a post URL and print the direct media URL without downloading.
    Resolve {
        /// Post URL (a /p/ or /tv/ page).
        url: String,
    },

    /// Check whether a string is an acceptable post URL (exit code 0/1).
    Check {
        /// Candidate URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Grab {
                url,
                download_dir,
                no_notify,
            } => run_grab(&cfg, &url, download_dir, !no_notify).await?,
            CliCommand::Resolve { url } => run_resolve(&cfg, &url).await?,
            CliCommand::Check { url } => run_check(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
