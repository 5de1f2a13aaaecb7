//! CLI for the urlcheck phishing URL checker.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcheck_core::config;

use commands::{run_check, run_completions, run_lists};

/// Top-level CLI for the urlcheck phishing URL checker.
#[derive(Debug, Parser)]
#[command(name = "urlcheck")]
#[command(about = "urlcheck: heuristic phishing URL checker", long_about = None)]
pub struct Cli {
    /// Use a specific reference-list file instead of the XDG config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Evaluate a URL against the phishing heuristics.
    Check {
        /// URL to evaluate.
        url: String,

        /// Print the verdict as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the active reference lists.
    Lists,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Load the reference lists early; every command reads them except
        // completions, which tolerates the side effect of a first-run init.
        let lists = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!(
            "loaded lists: {} blacklisted, {} legitimate, {} keywords",
            lists.phishing_domains.len(),
            lists.legitimate_domains.len(),
            lists.suspicious_keywords.len()
        );

        match cli.command {
            CliCommand::Check { url, json } => run_check(lists, &url, json)?,
            CliCommand::Lists => run_lists(&lists),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
