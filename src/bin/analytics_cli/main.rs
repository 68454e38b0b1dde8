// ABOUTME: Analytics CLI - scores imported conversations and prints results as JSON
// ABOUTME: Handles single analysis, batch runs with dashboard output, and lexicon inspection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one conversation and print its report
//! analytics-cli analyze conversation.json
//!
//! # Import a list of conversations and analyze the pending ones
//! analytics-cli batch conversations.json --scope pending
//!
//! # Same, with dashboard totals and today's report
//! analytics-cli batch conversations.json --dashboard --daily
//!
//! # Show the phrase lexicon in use (honours ANALYTICS_LEXICON_FILE)
//! analytics-cli lexicon
//! ```
//!
//! Results go to stdout, logs to stderr.

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use conversation_analytics::config::AnalyticsConfig;
use conversation_analytics::logging::{LogFormat, LoggingConfig};
use conversation_analytics::storage::BatchScope;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "analytics-cli",
    about = "Conversation analytics CLI",
    long_about = "Scores human/agent chat transcripts and reports quality metrics as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log format override (json, pretty, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze one conversation from a JSON import file
    Analyze {
        /// Path to a conversation import (`{"title": ..., "messages": [...]}`)
        file: PathBuf,
    },

    /// Import a JSON list of conversations and run a batch analysis
    Batch {
        /// Path to a JSON array of conversation imports
        file: PathBuf,

        /// Which conversations to analyze (default from ANALYTICS_DEFAULT_SCOPE)
        #[arg(long)]
        scope: Option<BatchScope>,

        /// Also print dashboard totals
        #[arg(long)]
        dashboard: bool,

        /// Also print the report for analyses created today
        #[arg(long)]
        daily: bool,
    },

    /// Print the active phrase lexicon
    Lexicon,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .with_overrides(cli.verbose.then_some("debug"), cli.log_format)
        .init()?;

    let config = AnalyticsConfig::from_env()?;
    debug!(?config.batch, "Analytics CLI configured");

    match cli.command {
        Command::Analyze { file } => commands::analyze::run(&config, &file).await?,
        Command::Batch {
            file,
            scope,
            dashboard,
            daily,
        } => {
            let options = commands::batch::BatchOptions {
                scope: scope.unwrap_or(config.batch.default_scope),
                dashboard,
                daily,
            };
            commands::batch::run(&config, &file, options).await?;
        }
        Command::Lexicon => commands::lexicon::run()?,
    }

    Ok(())
}
