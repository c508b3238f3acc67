// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Complete - Main entrypoint.
//!
//! Loads configuration, initializes logging, fills a prefix tree from a word
//! list and answers completion queries against it.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prefix_complete_lib::config::{AppConfig, ConfigLoader, ConfigResult, LogConfig, ENV_PREFIX};
use prefix_complete_lib::data_structures::prefix_tree::{loader, LoadStats, PrefixTree};
use prefix_complete_lib::error::config::ConfigError;
use prefix_complete_lib::error::{
    report_error, set_error_reporter, CompleteError, CompleteResult, ErrorContext,
    TracingErrorReporter,
};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Command line arguments for Prefix Complete.
#[derive(Parser, Debug)]
#[clap(name = "Prefix Complete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the words that start with a prefix
    Complete {
        /// Prefix to complete (empty lists every word)
        #[clap(default_value = "")]
        prefix: String,

        /// Word list to load, overriding `word_list.path`
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Maximum suggestions, overriding `completion.max_suggestions` (0 for no limit)
        #[clap(short, long)]
        limit: Option<usize>,

        /// Print suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Check whether a word is in the word list
    Contains {
        /// Word to look up
        word: String,

        /// Word list to load, overriding `word_list.path`
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,
    },

    /// Load the word list and print its statistics
    Stats {
        /// Word list to load, overriding `word_list.path`
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Complete { .. } => "complete",
            Command::Contains { .. } => "contains",
            Command::Stats { .. } => "stats",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_logging(config: &LogConfig) -> CompleteResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.pretty()).try_init()
    };

    result.map_err(|e| CompleteError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a tree from the word list named on the command line or in config.
fn build_tree(config: &AppConfig, words: Option<PathBuf>) -> CompleteResult<(PrefixTree, LoadStats)> {
    let path = words
        .or_else(|| config.word_list.path.clone())
        .ok_or_else(|| ConfigError::MissingValue("word_list.path".to_string()))?;

    let mut tree = PrefixTree::with_config(config.tree.clone());
    let stats = loader::load_from_path(&mut tree, &path, &config.word_list)?;
    Ok((tree, stats))
}

fn run(command: Command, loaded: ConfigResult<AppConfig>) -> CompleteResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Complete {
            prefix,
            words,
            limit,
            json,
        } => {
            let config = loaded?;
            let (tree, _) = build_tree(&config, words)?;
            let limit = limit.unwrap_or(config.completion.max_suggestions);
            let suggestions = tree.suggestions(&prefix, limit);
            info!(prefix = %prefix, count = suggestions.len(), "Completed prefix");

            if json {
                serde_json::to_writer(&mut out, &suggestions)?;
                writeln!(out)?;
            } else {
                for word in &suggestions {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Command::Contains { word, words } => {
            let config = loaded?;
            let (tree, _) = build_tree(&config, words)?;
            writeln!(out, "{}", tree.contains(&word))?;
        }
        Command::Stats { words } => {
            let config = loaded?;
            let (tree, stats) = build_tree(&config, words)?;
            writeln!(out, "lines: {}", stats.lines)?;
            writeln!(out, "added: {}", stats.added)?;
            writeln!(out, "duplicates: {}", stats.duplicates)?;
            writeln!(out, "skipped: {}", stats.skipped)?;
            writeln!(out, "size: {}", tree.size())?;
        }
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
            writeln!(out, "Configuration is valid")?;
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| CompleteError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}


/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // An unusable config still needs logging to report why
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command_name = args.command.name();
    let span = tracing::info_span!("command", name = command_name);
    let _entered = span.enter();

    if let Err(error) = run(args.command, loaded) {
        let details = match &args.config {
            Some(path) => format!("command: {command_name}, config: {}", path.display()),
            None => format!("command: {command_name}"),
        };
        report_error(
            ErrorContext::new(error, "cli")
                .with_details(details)
                .with_span_trace(),
        );
        process::exit(1);
    }
}
