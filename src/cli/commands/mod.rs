//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod classify;
mod helpers;
mod keywords;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ClassifyConfig;

#[derive(Parser)]
#[command(name = "doctriage")]
#[command(about = "Government legal document triage and classification")]
#[command(version)]
pub struct Cli {
    /// Keyword config file (TOML; overrides the built-in keyword sets)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Classify documents into budget and CFO output folders
    Classify {
        /// Folder with raw OCR text files
        #[arg(long, default_value = "text_output_ocr")]
        source_folder: PathBuf,
        /// Folder with lemmatized text files
        #[arg(long, default_value = "text_output_ocr_normalized")]
        normalized_folder: PathBuf,
        /// Output folder for budget-relevant documents
        #[arg(long, default_value = "бюджетные_документы")]
        output_budget: PathBuf,
        /// Output folder for CFO-subject documents
        #[arg(long, default_value = "документы_цфо")]
        output_cfo: PathBuf,
        /// Show per-file progress
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show the active keyword sets
    Keywords,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ClassifyConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify {
            source_folder,
            normalized_folder,
            output_budget,
            output_cfo,
            progress,
        } => classify::cmd_classify(
            config,
            source_folder,
            normalized_folder,
            output_budget,
            output_cfo,
            progress,
        ),
        Commands::Keywords => keywords::cmd_keywords(&config),
    }
}
