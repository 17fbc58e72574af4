//! doctriage - government legal document triage and classification.
//!
//! Scans a corpus of OCR'd legal publications, applies a two-phase
//! keyword/structural filter against the morphologically normalized text,
//! and sorts matching source documents into output folders for review.

mod classifier;
mod cli;
mod config;
mod text;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "doctriage=info"
    } else {
        "doctriage=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run()
}
