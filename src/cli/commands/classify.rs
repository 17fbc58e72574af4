//! Document classification command.

use std::path::PathBuf;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::classifier::Classifier;
use crate::config::ClassifyConfig;

use super::helpers::truncate;

/// Run the two-phase classifier over the corpus folders.
pub fn cmd_classify(
    config: ClassifyConfig,
    source_folder: PathBuf,
    normalized_folder: PathBuf,
    output_budget: PathBuf,
    output_cfo: PathBuf,
    progress: bool,
) -> anyhow::Result<()> {
    let classifier = Classifier::new(
        source_folder,
        normalized_folder,
        output_budget.clone(),
        output_cfo.clone(),
        config,
    );
    classifier.prepare_outputs()?;

    let total = classifier.normalized_files().len();
    if total == 0 {
        println!("{} No documents to classify", style("!").yellow());
        return Ok(());
    }

    let pb = if progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
                .unwrap(),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcome = classifier.process_documents_with(|file| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(truncate(&name, 50));
        pb.inc(1);
    });
    pb.finish_and_clear();

    println!("\n{}", style("Classification Results").bold());
    println!("{}", "-".repeat(50));
    println!(
        "  {:<22} {}",
        "Budget documents:",
        style(outcome.budget.len()).green()
    );
    println!(
        "  {:<22} {}",
        "CFO documents:",
        style(outcome.cfo.len()).green()
    );
    println!("  {:<22} {}", "Budget folder:", output_budget.display());
    println!("  {:<22} {}", "CFO folder:", output_cfo.display());
    if outcome.copy_failures > 0 {
        println!(
            "  {} {} file(s) failed to copy; counts reflect classification, not files on disk",
            style("!").yellow(),
            outcome.copy_failures
        );
    }

    Ok(())
}
