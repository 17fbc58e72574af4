//! Keyword inspection command.

use console::style;

use crate::config::ClassifyConfig;

/// Print the active keyword sets.
pub fn cmd_keywords(config: &ClassifyConfig) -> anyhow::Result<()> {
    println!("\n{}", style("Active Keyword Sets").bold());
    println!("{}", "-".repeat(50));

    println!("\n{}", style("Phase 1 (budget relevance):").cyan());
    for keyword in &config.phase1_keywords {
        println!("  {}", keyword);
    }

    println!("\n{}", style("Phase 2 (CFO subjects):").cyan());
    for keyword in &config.cfo_keywords {
        println!("  {}", keyword);
    }

    Ok(())
}
