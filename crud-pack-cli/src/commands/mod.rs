//! CLI command implementations

pub mod install;
pub mod make;
pub mod postman;
pub mod shared_trait;

pub use install::InstallCommand;
pub use make::{MakeArgs, MakeCommand};
pub use postman::PostmanCommand;
pub use shared_trait::TraitCommand;

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use crud_pack::config::CrudPackConfig;
use crud_pack::generator::{ArtifactOutcome, ArtifactReport};
use indicatif::{ProgressBar, ProgressStyle};

/// Load `crud-pack.toml` for `project`
fn load_config(project: &Path) -> Result<CrudPackConfig> {
    CrudPackConfig::load(project)
        .with_context(|| format!("Failed to load configuration for {}", project.display()))
}

/// Print one artifact outcome line
fn print_artifact(report: &ArtifactReport) {
    let path = report.path.display();
    match &report.outcome {
        ArtifactOutcome::Created => println!(
            "  {} {:<11} {}",
            style("✓").green(),
            report.kind.label(),
            style(path).dim()
        ),
        ArtifactOutcome::Updated => println!(
            "  {} {:<11} {} {}",
            style("✓").green(),
            report.kind.label(),
            style(path).dim(),
            style("(updated)").cyan()
        ),
        ArtifactOutcome::Skipped => println!(
            "  {} {:<11} {} {}",
            style("-").yellow(),
            report.kind.label(),
            style(path).dim(),
            style("(kept existing)").yellow()
        ),
        ArtifactOutcome::Failed(reason) => println!(
            "  {} {:<11} {} {}",
            style("✗").red(),
            report.kind.label(),
            style(path).dim(),
            style(reason).red()
        ),
    }
}

fn print_warning(message: &str) {
    println!("  {} {}", style("!").yellow().bold(), style(message).yellow());
}

/// Number of failed artifacts
fn failures(reports: &[ArtifactReport]) -> usize {
    reports
        .iter()
        .filter(|r| matches!(r.outcome, ArtifactOutcome::Failed(_)))
        .count()
}

/// Spinner shown while no prompt can appear; hidden otherwise
fn spinner(visible: bool, message: &'static str) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}
