//! `crud-pack install`

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use crud_pack::fs::LocalFs;
use crud_pack::install::install;
use crud_pack::prompt::PromptPort;

use super::{failures, load_config, print_artifact};

/// Install the layout, navigation, welcome page and navigation config
pub struct InstallCommand {
    project: PathBuf,
    force: bool,
}

impl InstallCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(project: PathBuf, force: bool) -> Self {
        Self { project, force }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails on unreadable configuration or when a file could not be written.
    pub fn execute(&self, prompt: &dyn PromptPort) -> Result<()> {
        let config = load_config(&self.project)?;

        println!("\n{}", style("Installing crud-pack layout...").cyan().bold());

        let fs = LocalFs::new(&self.project);
        let reports = install(&fs, prompt, &config, self.force);

        println!();
        for report in &reports {
            print_artifact(report);
        }

        let failed = failures(&reports);
        if failed > 0 {
            anyhow::bail!("{failed} file(s) could not be installed");
        }

        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. List your resources under 'resources' in {}",
            style("config/crud-pack.php").yellow()
        );
        println!(
            "  2. Extend the layout in your views: {}",
            style("@extends('layouts.app')").yellow()
        );

        Ok(())
    }
}
