//! `crud-pack postman`

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use crud_pack::collection::{sync_project, SyncOutcome};
use crud_pack::fs::LocalFs;

use super::{load_config, print_warning, spinner};

/// Rebuild the Postman collection from the API route blocks
pub struct PostmanCommand {
    project: PathBuf,
    force: bool,
}

impl PostmanCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(project: PathBuf, force: bool) -> Self {
        Self { project, force }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails when `routes/api.php` is missing or the collection cannot be
    /// written.
    pub fn execute(&self) -> Result<()> {
        let config = load_config(&self.project)?;
        let fs = LocalFs::new(&self.project);

        let progress = spinner(console::user_attended(), "Reading API route blocks...")?;
        let outcome = sync_project(&fs, &config, self.force);
        progress.finish_and_clear();

        let outcome = outcome.with_context(|| {
            format!(
                "Failed to sync Postman collection from {}",
                config.paths.api_routes().display()
            )
        })?;

        match outcome {
            SyncOutcome::Written { folders } => {
                println!(
                    "\n{} {}",
                    style("Postman collection updated:").green().bold(),
                    style(config.paths.collection.display()).dim()
                );
                for folder in &folders {
                    println!("  {} {}", style("✓").green(), folder);
                }
                if folders.is_empty() {
                    println!("  {}", style("No CRUDPACK blocks left; generated folders removed.").dim());
                }
            }
            SyncOutcome::NoBlocks => {
                print_warning(&format!(
                    "No CRUDPACK blocks found in {}. Nothing to generate.",
                    config.paths.api_routes().display()
                ));
            }
        }

        Ok(())
    }
}
