//! `crud-pack trait`

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use crud_pack::fs::{LocalFs, ProjectFs};
use crud_pack::generator::{ArtifactOutcome, OverwritePolicy, ScaffoldGenerator};
use crud_pack::prompt::PromptPort;

use super::{load_config, print_artifact};

/// Regenerate the shared `HandlesDeletes` trait
pub struct TraitCommand {
    project: PathBuf,
    force: bool,
    no_soft_deletes: bool,
}

impl TraitCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(project: PathBuf, force: bool, no_soft_deletes: bool) -> Self {
        Self {
            project,
            force,
            no_soft_deletes,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails on unreadable configuration or when the trait cannot be written.
    pub fn execute(&self, prompt: &dyn PromptPort) -> Result<()> {
        let config = load_config(&self.project)?;
        let fs = LocalFs::new(&self.project);
        let generator = ScaffoldGenerator::new(&fs, prompt, &config);
        let path = generator.shared_trait_path();

        if self.no_soft_deletes {
            println!(
                "{}",
                style("The trait always includes the soft delete helpers; controllers without soft deletes never call them.")
                    .dim()
            );
        }

        let policy = if self.force || !fs.exists(&path) {
            OverwritePolicy::Force
        } else {
            OverwritePolicy::Ask(format!(
                "HandlesDeletes trait already exists at {}. Replace it?",
                path.display()
            ))
        };

        let report = generator.write_shared_trait(&policy);
        print_artifact(&report);

        if let ArtifactOutcome::Failed(reason) = &report.outcome {
            anyhow::bail!("Failed to write {}: {reason}", report.path.display());
        }

        Ok(())
    }
}
