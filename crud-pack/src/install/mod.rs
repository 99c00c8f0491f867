//! Bootstrap layout install
//!
//! Copies the layout, navigation, welcome page and navigation config into a
//! project. Each file goes through the same overwrite policy as generated
//! artifacts.

mod assets;

pub use assets::{APP_LAYOUT, NAVIGATION, NAV_CONFIG, WELCOME};

use std::path::PathBuf;

use crate::config::CrudPackConfig;
use crate::fs::ProjectFs;
use crate::generator::{ArtifactKind, ArtifactOutcome, ArtifactReport, FileWriter, OverwritePolicy};
use crate::prompt::PromptPort;

/// One file `install` writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Target path relative to the project root
    pub path: PathBuf,
    /// File contents
    pub contents: &'static str,
}

/// Every installed file, in install order
#[must_use]
pub fn assets(config: &CrudPackConfig) -> Vec<Asset> {
    let views = &config.paths.views;
    vec![
        Asset {
            path: views.join("layouts/app.blade.php"),
            contents: APP_LAYOUT,
        },
        Asset {
            path: views.join("layouts/navigation.blade.php"),
            contents: NAVIGATION,
        },
        Asset {
            path: views.join("welcome.blade.php"),
            contents: WELCOME,
        },
        Asset {
            path: config.paths.config.join("crud-pack.php"),
            contents: NAV_CONFIG,
        },
    ]
}

/// Write every asset
///
/// Existing files are overwritten with `force`, otherwise the user is asked
/// per file. Errors are reported per file.
pub fn install(
    fs: &dyn ProjectFs,
    prompt: &dyn PromptPort,
    config: &CrudPackConfig,
    force: bool,
) -> Vec<ArtifactReport> {
    let writer = FileWriter::new(fs, prompt);

    assets(config)
        .into_iter()
        .map(|asset| {
            let policy = OverwritePolicy::for_file(&asset.path, force);
            let outcome = writer
                .write(&asset.path, asset.contents, &policy)
                .unwrap_or_else(|error| {
                    tracing::error!(path = %asset.path.display(), %error, "install failed");
                    ArtifactOutcome::Failed(error.to_string())
                });
            ArtifactReport {
                kind: ArtifactKind::Asset,
                path: asset.path,
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{DefaultPrompt, MockPromptPort};
    use crate::testing::{MemoryFs, ScriptedPrompt};

    #[test]
    fn test_fresh_install_creates_everything() {
        let fs = MemoryFs::new();
        let reports = install(&fs, &DefaultPrompt, &CrudPackConfig::default(), false);

        let paths: Vec<_> = reports.iter().map(|r| r.path.to_string_lossy().into_owned()).collect();
        assert_eq!(
            paths,
            [
                "resources/views/layouts/app.blade.php",
                "resources/views/layouts/navigation.blade.php",
                "resources/views/welcome.blade.php",
                "config/crud-pack.php",
            ]
        );
        assert!(reports.iter().all(|r| r.outcome == ArtifactOutcome::Created));
        assert!(fs
            .contents("resources/views/layouts/navigation.blade.php")
            .unwrap()
            .contains("config('crud-pack.resources', [])"));
    }

    #[test]
    fn test_existing_files_are_confirmed_one_by_one() {
        let fs = MemoryFs::new()
            .with_file("resources/views/welcome.blade.php", "mine")
            .with_file("config/crud-pack.php", "<?php return ['resources' => []];");
        let prompt = ScriptedPrompt::new().confirm_with(true).confirm_with(false);

        let reports = install(&fs, &prompt, &CrudPackConfig::default(), false);

        assert_eq!(
            prompt.asked(),
            [
                "File exists: resources/views/welcome.blade.php. Replace it?",
                "File exists: config/crud-pack.php. Replace it?",
            ]
        );
        assert_eq!(reports[2].outcome, ArtifactOutcome::Updated);
        assert_eq!(reports[3].outcome, ArtifactOutcome::Skipped);
        assert_eq!(fs.contents("resources/views/welcome.blade.php").unwrap(), WELCOME);
    }

    #[test]
    fn test_force_never_prompts() {
        let fs = MemoryFs::new().with_file("resources/views/layouts/app.blade.php", "mine");
        let mut prompt = MockPromptPort::new();
        prompt.expect_confirm().never();

        let reports = install(&fs, &prompt, &CrudPackConfig::default(), true);

        assert_eq!(reports[0].outcome, ArtifactOutcome::Updated);
        assert_eq!(fs.write_count(), 4);
    }
}
