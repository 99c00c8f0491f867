//! Error types and error handling
//!
//! Errors are split by how far they reach:
//!
//! - [`ValidationError`] aborts a whole run before any file is touched.
//! - [`TemplateError`] aborts the single artifact being rendered.
//! - [`CrudPackError`] wraps both plus filesystem and document failures.
//!
//! A declined overwrite is not an error; it is reported as a skipped
//! [`ArtifactOutcome`](crate::generator::ArtifactOutcome).

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CrudPackError>;

/// Input that can never produce a valid generation run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Resource name does not match the singular `StudlyCase` pattern
    #[error("Invalid resource name '{name}'. Use singular StudlyCase like Category or ProductCategory.")]
    InvalidName {
        /// Name as typed by the user
        name: String,
    },

    /// Two mutually exclusive options were both given
    #[error("Choose either --{first} or --{second}, not both.")]
    ConflictingOptions {
        /// First option name (without dashes)
        first: &'static str,
        /// Second option name (without dashes)
        second: &'static str,
    },

    /// `--all` combined with explicit artifact switches
    #[error("Do not combine --all with explicit generator options (--routes/--request/--model/--migration/--policy/--views).")]
    AllWithExplicitArtifacts,

    /// Views requested for an API controller
    #[error("Views can only be generated for WEB controllers.")]
    ViewsRequireWeb,

    /// Route file contains a broken marker layout for a block
    #[error("Route file {path} has malformed CRUDPACK markers for [{key}]: {reason}")]
    MalformedRouteBlock {
        /// Route file path
        path: PathBuf,
        /// Block key (resource name)
        key: String,
        /// What is wrong with the markers
        reason: String,
    },
}

/// Template loading and rendering failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Neither a project override nor an embedded default exists
    #[error("Stub not found: {0}")]
    NotFound(String),

    /// Placeholders survived substitution; the file is not written
    #[error("Unreplaced placeholders in stub {template}: {}", tokens.join(", "))]
    UnreplacedPlaceholders {
        /// Template file name
        template: String,
        /// Every distinct leftover token, in order of first appearance
        tokens: Vec<String>,
    },
}

/// Crate-level error type
#[derive(Debug, Error)]
pub enum CrudPackError {
    /// Invalid input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Template failure
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Filesystem failure for a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A required project file is missing
    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Built-in configuration defaults could not be serialized
    #[error("Failed to serialize configuration defaults: {0}")]
    ConfigDefaults(#[from] toml::ser::Error),
}

impl CrudPackError {
    /// Build an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreplaced_placeholders_lists_every_token() {
        let err = TemplateError::UnreplacedPlaceholders {
            template: "models/model.stub".to_string(),
            tokens: vec!["{{MODEL_CLASS}}".to_string(), "{{SOFT_MODEL_USE}}".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unreplaced placeholders in stub models/model.stub: {{MODEL_CLASS}}, {{SOFT_MODEL_USE}}"
        );
    }

    #[test]
    fn test_conflicting_options_message() {
        let err = ValidationError::ConflictingOptions {
            first: "web",
            second: "api",
        };
        assert_eq!(err.to_string(), "Choose either --web or --api, not both.");
    }

    #[test]
    fn test_validation_converts_into_crate_error() {
        let err: CrudPackError = ValidationError::ViewsRequireWeb.into();
        assert!(matches!(err, CrudPackError::Validation(ValidationError::ViewsRequireWeb)));
    }
}
