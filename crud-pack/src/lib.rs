//! crud-pack: idempotent Laravel CRUD scaffolding
//!
//! Given a singular resource name and a handful of switches, crud-pack writes
//! the controller, model, migration, form request, policy, Blade views and
//! route block for a Laravel resource, and keeps a Postman collection in step
//! with the generated API routes.
//!
//! Regeneration is safe: route blocks are delimited by markers and replaced
//! in place, migrations are reused rather than duplicated, and existing files
//! are only overwritten with `--force` or after confirmation.
//!
//! # Quick Start
//!
//! ```rust
//! use crud_pack::prelude::*;
//! use crud_pack::testing::MemoryFs;
//!
//! # fn main() -> crud_pack::Result<()> {
//! let fs = MemoryFs::new();
//! let prompt = DefaultPrompt;
//! let config = CrudPackConfig::default();
//!
//! let name = ResourceName::derive("ProductCategory")?;
//! let flags = MakeFlags { web: true, soft_deletes: true, all: true, ..MakeFlags::default() };
//! let resolved = resolve(&flags, &prompt)?;
//!
//! let report = ScaffoldGenerator::new(&fs, &prompt, &config).generate(&name, &resolved.plan);
//! assert!(!report.has_failures());
//! assert!(fs.contents("routes/web.php").unwrap().contains("// CRUDPACK:ProductCategory:START"));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`naming`]: resource name validation and derived identifiers
//! - [`plan`]: flags and prompts resolved into a [`plan::GenerationPlan`]
//! - [`template`]: stub loading and strict placeholder substitution
//! - [`generator`]: per-artifact contexts, overwrite policy, orchestration
//! - [`routes`]: delimited route block upsert
//! - [`collection`]: Postman collection sync from API route blocks
//! - [`install`]: layout and navigation files

pub mod auth;
pub mod collection;
pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod install;
pub mod naming;
pub mod observability;
pub mod plan;
pub mod prompt;
pub mod routes;
pub mod template;
pub mod testing;

pub use error::{CrudPackError, Result, TemplateError, ValidationError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::auth::AuthStyle;
    pub use crate::config::{CrudPackConfig, NavResource};
    pub use crate::error::{CrudPackError, Result, TemplateError, ValidationError};
    pub use crate::fs::{LocalFs, ProjectFs};
    pub use crate::generator::{
        ArtifactKind, ArtifactOutcome, ArtifactReport, GenerationReport, OverwritePolicy, ScaffoldGenerator,
    };
    pub use crate::naming::ResourceName;
    pub use crate::plan::{resolve, ControllerKind, GenerationPlan, MakeFlags};
    pub use crate::prompt::{DefaultPrompt, PromptPort};
}
