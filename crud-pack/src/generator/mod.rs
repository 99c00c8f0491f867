//! Artifact generation
//!
//! [`ScaffoldGenerator`] turns a resolved [`GenerationPlan`] into files:
//!
//! 1. shared `HandlesDeletes` trait (ensured on every run)
//! 2. controller
//! 3. request, model, migration, policy (per plan)
//! 4. views (web only)
//! 5. route block, then the Postman collection for API routes
//!
//! Each artifact is rendered, then handed to [`FileWriter`], which applies
//! the overwrite policy. A failing artifact is reported and the run moves on;
//! nothing is rolled back.

pub mod context;
pub mod migration;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::collection::{self, SyncOutcome};
use crate::config::CrudPackConfig;
use crate::error::{CrudPackError, Result};
use crate::fs::ProjectFs;
use crate::naming::ResourceName;
use crate::plan::{ControllerKind, GenerationPlan};
use crate::prompt::PromptPort;
use crate::routes::{route_block_body, RouteBlockUpserter, UpsertOutcome};
use crate::template::{TemplateContext, TemplateEngine, TemplateId};

/// What a generated file is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `HandlesDeletes` controller trait
    SharedTrait,
    /// Web or API controller
    Controller,
    /// Form request
    Request,
    /// Eloquent model
    Model,
    /// Create-table migration
    Migration,
    /// Policy
    Policy,
    /// Blade view
    View,
    /// Route block in a route file
    Routes,
    /// Postman collection
    Collection,
    /// Layout or config file copied by `install`
    Asset,
}

impl ArtifactKind {
    /// Short label for reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SharedTrait => "trait",
            Self::Controller => "controller",
            Self::Request => "request",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Policy => "policy",
            Self::View => "view",
            Self::Routes => "routes",
            Self::Collection => "collection",
            Self::Asset => "asset",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened to one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// New file written
    Created,
    /// Existing file overwritten, or route block replaced
    Updated,
    /// Left as it was (declined, or kept because it already exists)
    Skipped,
    /// Not written; the message says why
    Failed(String),
}

/// Outcome of one artifact, with its path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Target path
    pub path: PathBuf,
    /// Outcome
    pub outcome: ArtifactOutcome,
}

impl ArtifactReport {
    fn new(kind: ArtifactKind, path: impl Into<PathBuf>, outcome: ArtifactOutcome) -> Self {
        Self {
            kind,
            path: path.into(),
            outcome,
        }
    }

    fn failed(kind: ArtifactKind, path: impl Into<PathBuf>, error: &CrudPackError) -> Self {
        let path = path.into();
        tracing::error!(%kind, path = %path.display(), %error, "artifact failed");
        Self::new(kind, path, ArtifactOutcome::Failed(error.to_string()))
    }
}

/// Everything a `make` run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Per-artifact outcomes, in generation order
    pub artifacts: Vec<ArtifactReport>,
    /// Recoverable problems worth telling the user about
    pub warnings: Vec<String>,
}

impl GenerationReport {
    /// Whether any artifact failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.artifacts
            .iter()
            .any(|a| matches!(a.outcome, ArtifactOutcome::Failed(_)))
    }
}

/// How to treat a target that already exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Overwrite without asking
    Force,
    /// Ask this question, default no
    Ask(String),
    /// Leave it alone
    Keep,
}

impl OverwritePolicy {
    /// `Force` with `force`, otherwise ask "File exists: <path>. Replace it?"
    #[must_use]
    pub fn for_file(path: &Path, force: bool) -> Self {
        if force {
            Self::Force
        } else {
            Self::Ask(format!("File exists: {}. Replace it?", path.display()))
        }
    }
}

/// Applies an [`OverwritePolicy`] to file writes
pub struct FileWriter<'a> {
    fs: &'a dyn ProjectFs,
    prompt: &'a dyn PromptPort,
}

impl<'a> FileWriter<'a> {
    /// Create a writer
    pub fn new(fs: &'a dyn ProjectFs, prompt: &'a dyn PromptPort) -> Self {
        Self { fs, prompt }
    }

    /// Write `contents` to `path` unless the policy says otherwise
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn write(&self, path: &Path, contents: &str, policy: &OverwritePolicy) -> Result<ArtifactOutcome> {
        let exists = self.fs.exists(path);

        if exists {
            let replace = match policy {
                OverwritePolicy::Force => true,
                OverwritePolicy::Ask(question) => self.prompt.confirm(question, false),
                OverwritePolicy::Keep => false,
            };
            if !replace {
                tracing::info!(path = %path.display(), "kept existing file");
                return Ok(ArtifactOutcome::Skipped);
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.mkdir(parent)?;
        }
        self.fs.write(path, contents)?;

        if exists {
            tracing::info!(path = %path.display(), "overwrote file");
            Ok(ArtifactOutcome::Updated)
        } else {
            tracing::info!(path = %path.display(), "created file");
            Ok(ArtifactOutcome::Created)
        }
    }
}

/// Generates every artifact of a plan for one resource
pub struct ScaffoldGenerator<'a> {
    fs: &'a dyn ProjectFs,
    prompt: &'a dyn PromptPort,
    config: &'a CrudPackConfig,
    timestamp: Option<NaiveDateTime>,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a generator for the project described by `config`
    pub fn new(fs: &'a dyn ProjectFs, prompt: &'a dyn PromptPort, config: &'a CrudPackConfig) -> Self {
        Self {
            fs,
            prompt,
            config,
            timestamp: None,
        }
    }

    /// Use a fixed timestamp for new migration file names
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn engine(&self) -> TemplateEngine<'a> {
        TemplateEngine::new(self.fs, self.config.paths.stubs.clone())
    }

    fn writer(&self) -> FileWriter<'a> {
        FileWriter::new(self.fs, self.prompt)
    }

    /// `app/Http/Controllers/Concerns/HandlesDeletes.php`
    #[must_use]
    pub fn shared_trait_path(&self) -> PathBuf {
        self.config
            .paths
            .app
            .join("Http/Controllers/Concerns/HandlesDeletes.php")
    }

    /// Run every step of `plan` for `name`
    pub fn generate(&self, name: &ResourceName, plan: &GenerationPlan) -> GenerationReport {
        tracing::info!(resource = %name, kind = plan.kind.as_str(), soft_deletes = plan.soft_deletes, "generating");

        let mut report = GenerationReport::default();
        let trait_policy = if plan.force {
            OverwritePolicy::Force
        } else {
            OverwritePolicy::Keep
        };

        report.artifacts.push(self.write_shared_trait(&trait_policy));
        report.artifacts.push(self.generate_controller(name, plan));

        if plan.artifacts.request {
            report.artifacts.push(self.generate_request(name, plan));
        }
        if plan.artifacts.model {
            report.artifacts.push(self.generate_model(name, plan));
        }
        if plan.artifacts.migration {
            report
                .artifacts
                .push(self.generate_migration(name, plan, &mut report.warnings));
        }
        if plan.artifacts.policy {
            report.artifacts.push(self.generate_policy(name, plan));
        }
        if plan.artifacts.views && plan.is_web() {
            report.artifacts.extend(self.generate_views(name, plan));
        }
        if plan.artifacts.routes {
            report.artifacts.push(self.generate_routes(name, plan));

            if plan.kind == ControllerKind::Api {
                report.artifacts.push(self.sync_collection());
            }
        }

        report
    }

    /// Write the shared trait under `policy`
    pub fn write_shared_trait(&self, policy: &OverwritePolicy) -> ArtifactReport {
        let path = self.shared_trait_path();
        self.emit(
            ArtifactKind::SharedTrait,
            TemplateId::HandlesDeletesTrait,
            None,
            path,
            policy,
        )
    }

    /// Render `template` with the context for `target` and write it
    fn emit(
        &self,
        kind: ArtifactKind,
        template: TemplateId,
        target: Option<(&ResourceName, &GenerationPlan)>,
        path: PathBuf,
        policy: &OverwritePolicy,
    ) -> ArtifactReport {
        let rendered = match target {
            Some((name, plan)) => context::build(template, plan, name)
                .map_err(CrudPackError::from)
                .and_then(|ctx| self.engine().render(template, &ctx)),
            None => self
                .engine()
                .render(template, &TemplateContext::new()),
        };

        let result = rendered.and_then(|contents| self.writer().write(&path, &contents, policy));
        match result {
            Ok(outcome) => ArtifactReport::new(kind, path, outcome),
            Err(error) => ArtifactReport::failed(kind, path, &error),
        }
    }

    fn emit_file(
        &self,
        kind: ArtifactKind,
        template: TemplateId,
        name: &ResourceName,
        plan: &GenerationPlan,
        path: PathBuf,
    ) -> ArtifactReport {
        let policy = OverwritePolicy::for_file(&path, plan.force);
        self.emit(kind, template, Some((name, plan)), path, &policy)
    }

    fn generate_controller(&self, name: &ResourceName, plan: &GenerationPlan) -> ArtifactReport {
        let controllers = self.config.paths.app.join("Http/Controllers");
        let (template, path) = match plan.kind {
            ControllerKind::Web => (
                TemplateId::WebController,
                controllers.join(format!("{}Controller.php", name.class())),
            ),
            ControllerKind::Api => (
                TemplateId::ApiController,
                controllers.join(format!("Api/{}Controller.php", name.class())),
            ),
        };
        self.emit_file(ArtifactKind::Controller, template, name, plan, path)
    }

    fn generate_request(&self, name: &ResourceName, plan: &GenerationPlan) -> ArtifactReport {
        let path = self
            .config
            .paths
            .app
            .join(format!("Http/Requests/{}Request.php", name.class()));
        self.emit_file(ArtifactKind::Request, TemplateId::Request, name, plan, path)
    }

    fn generate_model(&self, name: &ResourceName, plan: &GenerationPlan) -> ArtifactReport {
        let path = self.config.paths.app.join(format!("Models/{}.php", name.class()));
        self.emit_file(ArtifactKind::Model, TemplateId::Model, name, plan, path)
    }

    fn generate_migration(
        &self,
        name: &ResourceName,
        plan: &GenerationPlan,
        warnings: &mut Vec<String>,
    ) -> ArtifactReport {
        let dir = &self.config.paths.migrations;
        let table = name.table();

        let existing = match self.fs.list(dir) {
            Ok(files) => migration::find_existing(&files, table),
            Err(error) => return ArtifactReport::failed(ArtifactKind::Migration, dir, &error),
        };

        let (path, policy) = match existing.first() {
            Some(file) => {
                if existing.len() > 1 {
                    let warning = format!(
                        "Several create migrations found for [{table}] ({}); using {file}.",
                        existing.join(", ")
                    );
                    tracing::warn!(table, count = existing.len(), "several create migrations found");
                    warnings.push(warning);
                }
                let policy = if plan.force {
                    OverwritePolicy::Force
                } else {
                    OverwritePolicy::Ask(format!(
                        "Migration for [{table}] already exists ({file}). Replace it?"
                    ))
                };
                (dir.join(file), policy)
            }
            None => {
                let timestamp = self
                    .timestamp
                    .unwrap_or_else(|| chrono::Local::now().naive_local());
                (dir.join(migration::new_file_name(table, timestamp)), OverwritePolicy::Force)
            }
        };

        self.emit(ArtifactKind::Migration, TemplateId::Migration, Some((name, plan)), path, &policy)
    }

    fn generate_policy(&self, name: &ResourceName, plan: &GenerationPlan) -> ArtifactReport {
        let path = self.config.paths.app.join(format!("Policies/{}Policy.php", name.class()));
        self.emit_file(ArtifactKind::Policy, TemplateId::Policy, name, plan, path)
    }

    fn generate_views(&self, name: &ResourceName, plan: &GenerationPlan) -> Vec<ArtifactReport> {
        let dir = self.config.paths.views.join(name.view_folder());

        let mut views = vec![
            (TemplateId::IndexView, "index"),
            (TemplateId::CreateView, "create"),
            (TemplateId::EditView, "edit"),
            (TemplateId::ShowView, "show"),
            (TemplateId::FormView, "_form"),
        ];
        if plan.soft_deletes {
            views.push((TemplateId::TrashView, "trash"));
        }

        views
            .into_iter()
            .map(|(template, file)| {
                let path = dir.join(format!("{file}.blade.php"));
                self.emit_file(ArtifactKind::View, template, name, plan, path)
            })
            .collect()
    }

    fn generate_routes(&self, name: &ResourceName, plan: &GenerationPlan) -> ArtifactReport {
        let path = match plan.kind {
            ControllerKind::Web => self.config.paths.web_routes(),
            ControllerKind::Api => self.config.paths.api_routes(),
        };
        let body = route_block_body(plan.kind, plan.soft_deletes, name);

        match RouteBlockUpserter::new(self.fs, self.prompt).upsert(&path, name.class(), &body, plan.force) {
            Ok(outcome) => {
                let outcome = match outcome {
                    UpsertOutcome::Inserted => ArtifactOutcome::Created,
                    UpsertOutcome::Replaced => ArtifactOutcome::Updated,
                    UpsertOutcome::Skipped => ArtifactOutcome::Skipped,
                };
                ArtifactReport::new(ArtifactKind::Routes, path, outcome)
            }
            Err(error) => ArtifactReport::failed(ArtifactKind::Routes, path, &error),
        }
    }

    fn sync_collection(&self) -> ArtifactReport {
        let path = self.config.paths.collection.clone();
        let existed = self.fs.exists(&path);

        match collection::sync_project(self.fs, self.config, false) {
            Ok(SyncOutcome::Written { .. }) if existed => {
                ArtifactReport::new(ArtifactKind::Collection, path, ArtifactOutcome::Updated)
            }
            Ok(SyncOutcome::Written { .. }) => {
                ArtifactReport::new(ArtifactKind::Collection, path, ArtifactOutcome::Created)
            }
            Ok(SyncOutcome::NoBlocks) => {
                ArtifactReport::new(ArtifactKind::Collection, path, ArtifactOutcome::Skipped)
            }
            Err(error) => ArtifactReport::failed(ArtifactKind::Collection, path, &error),
        }
    }
}
