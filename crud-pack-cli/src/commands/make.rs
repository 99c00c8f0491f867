//! `crud-pack make`
//!
//! Generates one resource. Flags left open are asked for; with `-n` every
//! question takes its default.
//!
//! # Example
//!
//! ```bash
//! crud-pack make ProductCategory --web --soft-deletes --all --policy-style=gate
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use crud_pack::config::NavResource;
use crud_pack::fs::LocalFs;
use crud_pack::generator::{ArtifactKind, ScaffoldGenerator};
use crud_pack::naming::ResourceName;
use crud_pack::plan::{resolve, ControllerKind, GenerationPlan, MakeFlags};
use crud_pack::prompt::PromptPort;

use super::{failures, load_config, print_artifact, print_warning};

/// Arguments of `make`
#[derive(Debug, Clone, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct MakeArgs {
    /// Singular StudlyCase resource name (`Category`, `ProductCategory`)
    pub name: String,

    /// Blade-backed web controller
    #[arg(long)]
    pub web: bool,

    /// JSON API controller
    #[arg(long)]
    pub api: bool,

    /// Enable soft deletes
    #[arg(long)]
    pub soft_deletes: bool,

    /// Disable soft deletes
    #[arg(long)]
    pub no_soft_deletes: bool,

    /// Generate every artifact
    #[arg(long)]
    pub all: bool,

    /// Append the route block
    #[arg(long)]
    pub routes: bool,

    /// Generate the form request
    #[arg(long)]
    pub request: bool,

    /// Generate the model
    #[arg(long)]
    pub model: bool,

    /// Generate the migration
    #[arg(long)]
    pub migration: bool,

    /// Generate Blade views (web only)
    #[arg(long)]
    pub views: bool,

    /// Generate the policy
    #[arg(long)]
    pub policy: bool,

    /// Authorization style: none, authorize, gate or resource
    #[arg(long, value_name = "STYLE")]
    pub policy_style: Option<String>,

    /// Overwrite existing files without asking
    #[arg(long)]
    pub force: bool,
}

impl MakeArgs {
    /// Flags handed to the plan resolver
    #[must_use]
    pub fn flags(&self) -> MakeFlags {
        MakeFlags {
            web: self.web,
            api: self.api,
            soft_deletes: self.soft_deletes,
            no_soft_deletes: self.no_soft_deletes,
            all: self.all,
            routes: self.routes,
            request: self.request,
            model: self.model,
            migration: self.migration,
            policy: self.policy,
            views: self.views,
            policy_style: self.policy_style.clone(),
            force: self.force,
        }
    }
}

/// Generate one CRUD resource
pub struct MakeCommand {
    project: PathBuf,
    name: String,
    flags: MakeFlags,
}

impl MakeCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(project: PathBuf, args: &MakeArgs) -> Self {
        Self {
            project,
            name: args.name.clone(),
            flags: args.flags(),
        }
    }

    /// Create a command from already-built flags
    #[must_use]
    pub const fn with_flags(project: PathBuf, name: String, flags: MakeFlags) -> Self {
        Self { project, name, flags }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails on an invalid name, conflicting flags, unreadable configuration
    /// or when any artifact could not be written.
    pub fn execute(&self, prompt: &dyn PromptPort) -> Result<()> {
        let name = ResourceName::derive(&self.name)?;
        let config = load_config(&self.project)?;

        let resolved = resolve(&self.flags, prompt).context("Invalid options for make")?;
        let plan = resolved.plan;

        println!(
            "\n{} {} {}",
            style("Scaffolding CRUD for").cyan().bold(),
            style(name.class()).green().bold(),
            style(format!("({}, {})", plan.kind.as_str(), soft_label(plan.soft_deletes))).dim()
        );

        for warning in &resolved.warnings {
            print_warning(warning);
        }

        let fs = LocalFs::new(&self.project);
        let report = ScaffoldGenerator::new(&fs, prompt, &config).generate(&name, &plan);

        println!();
        for artifact in &report.artifacts {
            print_artifact(artifact);
        }
        for warning in &report.warnings {
            print_warning(warning);
        }

        let failed = failures(&report.artifacts);
        if failed > 0 {
            anyhow::bail!("{failed} artifact(s) for {} could not be generated", name.class());
        }

        println!(
            "\n{} CRUD scaffold for {} is ready!",
            style("✨").green().bold(),
            style(name.class()).green().bold()
        );

        if plan.is_web() {
            print_nav_entry(&name, &plan);
        }
        print_next_steps(&name, &plan, report.artifacts.iter().any(|a| a.kind == ArtifactKind::Collection));

        Ok(())
    }
}

const fn soft_label(soft_deletes: bool) -> &'static str {
    if soft_deletes {
        "soft deletes"
    } else {
        "hard deletes"
    }
}

fn print_nav_entry(name: &ResourceName, plan: &GenerationPlan) {
    let entry = NavResource::for_resource(name, plan.soft_deletes);

    println!(
        "\n{} {}",
        style("Navigation entry").cyan().bold(),
        style("(add to 'resources' in config/crud-pack.php):").dim()
    );
    for line in entry.to_php_entry().lines() {
        println!("    {}", style(line).yellow());
    }
}

fn print_next_steps(name: &ResourceName, plan: &GenerationPlan, synced: bool) {
    println!("\n{}", style("Next steps:").cyan().bold());

    let mut step = 1;
    if plan.artifacts.migration {
        println!("  {step}. Run the migration: {}", style("php artisan migrate").yellow());
        step += 1;
    }
    if !plan.artifacts.routes {
        println!(
            "  {step}. Register routes: {}",
            style(format!("crud-pack make {} --routes", name.class())).yellow()
        );
        step += 1;
    }
    match plan.kind {
        ControllerKind::Web => println!("  {step}. Open {}", style(format!("/{}", name.uri())).yellow()),
        ControllerKind::Api if synced => {
            println!("  {step}. Import the Postman collection and set {{{{base_url}}}}");
        }
        ControllerKind::Api => println!("  {step}. Sync Postman: {}", style("crud-pack postman").yellow()),
    }
}
