//! crud-pack CLI library
//!
//! Command line surface for the [`crud_pack`] engine. The binary parses a
//! [`Cli`], installs logging and calls [`Cli::run`].

pub mod commands;
pub mod prompt;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{InstallCommand, MakeArgs, MakeCommand, PostmanCommand, TraitCommand};

pub use prompt::DialoguerPrompt;

/// Top-level arguments
#[derive(Debug, Parser)]
#[command(name = "crud-pack")]
#[command(version)]
#[command(about = "Laravel CRUD scaffolding: controllers, models, views, routes and Postman collections", long_about = None)]
pub struct Cli {
    /// Laravel project root
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Never prompt; every question takes its default answer
    #[arg(short = 'n', long, global = true)]
    pub no_interaction: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a CRUD resource
    Make(MakeArgs),
    /// Install the Bootstrap layout, navigation and navigation config
    Install {
        /// Overwrite existing files without asking
        #[arg(long)]
        force: bool,
    },
    /// Rebuild the Postman collection from routes/api.php
    Postman {
        /// Drop every generated folder before rebuilding
        #[arg(long)]
        force: bool,
    },
    /// Regenerate the shared HandlesDeletes controller trait
    #[command(name = "trait")]
    Trait {
        /// Overwrite without asking
        #[arg(long)]
        force: bool,
        /// Accepted for symmetry with `make`; the trait is always complete
        #[arg(long)]
        no_soft_deletes: bool,
    },
}

impl Cli {
    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns the command's error with context attached.
    pub fn run(&self) -> Result<()> {
        let prompt = prompt::for_session(self.no_interaction);
        let project = self.project.clone();

        match &self.command {
            Commands::Make(args) => MakeCommand::new(project, args).execute(prompt.as_ref()),
            Commands::Install { force } => InstallCommand::new(project, *force).execute(prompt.as_ref()),
            Commands::Postman { force } => PostmanCommand::new(project, *force).execute(),
            Commands::Trait {
                force,
                no_soft_deletes,
            } => TraitCommand::new(project, *force, *no_soft_deletes).execute(prompt.as_ref()),
        }
    }
}
