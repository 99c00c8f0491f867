//! Generation plan resolution
//!
//! [`resolve`] turns the sparse flags of a `make` run into a complete
//! [`GenerationPlan`], asking the [`PromptPort`] for anything left open. The
//! plan is immutable afterwards and threaded through every generator.

use crate::auth::AuthStyle;
use crate::error::ValidationError;
use crate::prompt::PromptPort;

/// Kind of controller to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    /// Blade-backed web controller
    Web,
    /// JSON API controller
    Api,
}

impl ControllerKind {
    /// `web` or `api`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }
}

/// Raw `make` flags as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MakeFlags {
    /// `--web`
    pub web: bool,
    /// `--api`
    pub api: bool,
    /// `--soft-deletes`
    pub soft_deletes: bool,
    /// `--no-soft-deletes`
    pub no_soft_deletes: bool,
    /// `--all`
    pub all: bool,
    /// `--routes`
    pub routes: bool,
    /// `--request`
    pub request: bool,
    /// `--model`
    pub model: bool,
    /// `--migration`
    pub migration: bool,
    /// `--policy`
    pub policy: bool,
    /// `--views`
    pub views: bool,
    /// `--policy-style`
    pub policy_style: Option<String>,
    /// `--force`
    pub force: bool,
}

impl MakeFlags {
    fn any_artifact(&self) -> bool {
        self.routes || self.request || self.model || self.migration || self.policy || self.views
    }
}

/// Which artifacts a run emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Artifacts {
    /// Route block
    pub routes: bool,
    /// Form request
    pub request: bool,
    /// Eloquent model
    pub model: bool,
    /// Create-table migration
    pub migration: bool,
    /// Policy class
    pub policy: bool,
    /// Blade views
    pub views: bool,
}

impl Artifacts {
    /// Every artifact; views only for web controllers
    #[must_use]
    pub const fn all(kind: ControllerKind) -> Self {
        Self {
            routes: true,
            request: true,
            model: true,
            migration: true,
            policy: true,
            views: matches!(kind, ControllerKind::Web),
        }
    }
}

/// Fully resolved plan for one `make` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Controller kind
    pub kind: ControllerKind,
    /// Soft deletes enabled
    pub soft_deletes: bool,
    /// Authorization style; always `None` without a policy
    pub auth_style: AuthStyle,
    /// Artifact switches
    pub artifacts: Artifacts,
    /// Overwrite without asking
    pub force: bool,
}

impl GenerationPlan {
    /// Whether this is a web plan
    #[must_use]
    pub const fn is_web(&self) -> bool {
        matches!(self.kind, ControllerKind::Web)
    }
}

/// A plan plus the recoverable problems met while resolving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    /// The plan
    pub plan: GenerationPlan,
    /// Warnings to show the user
    pub warnings: Vec<String>,
}

/// Resolve `flags` into a plan, prompting for whatever they leave open
///
/// # Errors
///
/// Returns a [`ValidationError`] for conflicting flags or views on an API
/// controller. Nothing is prompted after a conflict is detected.
pub fn resolve(flags: &MakeFlags, prompt: &dyn PromptPort) -> Result<ResolvedPlan, ValidationError> {
    let mut warnings = Vec::new();

    let kind = match (flags.web, flags.api) {
        (true, true) => {
            return Err(ValidationError::ConflictingOptions {
                first: "web",
                second: "api",
            })
        }
        (true, false) => ControllerKind::Web,
        (false, true) => ControllerKind::Api,
        (false, false) => {
            let choice = prompt.choose_one("Controller type?", &["web", "api"], 0);
            if choice == "api" {
                ControllerKind::Api
            } else {
                ControllerKind::Web
            }
        }
    };

    let soft_deletes = match (flags.soft_deletes, flags.no_soft_deletes) {
        (true, true) => {
            return Err(ValidationError::ConflictingOptions {
                first: "soft-deletes",
                second: "no-soft-deletes",
            })
        }
        (true, false) => true,
        (false, true) => false,
        (false, false) => {
            prompt.choose_one("Soft deletes?", &["soft-deletes", "no-soft-deletes"], 0)
                != "no-soft-deletes"
        }
    };

    let artifacts = match (flags.all, flags.any_artifact()) {
        (true, true) => return Err(ValidationError::AllWithExplicitArtifacts),
        (true, false) => Artifacts::all(kind),
        (false, true) => Artifacts {
            routes: flags.routes,
            request: flags.request,
            model: flags.model,
            migration: flags.migration,
            policy: flags.policy,
            views: flags.views,
        },
        (false, false) => {
            tracing::info!("no generation options provided, running the wizard");
            wizard(kind, prompt)
        }
    };

    if kind == ControllerKind::Api && artifacts.views {
        return Err(ValidationError::ViewsRequireWeb);
    }

    let auth_style = resolve_auth_style(artifacts.policy, flags.policy_style.as_deref(), prompt, &mut warnings);

    let plan = GenerationPlan {
        kind,
        soft_deletes,
        auth_style,
        artifacts,
        force: flags.force,
    };
    tracing::debug!(?plan, "generation plan resolved");

    Ok(ResolvedPlan { plan, warnings })
}

fn wizard(kind: ControllerKind, prompt: &dyn PromptPort) -> Artifacts {
    Artifacts {
        routes: prompt.confirm("Append routes automatically?", true),
        model: prompt.confirm("Generate Model?", true),
        migration: prompt.confirm("Generate Migration?", true),
        request: prompt.confirm(
            "Generate Request validation (single FormRequest for store & update)?",
            false,
        ),
        policy: prompt.confirm("Generate Policy?", false),
        views: match kind {
            ControllerKind::Web => prompt.confirm("Generate Blade views (Bootstrap 5)?", true),
            ControllerKind::Api => false,
        },
    }
}

fn resolve_auth_style(
    policy: bool,
    explicit: Option<&str>,
    prompt: &dyn PromptPort,
    warnings: &mut Vec<String>,
) -> AuthStyle {
    let explicit = explicit.map(str::trim).filter(|s| !s.is_empty());

    if !policy {
        if let Some(style) = explicit {
            warnings.push(format!(
                "--policy-style={style} ignored because no policy is generated."
            ));
        }
        return AuthStyle::None;
    }

    match explicit {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warnings.push(
                "Invalid --policy-style. Allowed: none|authorize|gate|resource. Falling back to \"none\"."
                    .to_string(),
            );
            AuthStyle::None
        }),
        None => prompt
            .choose_one("Policy authorization style?", &AuthStyle::options(), 0)
            .parse()
            .unwrap_or_default(),
    }
}
