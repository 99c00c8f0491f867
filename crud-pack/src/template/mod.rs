//! Stub templates
//!
//! Stubs are plain PHP/Blade text with `{{TOKEN}}` placeholders. Rendering is
//! literal substring replacement in context order; no escaping, no logic.
//! Blade's own `{{ $expr }}` echoes never match the placeholder pattern, so they
//! pass through untouched.
//!
//! A rendered stub must not contain any placeholder. Leftovers are a
//! [`TemplateError`] and the artifact is not written.

mod context;
pub mod stubs;

pub use context::TemplateContext;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TemplateError};
use crate::fs::ProjectFs;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[A-Z0-9_]+\}\}").expect("valid placeholder pattern"));

/// Every stub known to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Shared `HandlesDeletes` controller trait
    HandlesDeletesTrait,
    /// Blade-backed controller
    WebController,
    /// JSON controller
    ApiController,
    /// Form request
    Request,
    /// Eloquent model
    Model,
    /// Create-table migration
    Migration,
    /// Policy
    Policy,
    /// `index.blade.php`
    IndexView,
    /// `create.blade.php`
    CreateView,
    /// `edit.blade.php`
    EditView,
    /// `show.blade.php`
    ShowView,
    /// `_form.blade.php`
    FormView,
    /// `trash.blade.php`
    TrashView,
}

const CONTROLLER_TOKENS: &[&str] = &[
    "MODEL_CLASS",
    "MODEL_VAR",
    "MODEL_VAR_PLURAL",
    "TABLE",
    "VIEW_FOLDER",
    "ROUTE_NAME",
    "REQUEST_IMPORT",
    "REQUEST_TYPEHINT",
    "REQUEST_DATA",
    "AUTH_IMPORT",
    "CLASS_TRAITS",
    "CONSTRUCTOR",
    "POLICY_STYLE",
    "AUTH_INDEX",
    "AUTH_CREATE",
    "AUTH_STORE",
    "AUTH_SHOW",
    "AUTH_EDIT",
    "AUTH_UPDATE",
    "AUTH_DESTROY",
];

impl TemplateId {
    /// Every template
    pub const ALL: [Self; 13] = [
        Self::HandlesDeletesTrait,
        Self::WebController,
        Self::ApiController,
        Self::Request,
        Self::Model,
        Self::Migration,
        Self::Policy,
        Self::IndexView,
        Self::CreateView,
        Self::EditView,
        Self::ShowView,
        Self::FormView,
        Self::TrashView,
    ];

    /// Stub file name, relative to the stubs directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::HandlesDeletesTrait => "traits/HandlesDeletes.stub",
            Self::WebController => "controllers/web.controller.stub",
            Self::ApiController => "controllers/api.controller.stub",
            Self::Request => "requests/request.stub",
            Self::Model => "models/model.stub",
            Self::Migration => "migrations/create_table.stub",
            Self::Policy => "policies/policy.stub",
            Self::IndexView => "views/index.stub",
            Self::CreateView => "views/create.stub",
            Self::EditView => "views/edit.stub",
            Self::ShowView => "views/show.stub",
            Self::FormView => "views/_form.stub",
            Self::TrashView => "views/trash.stub",
        }
    }

    /// Exact token set a context for this template provides
    ///
    /// View templates that take `@can` guards also take every
    /// [`BLADE_GUARD_TOKENS`](crate::auth::BLADE_GUARD_TOKENS) entry.
    #[must_use]
    pub const fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::HandlesDeletesTrait => &[],
            Self::WebController | Self::ApiController => CONTROLLER_TOKENS,
            Self::Request => &["MODEL_CLASS", "MODEL_VAR", "TABLE"],
            Self::Model => &["MODEL_CLASS", "SOFT_MODEL_IMPORT", "SOFT_MODEL_USE"],
            Self::Migration => &["TABLE", "SOFT_MIGRATION_COLUMN"],
            Self::Policy => &["MODEL_CLASS", "MODEL_VAR", "SOFT_POLICY_METHODS"],
            Self::IndexView => &["MODEL_CLASS", "MODEL_VAR_PLURAL", "ROUTE_NAME", "BULK_DELETE_BLOCK"],
            Self::CreateView | Self::EditView => &["MODEL_CLASS", "MODEL_VAR", "ROUTE_NAME", "VIEW_FOLDER"],
            Self::ShowView => &["MODEL_CLASS", "MODEL_VAR", "ROUTE_NAME"],
            Self::FormView => &["MODEL_VAR"],
            Self::TrashView => &["MODEL_CLASS", "MODEL_VAR", "ROUTE_NAME"],
        }
    }

    /// Whether the template also takes the Blade guard tokens
    #[must_use]
    pub const fn takes_blade_guards(self) -> bool {
        matches!(
            self,
            Self::IndexView | Self::CreateView | Self::EditView | Self::ShowView | Self::TrashView
        )
    }

    /// Embedded default source
    #[must_use]
    pub const fn default_source(self) -> &'static str {
        match self {
            Self::HandlesDeletesTrait => stubs::HANDLES_DELETES_TRAIT,
            Self::WebController => stubs::WEB_CONTROLLER,
            Self::ApiController => stubs::API_CONTROLLER,
            Self::Request => stubs::REQUEST,
            Self::Model => stubs::MODEL,
            Self::Migration => stubs::MIGRATION,
            Self::Policy => stubs::POLICY,
            Self::IndexView => stubs::INDEX_VIEW,
            Self::CreateView => stubs::CREATE_VIEW,
            Self::EditView => stubs::EDIT_VIEW,
            Self::ShowView => stubs::SHOW_VIEW,
            Self::FormView => stubs::FORM_VIEW,
            Self::TrashView => stubs::TRASH_VIEW,
        }
    }
}

/// Substitute `context` into `source` and enforce placeholder completeness
///
/// `template` only names the stub in the error.
///
/// # Errors
///
/// Returns [`TemplateError::UnreplacedPlaceholders`] listing every distinct
/// leftover token in order of first appearance.
///
/// # Examples
///
/// ```
/// use crud_pack::template::{render_source, TemplateContext};
///
/// let ctx = TemplateContext::new().with("TABLE", "posts");
/// let out = render_source("demo", "Schema::create('{{TABLE}}')", &ctx).unwrap();
/// assert_eq!(out, "Schema::create('posts')");
/// ```
pub fn render_source(
    template: &str,
    source: &str,
    context: &TemplateContext,
) -> std::result::Result<String, TemplateError> {
    let mut content = source.to_string();
    for (token, value) in context.iter() {
        content = content.replace(&format!("{{{{{token}}}}}"), value);
    }

    let mut leftovers: Vec<String> = Vec::new();
    for found in PLACEHOLDER.find_iter(&content) {
        let token = found.as_str();
        if !leftovers.iter().any(|t| t == token) {
            leftovers.push(token.to_string());
        }
    }

    if leftovers.is_empty() {
        Ok(content)
    } else {
        Err(TemplateError::UnreplacedPlaceholders {
            template: template.to_string(),
            tokens: leftovers,
        })
    }
}

/// Prefix every non-empty line of `code` with `indent` and `// `, under a
/// header comment
///
/// Used to emit the inert variant of soft-delete-only code.
#[must_use]
pub fn comment_out(code: &str, indent: &str, header: &str) -> String {
    let mut out = vec![format!("{indent}// {header}")];
    for line in code.trim_end_matches('\n').lines() {
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("{indent}// {}", line.trim_start()));
        }
    }
    out.join("\n")
}

/// Loads stubs, preferring project overrides, and renders them
pub struct TemplateEngine<'a> {
    fs: &'a dyn ProjectFs,
    stubs_dir: PathBuf,
}

impl<'a> TemplateEngine<'a> {
    /// Engine reading overrides from `stubs_dir` (relative to the project root)
    pub fn new(fs: &'a dyn ProjectFs, stubs_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            stubs_dir: stubs_dir.into(),
        }
    }

    /// Path a project override for `id` would live at
    #[must_use]
    pub fn override_path(&self, id: TemplateId) -> PathBuf {
        self.stubs_dir.join(id.file_name())
    }

    /// Stub source for `id`
    ///
    /// # Errors
    ///
    /// Fails when an override exists but cannot be read.
    pub fn load(&self, id: TemplateId) -> Result<Cow<'static, str>> {
        let path = self.override_path(id);
        if self.fs.exists(&path) {
            tracing::debug!(stub = %path.display(), "using project stub override");
            return Ok(Cow::Owned(self.fs.read(&path)?));
        }
        Ok(Cow::Borrowed(id.default_source()))
    }

    /// Load and render `id`
    ///
    /// # Errors
    ///
    /// Fails when the stub cannot be read or placeholders remain.
    pub fn render(&self, id: TemplateId, context: &TemplateContext) -> Result<String> {
        let source = self.load(id)?;
        Ok(render_source(id.file_name(), &source, context)?)
    }

    /// Directory holding project overrides
    #[must_use]
    pub fn stubs_dir(&self) -> &Path {
        &self.stubs_dir
    }
}
