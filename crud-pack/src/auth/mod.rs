//! Authorization styles
//!
//! An [`AuthStyle`] decides how generated controllers and views check
//! policies. The mapping from style to generated PHP/Blade fragments is a
//! pair of tables: one row per controller action, one row per view guard.

use std::fmt;
use std::str::FromStr;

use crate::naming::ResourceName;

/// How a generated controller authorizes its actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStyle {
    /// No authorization code
    #[default]
    None,
    /// `$this->authorize(...)` at the top of each action
    Authorize,
    /// `Gate::authorize(...)` at the top of each action
    Gate,
    /// `authorizeResource(...)` in the constructor
    Resource,
}

impl AuthStyle {
    /// Every style, in prompt order
    pub const ALL: [Self; 4] = [Self::None, Self::Authorize, Self::Gate, Self::Resource];

    /// Name used on the command line and in generated code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Authorize => "authorize",
            Self::Gate => "gate",
            Self::Resource => "resource",
        }
    }

    /// Prompt options, in [`ALL`](Self::ALL) order
    #[must_use]
    pub fn options() -> [&'static str; 4] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for AuthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown authorization style name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAuthStyle(pub String);

impl fmt::Display for UnknownAuthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy style '{}'", self.0)
    }
}

impl std::error::Error for UnknownAuthStyle {}

impl FromStr for AuthStyle {
    type Err = UnknownAuthStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or(UnknownAuthStyle(normalized))
    }
}

/// What an ability is checked against
#[derive(Debug, Clone, Copy)]
enum Subject {
    /// `Model::class`
    Class,
    /// `$model`
    Instance,
}

impl Subject {
    fn render(self, name: &ResourceName) -> String {
        match self {
            Self::Class => format!("{}::class", name.class()),
            Self::Instance => format!("${}", name.variable()),
        }
    }
}

/// Controller action token, ability, subject
const CONTROLLER_ACTIONS: [(&str, &str, Subject); 7] = [
    ("AUTH_INDEX", "viewAny", Subject::Class),
    ("AUTH_CREATE", "create", Subject::Class),
    ("AUTH_STORE", "create", Subject::Class),
    ("AUTH_SHOW", "view", Subject::Instance),
    ("AUTH_EDIT", "update", Subject::Instance),
    ("AUTH_UPDATE", "update", Subject::Instance),
    ("AUTH_DESTROY", "delete", Subject::Instance),
];

/// View guard token stem, ability, subject
const VIEW_GUARDS: [(&str, &str, Subject); 9] = [
    ("CREATE", "create", Subject::Class),
    ("TRASH", "trash", Subject::Class),
    ("UPDATE", "update", Subject::Instance),
    ("DELETE", "delete", Subject::Instance),
    ("DELETE_BULK", "deleteBulk", Subject::Class),
    ("RESTORE", "restore", Subject::Instance),
    ("RESTORE_BULK", "restoreBulk", Subject::Class),
    ("FORCE_DELETE", "forceDelete", Subject::Instance),
    ("FORCE_DELETE_BULK", "forceDeleteBulk", Subject::Class),
];

/// Token names produced by [`controller_tokens`]
pub const CONTROLLER_AUTH_TOKENS: [&str; 10] = [
    "AUTH_IMPORT",
    "CLASS_TRAITS",
    "CONSTRUCTOR",
    "AUTH_INDEX",
    "AUTH_CREATE",
    "AUTH_STORE",
    "AUTH_SHOW",
    "AUTH_EDIT",
    "AUTH_UPDATE",
    "AUTH_DESTROY",
];

/// Token names produced by [`ViewGuards::tokens`]
pub const BLADE_GUARD_TOKENS: [&str; 18] = [
    "BLADE_CAN_CREATE_BEGIN",
    "BLADE_CAN_CREATE_END",
    "BLADE_CAN_TRASH_BEGIN",
    "BLADE_CAN_TRASH_END",
    "BLADE_CAN_UPDATE_BEGIN",
    "BLADE_CAN_UPDATE_END",
    "BLADE_CAN_DELETE_BEGIN",
    "BLADE_CAN_DELETE_END",
    "BLADE_CAN_DELETE_BULK_BEGIN",
    "BLADE_CAN_DELETE_BULK_END",
    "BLADE_CAN_RESTORE_BEGIN",
    "BLADE_CAN_RESTORE_END",
    "BLADE_CAN_RESTORE_BULK_BEGIN",
    "BLADE_CAN_RESTORE_BULK_END",
    "BLADE_CAN_FORCE_DELETE_BEGIN",
    "BLADE_CAN_FORCE_DELETE_END",
    "BLADE_CAN_FORCE_DELETE_BULK_BEGIN",
    "BLADE_CAN_FORCE_DELETE_BULK_END",
];

/// Controller tokens for `style`: import, class traits, constructor and the
/// seven per-action checks
///
/// `resource` wires the constructor and leaves actions empty; `authorize` and
/// `gate` do the opposite; `none` leaves everything empty except the shared
/// trait declaration.
#[must_use]
pub fn controller_tokens(style: AuthStyle, name: &ResourceName) -> Vec<(&'static str, String)> {
    let mut tokens = Vec::with_capacity(CONTROLLER_AUTH_TOKENS.len());

    if style == AuthStyle::Resource {
        tokens.push((
            "AUTH_IMPORT",
            "use Illuminate\\Foundation\\Auth\\Access\\AuthorizesRequests;\n".to_string(),
        ));
        tokens.push(("CLASS_TRAITS", "use AuthorizesRequests, HandlesDeletes;".to_string()));
        tokens.push((
            "CONSTRUCTOR",
            format!(
                "\n    public function __construct()\n    {{\n        $this->authorizeResource({}::class, '{}');\n    }}\n\n",
                name.class(),
                name.variable()
            ),
        ));
    } else {
        tokens.push(("AUTH_IMPORT", String::new()));
        tokens.push(("CLASS_TRAITS", "use HandlesDeletes;".to_string()));
        tokens.push(("CONSTRUCTOR", String::new()));
    }

    let call = match style {
        AuthStyle::Authorize => Some("$this->authorize"),
        AuthStyle::Gate => Some("\\Illuminate\\Support\\Facades\\Gate::authorize"),
        AuthStyle::None | AuthStyle::Resource => None,
    };

    for (token, ability, subject) in CONTROLLER_ACTIONS {
        let value = call.map_or_else(String::new, |call| {
            format!("        {call}('{ability}', {});\n", subject.render(name))
        });
        tokens.push((token, value));
    }

    tokens
}

/// `@can` wrappers for view affordances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewGuards {
    entries: Vec<(String, String, String)>,
}

impl ViewGuards {
    /// Guards for `style`; every wrapper is empty under [`AuthStyle::None`]
    #[must_use]
    pub fn new(style: AuthStyle, name: &ResourceName) -> Self {
        let entries = VIEW_GUARDS
            .iter()
            .map(|(stem, ability, subject)| {
                if style == AuthStyle::None {
                    ((*stem).to_string(), String::new(), String::new())
                } else {
                    (
                        (*stem).to_string(),
                        format!("@can('{ability}', {})\n", subject.render(name)),
                        "\n@endcan".to_string(),
                    )
                }
            })
            .collect();
        Self { entries }
    }

    /// Opening wrapper for a guard stem such as `DELETE_BULK`
    #[must_use]
    pub fn begin(&self, stem: &str) -> &str {
        self.find(stem).map_or("", |(_, begin, _)| begin.as_str())
    }

    /// Closing wrapper for a guard stem
    #[must_use]
    pub fn end(&self, stem: &str) -> &str {
        self.find(stem).map_or("", |(_, _, end)| end.as_str())
    }

    /// `BLADE_CAN_<STEM>_BEGIN` / `_END` tokens, in [`BLADE_GUARD_TOKENS`] order
    #[must_use]
    pub fn tokens(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(stem, begin, end)| {
                [
                    (format!("BLADE_CAN_{stem}_BEGIN"), begin.clone()),
                    (format!("BLADE_CAN_{stem}_END"), end.clone()),
                ]
            })
            .collect()
    }

    fn find(&self, stem: &str) -> Option<&(String, String, String)> {
        self.entries.iter().find(|(s, _, _)| s == stem)
    }
}
