//! Template contexts per artifact
//!
//! Pure functions of the plan and the resource name. Each builder returns
//! exactly the tokens its [`TemplateId`] declares.

use crate::auth::{controller_tokens, ViewGuards};
use crate::error::TemplateError;
use crate::naming::ResourceName;
use crate::plan::GenerationPlan;
use crate::template::{comment_out, render_source, stubs, TemplateContext, TemplateId};

const SOFT_POLICY_HEADER: &str = "Soft Deletes disabled: uncomment after enabling SoftDeletes";

/// Context for `id`
///
/// # Errors
///
/// Fails only if the built-in bulk-delete fragment leaves a placeholder.
pub fn build(
    id: TemplateId,
    plan: &GenerationPlan,
    name: &ResourceName,
) -> Result<TemplateContext, TemplateError> {
    let guards = ViewGuards::new(plan.auth_style, name);

    let mut context = match id {
        TemplateId::HandlesDeletesTrait => TemplateContext::new(),
        TemplateId::WebController | TemplateId::ApiController => controller(plan, name),
        TemplateId::Request => TemplateContext::new()
            .with("MODEL_CLASS", name.class())
            .with("MODEL_VAR", name.variable())
            .with("TABLE", name.table()),
        TemplateId::Model => model(plan.soft_deletes, name),
        TemplateId::Migration => migration(plan.soft_deletes, name),
        TemplateId::Policy => TemplateContext::new()
            .with("MODEL_CLASS", name.class())
            .with("MODEL_VAR", name.variable())
            .with("SOFT_POLICY_METHODS", soft_policy_methods(plan.soft_deletes, name)),
        TemplateId::IndexView => TemplateContext::new()
            .with("MODEL_CLASS", name.class())
            .with("MODEL_VAR_PLURAL", name.plural_variable())
            .with("ROUTE_NAME", name.route_name())
            .with("BULK_DELETE_BLOCK", bulk_delete_block(plan.soft_deletes, name, &guards)?),
        TemplateId::CreateView | TemplateId::EditView => TemplateContext::new()
            .with("MODEL_CLASS", name.class())
            .with("MODEL_VAR", name.variable())
            .with("ROUTE_NAME", name.route_name())
            .with("VIEW_FOLDER", name.view_folder()),
        TemplateId::ShowView | TemplateId::TrashView => TemplateContext::new()
            .with("MODEL_CLASS", name.class())
            .with("MODEL_VAR", name.variable())
            .with("ROUTE_NAME", name.route_name()),
        TemplateId::FormView => TemplateContext::new().with("MODEL_VAR", name.variable()),
    };

    if id.takes_blade_guards() {
        context.extend(guards.tokens());
    }

    Ok(context)
}

fn controller(plan: &GenerationPlan, name: &ResourceName) -> TemplateContext {
    let class = name.class();
    let request = plan.artifacts.request;

    let mut context = TemplateContext::new()
        .with("MODEL_CLASS", class)
        .with("MODEL_VAR", name.variable())
        .with("MODEL_VAR_PLURAL", name.plural_variable())
        .with("TABLE", name.table())
        .with("VIEW_FOLDER", name.view_folder())
        .with("ROUTE_NAME", name.route_name())
        .with(
            "REQUEST_IMPORT",
            if request {
                format!("use Illuminate\\Http\\Request;\nuse App\\Http\\Requests\\{class}Request;\n")
            } else {
                "use Illuminate\\Http\\Request;\n".to_string()
            },
        )
        .with(
            "REQUEST_TYPEHINT",
            if request { format!("{class}Request") } else { "Request".to_string() },
        )
        .with(
            "REQUEST_DATA",
            if request { "$request->validated()" } else { "$request->all()" },
        )
        .with("POLICY_STYLE", plan.auth_style.as_str());

    context.extend(controller_tokens(plan.auth_style, name));
    context
}

fn model(soft_deletes: bool, name: &ResourceName) -> TemplateContext {
    let (import, use_trait) = if soft_deletes {
        (
            "use Illuminate\\Database\\Eloquent\\SoftDeletes;\n",
            "    use SoftDeletes;\n",
        )
    } else {
        (
            "// use Illuminate\\Database\\Eloquent\\SoftDeletes;\n",
            "    // use SoftDeletes;\n",
        )
    };

    TemplateContext::new()
        .with("MODEL_CLASS", name.class())
        .with("SOFT_MODEL_IMPORT", import)
        .with("SOFT_MODEL_USE", use_trait)
}

fn migration(soft_deletes: bool, name: &ResourceName) -> TemplateContext {
    let column = if soft_deletes {
        "            $table->softDeletes();\n"
    } else {
        "            // $table->softDeletes(); // Uncomment to enable soft deletes\n"
    };

    TemplateContext::new()
        .with("TABLE", name.table())
        .with("SOFT_MIGRATION_COLUMN", column)
}

/// Trash, restore and force-delete abilities for the policy
#[must_use]
pub fn soft_policy_methods(soft_deletes: bool, name: &ResourceName) -> String {
    let class = name.class();
    let var = name.variable();

    let methods = [
        ("Custom ability for listing trashed records (soft deletes only).", "trash", "User $user".to_string()),
        (
            "Standard Laravel soft-delete ability (single restore).",
            "restore",
            format!("User $user, {class} ${var}"),
        ),
        ("Custom ability for bulk restore (soft deletes only).", "restoreBulk", "User $user".to_string()),
        (
            "Standard Laravel soft-delete ability (single force delete).",
            "forceDelete",
            format!("User $user, {class} ${var}"),
        ),
        ("Custom ability for bulk force delete (soft deletes only).", "forceDeleteBulk", "User $user".to_string()),
    ];

    let active = methods
        .iter()
        .map(|(doc, method, params)| {
            format!(
                "    /**\n     * {doc}\n     */\n    public function {method}({params}): bool\n    {{\n        return true;\n    }}\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    if soft_deletes {
        active
    } else {
        comment_out(&active, "    ", SOFT_POLICY_HEADER) + "\n"
    }
}

/// Bulk-delete toolbar and record table for the index view
///
/// # Errors
///
/// Fails if the fragment leaves a placeholder.
pub fn bulk_delete_block(
    soft_deletes: bool,
    name: &ResourceName,
    guards: &ViewGuards,
) -> Result<String, TemplateError> {
    let (icon, title, confirm, label) = if soft_deletes {
        (
            "<i class='fa-solid fa-trash'></i>",
            "Move To Trash",
            "return confirm('Move selected records to trash?')",
            "Move To Trash (Selected)",
        )
    } else {
        (
            "<i class='fa-solid fa-skull-crossbones'></i>",
            "Permanently Delete",
            "return confirm('Permanently delete selected records? This cannot be undone.')",
            "Permanently Delete (Selected)",
        )
    };

    let mut context = TemplateContext::new()
        .with("ROUTE_NAME", name.route_name())
        .with("MODEL_VAR", name.variable())
        .with("MODEL_VAR_PLURAL", name.plural_variable())
        .with("DELETE_ICON", icon)
        .with("DELETE_TITLE", title)
        .with("BULK_CONFIRM", confirm)
        .with("BULK_LABEL", label);
    context.extend(guards.tokens());

    render_source("bulk-delete block", stubs::BULK_DELETE_FRAGMENT, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthStyle, BLADE_GUARD_TOKENS};
    use crate::plan::{Artifacts, ControllerKind};
    use std::collections::BTreeSet;

    fn plan(kind: ControllerKind, soft_deletes: bool, auth_style: AuthStyle) -> GenerationPlan {
        GenerationPlan {
            kind,
            soft_deletes,
            auth_style,
            artifacts: Artifacts::all(kind),
            force: false,
        }
    }

    fn post() -> ResourceName {
        ResourceName::derive("Post").unwrap()
    }

    #[test]
    fn test_every_builder_matches_declared_tokens() {
        for soft in [true, false] {
            for style in AuthStyle::ALL {
                let plan = plan(ControllerKind::Web, soft, style);
                for id in TemplateId::ALL {
                    let context = build(id, &plan, &post()).unwrap();
                    let provided: BTreeSet<&str> = context.tokens().collect();

                    let mut declared: BTreeSet<&str> = id.tokens().iter().copied().collect();
                    if id.takes_blade_guards() {
                        declared.extend(BLADE_GUARD_TOKENS);
                    }
                    assert_eq!(provided, declared, "{}", id.file_name());
                }
            }
        }
    }

    #[test]
    fn test_every_embedded_stub_renders() {
        let plan = plan(ControllerKind::Web, true, AuthStyle::Gate);
        for id in TemplateId::ALL {
            let context = build(id, &plan, &post()).unwrap();
            assert!(render_source(id.file_name(), id.default_source(), &context).is_ok());
        }
    }

    #[test]
    fn test_controller_request_wiring() {
        let mut with_request = plan(ControllerKind::Web, true, AuthStyle::None);
        with_request.artifacts.request = true;
        let context = build(TemplateId::WebController, &with_request, &post()).unwrap();
        assert_eq!(context.get("REQUEST_TYPEHINT"), Some("PostRequest"));
        assert_eq!(context.get("REQUEST_DATA"), Some("$request->validated()"));
        assert!(context
            .get("REQUEST_IMPORT")
            .unwrap()
            .contains("use App\\Http\\Requests\\PostRequest;"));

        let mut without = with_request;
        without.artifacts.request = false;
        let context = build(TemplateId::WebController, &without, &post()).unwrap();
        assert_eq!(context.get("REQUEST_TYPEHINT"), Some("Request"));
        assert_eq!(context.get("REQUEST_DATA"), Some("$request->all()"));
        assert_eq!(context.get("REQUEST_IMPORT"), Some("use Illuminate\\Http\\Request;\n"));
    }

    #[test]
    fn test_soft_switch_on_model_and_migration() {
        let soft = build(TemplateId::Model, &plan(ControllerKind::Web, true, AuthStyle::None), &post()).unwrap();
        assert_eq!(soft.get("SOFT_MODEL_USE"), Some("    use SoftDeletes;\n"));

        let hard = build(TemplateId::Migration, &plan(ControllerKind::Web, false, AuthStyle::None), &post()).unwrap();
        assert!(hard.get("SOFT_MIGRATION_COLUMN").unwrap().trim_start().starts_with("// $table->softDeletes();"));
    }

    #[test]
    fn test_commented_policy_methods_are_inert() {
        let commented = soft_policy_methods(false, &post());
        assert!(commented.starts_with("    // Soft Deletes disabled: uncomment after enabling SoftDeletes\n"));
        assert!(commented
            .lines()
            .filter(|l| !l.is_empty())
            .all(|l| l.trim_start().starts_with("//")));
        assert!(commented.contains("    // public function restore(User $user, Post $post): bool"));

        let active = soft_policy_methods(true, &post());
        assert!(active.contains("    public function forceDeleteBulk(User $user): bool\n"));
        assert!(active.ends_with("    }\n"));
    }

    #[test]
    fn test_bulk_block_wording_follows_soft_mode() {
        let guards = ViewGuards::new(AuthStyle::None, &post());

        let soft = bulk_delete_block(true, &post(), &guards).unwrap();
        assert!(soft.contains("Move To Trash (Selected)"));
        assert!(soft.contains("return confirm('Move selected records to trash?')"));
        assert!(soft.contains("route('posts.destroyBulk')"));
        assert!(soft.contains("@forelse($posts as $post)"));

        let hard = bulk_delete_block(false, &post(), &guards).unwrap();
        assert!(hard.contains("Permanently Delete (Selected)"));
        assert!(hard.contains("fa-skull-crossbones"));
        assert!(!hard.contains("@can("));
    }

    #[test]
    fn test_bulk_block_guards() {
        let guards = ViewGuards::new(AuthStyle::Authorize, &post());
        let block = bulk_delete_block(true, &post(), &guards).unwrap();

        assert!(block.contains("@can('deleteBulk', Post::class)\n<button"));
        assert!(block.contains("@can('update', $post)\n<a"));
        assert_eq!(block.matches("@endcan").count(), 3);
    }
}
