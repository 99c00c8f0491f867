//! Route block upsert
//!
//! Generated routes live in a delimited block inside `routes/web.php` or
//! `routes/api.php`:
//!
//! ```text
//! // CRUDPACK:ProductCategory:START
//! Route::delete('product-categories/bulk', ...)
//! ...
//! Route::resource('product-categories', ...);
//! // CRUDPACK:ProductCategory:END
//! ```
//!
//! A block is appended on first generation and replaced wholesale afterwards.
//! Text outside the block is never touched, except that the `Route` facade
//! import is added when missing.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::fs::ProjectFs;
use crate::naming::ResourceName;
use crate::plan::ControllerKind;
use crate::prompt::PromptPort;
use crate::template::comment_out;

/// `Route` facade import line
pub const ROUTE_IMPORT: &str = "use Illuminate\\Support\\Facades\\Route;";

/// Contents of a route file created from scratch
pub const NEW_ROUTE_FILE: &str = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\n";

const SOFT_ROUTES_DISABLED: &str =
    "Soft Deletes disabled: uncomment the routes below after enabling SoftDeletes";

static PHP_OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<\?php\s*").expect("valid php open tag pattern"));

/// `// CRUDPACK:<key>:START`
#[must_use]
pub fn start_marker(key: &str) -> String {
    format!("// CRUDPACK:{key}:START")
}

/// `// CRUDPACK:<key>:END`
#[must_use]
pub fn end_marker(key: &str) -> String {
    format!("// CRUDPACK:{key}:END")
}

/// Route definitions for one resource, without markers
///
/// Literal paths (bulk, trash, restore, force) come before the resource
/// registration so they are not swallowed by its `{id}` routes.
#[must_use]
pub fn route_block_body(kind: ControllerKind, soft_deletes: bool, name: &ResourceName) -> String {
    let uri = name.uri();
    let (controller, route_prefix) = match kind {
        ControllerKind::Web => (
            format!("\\App\\Http\\Controllers\\{}Controller::class", name.class()),
            name.route_name().to_string(),
        ),
        ControllerKind::Api => (
            format!("\\App\\Http\\Controllers\\Api\\{}Controller::class", name.class()),
            format!("api.{}", name.route_name()),
        ),
    };

    let route = |verb: &str, path: &str, action: &str| {
        format!("Route::{verb}('{path}', [{controller}, '{action}'])->name('{route_prefix}.{action}');")
    };

    let mut lines = vec![route("delete", &format!("{uri}/bulk"), "destroyBulk"), String::new()];

    let soft_routes = [
        route("get", &format!("{uri}/trash"), "trash"),
        route("post", &format!("{uri}/{{id}}/restore"), "restore"),
        route("post", &format!("{uri}/restore-bulk"), "restoreBulk"),
        route("delete", &format!("{uri}/{{id}}/force"), "forceDelete"),
        route("delete", &format!("{uri}/force-bulk"), "forceDeleteBulk"),
    ]
    .join("\n");

    if soft_deletes {
        lines.push(soft_routes);
    } else {
        lines.push(comment_out(&soft_routes, "", SOFT_ROUTES_DISABLED));
    }
    lines.push(String::new());

    lines.push(match kind {
        ControllerKind::Web => format!("Route::resource('{uri}', {controller});"),
        ControllerKind::Api => {
            format!("Route::apiResource('{uri}', {controller})->names('{route_prefix}');")
        }
    });

    lines.join("\n")
}

/// Add the `Route` facade import right after `<?php` when it is missing
///
/// Only an import on a line of its own counts; a commented-out one does not.
#[must_use]
pub fn ensure_route_import(contents: &str) -> String {
    if contents.lines().any(|line| line.trim() == ROUTE_IMPORT) {
        return contents.to_string();
    }
    if PHP_OPEN_TAG.is_match(contents) {
        return PHP_OPEN_TAG.replace(contents, NEW_ROUTE_FILE).into_owned();
    }
    format!("{ROUTE_IMPORT}\n\n{contents}")
}

/// Where a block sits in a route file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLocation {
    /// No markers for the key
    Absent,
    /// Byte span from the start marker through the end marker and one
    /// trailing newline
    Present {
        /// Offset of the start marker
        start: usize,
        /// Offset just past the replaced span
        end: usize,
    },
}

/// Locate the block for `key`
///
/// # Errors
///
/// Returns a description of the problem when markers are duplicated,
/// orphaned, or out of order.
pub fn locate_block(contents: &str, key: &str) -> std::result::Result<BlockLocation, String> {
    let start = start_marker(key);
    let end = end_marker(key);

    let starts: Vec<usize> = contents.match_indices(&start).map(|(i, _)| i).collect();
    let ends: Vec<usize> = contents.match_indices(&end).map(|(i, _)| i).collect();

    match (starts.as_slice(), ends.as_slice()) {
        ([], []) => Ok(BlockLocation::Absent),
        ([_, _, ..], _) => Err(format!("{} START markers found", starts.len())),
        (_, [_, _, ..]) => Err(format!("{} END markers found", ends.len())),
        ([_], []) => Err("START marker without END marker".to_string()),
        ([], [_]) => Err("END marker without START marker".to_string()),
        ([s], [e]) if e < s => Err("END marker precedes START marker".to_string()),
        ([s], [e]) => {
            let mut span_end = e + end.len();
            if contents[span_end..].starts_with('\n') {
                span_end += 1;
            }
            Ok(BlockLocation::Present {
                start: *s,
                end: span_end,
            })
        }
    }
}

/// `start + "\n" + body + "\n" + end + "\n"`
#[must_use]
pub fn render_block(key: &str, body: &str) -> String {
    format!("{}\n{body}\n{}\n", start_marker(key), end_marker(key))
}

/// Insert or replace the block for `key` in `contents`, without prompting
///
/// # Errors
///
/// Returns a description of malformed markers.
pub fn apply_block(contents: &str, key: &str, body: &str) -> std::result::Result<String, String> {
    let contents = ensure_route_import(contents);
    let block = render_block(key, body);

    Ok(match locate_block(&contents, key)? {
        BlockLocation::Absent => format!("{contents}\n{block}"),
        BlockLocation::Present { start, end } => {
            format!("{}{block}{}", &contents[..start], &contents[end..])
        }
    })
}

/// What [`RouteBlockUpserter::upsert`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Block appended (file may have been created)
    Inserted,
    /// Existing block replaced
    Replaced,
    /// User declined the replacement
    Skipped,
}

/// Writes route blocks through the filesystem port
pub struct RouteBlockUpserter<'a> {
    fs: &'a dyn ProjectFs,
    prompt: &'a dyn PromptPort,
}

impl<'a> RouteBlockUpserter<'a> {
    /// Create an upserter
    pub fn new(fs: &'a dyn ProjectFs, prompt: &'a dyn PromptPort) -> Self {
        Self { fs, prompt }
    }

    /// Insert or replace the block for `key` in the route file at `path`
    ///
    /// A missing file is created. An existing block is replaced only with
    /// `force` or after confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedRouteBlock`] without touching the
    /// file when the markers are broken, or an I/O error.
    pub fn upsert(&self, path: &Path, key: &str, body: &str, force: bool) -> Result<UpsertOutcome> {
        let exists = self.fs.exists(path);
        let original = if exists {
            self.fs.read(path)?
        } else {
            NEW_ROUTE_FILE.to_string()
        };

        let malformed = |reason: String| ValidationError::MalformedRouteBlock {
            path: path.to_path_buf(),
            key: key.to_string(),
            reason,
        };

        let contents = ensure_route_import(&original);
        let location = locate_block(&contents, key).map_err(malformed)?;

        let outcome = match location {
            BlockLocation::Absent => UpsertOutcome::Inserted,
            BlockLocation::Present { .. } => {
                let question = format!("Routes block already exists for [{key}]. Replace it?");
                if !force && !self.prompt.confirm(&question, false) {
                    tracing::warn!(key, path = %path.display(), "skipped routes block");
                    return Ok(UpsertOutcome::Skipped);
                }
                UpsertOutcome::Replaced
            }
        };

        let updated = apply_block(&contents, key, body).map_err(malformed)?;

        if !exists {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.fs.mkdir(parent)?;
            }
        }
        self.fs.write(path, &updated)?;
        tracing::info!(key, path = %path.display(), ?outcome, "routes block written");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{DefaultPrompt, MockPromptPort};
    use crate::testing::MemoryFs;

    fn widget() -> ResourceName {
        ResourceName::derive("Widget").unwrap()
    }

    #[test]
    fn test_web_body_soft() {
        let body = route_block_body(ControllerKind::Web, true, &widget());
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(
            lines[0],
            "Route::delete('widgets/bulk', [\\App\\Http\\Controllers\\WidgetController::class, 'destroyBulk'])->name('widgets.destroyBulk');"
        );
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[2],
            "Route::get('widgets/trash', [\\App\\Http\\Controllers\\WidgetController::class, 'trash'])->name('widgets.trash');"
        );
        assert!(lines[3].starts_with("Route::post('widgets/{id}/restore'"));
        assert!(lines[6].starts_with("Route::delete('widgets/force-bulk'"));
        assert_eq!(lines[7], "");
        assert_eq!(
            lines[8],
            "Route::resource('widgets', \\App\\Http\\Controllers\\WidgetController::class);"
        );
    }

    #[test]
    fn test_api_body_without_soft_deletes() {
        let body = route_block_body(ControllerKind::Api, false, &widget());

        assert!(body.contains("->name('api.widgets.destroyBulk');"));
        assert!(body.contains(
            "// Soft Deletes disabled: uncomment the routes below after enabling SoftDeletes\n// Route::get('widgets/trash'"
        ));
        assert!(body.ends_with(
            "Route::apiResource('widgets', \\App\\Http\\Controllers\\Api\\WidgetController::class)->names('api.widgets');"
        ));
        // Every soft route is inert
        assert!(body
            .lines()
            .filter(|l| l.contains("trash") || l.contains("restore") || l.contains("force"))
            .all(|l| l.starts_with("// ")));
    }

    #[test]
    fn test_import_inserted_after_open_tag() {
        let out = ensure_route_import("<?php\n\nRoute::get('/', fn () => view('welcome'));\n");
        assert_eq!(
            out,
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/', fn () => view('welcome'));\n"
        );
    }

    #[test]
    fn test_import_kept_when_present() {
        let src = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\n";
        assert_eq!(ensure_route_import(src), src);
    }

    #[test]
    fn test_commented_import_does_not_count() {
        let src = "<?php\n\n// use Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/', fn () => view('welcome'));\n";
        let out = ensure_route_import(src);

        assert_eq!(out.lines().filter(|line| *line == ROUTE_IMPORT).count(), 1);
        assert!(out.contains("// use Illuminate\\Support\\Facades\\Route;"));
        assert!(out.starts_with(NEW_ROUTE_FILE));
        assert_eq!(ensure_route_import(&out), out);
    }

    #[test]
    fn test_insert_then_replace_is_idempotent() {
        let once = apply_block(NEW_ROUTE_FILE, "Widget", "BODY").unwrap();
        let twice = apply_block(&once, "Widget", "BODY").unwrap();
        assert_eq!(once, twice);
        assert_eq!(
            once,
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\n\n// CRUDPACK:Widget:START\nBODY\n// CRUDPACK:Widget:END\n"
        );
    }

    #[test]
    fn test_replace_keeps_surroundings() {
        let src = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/', fn () => 'home');\n\n// CRUDPACK:Widget:START\nOLD\n// CRUDPACK:Widget:END\n\nRoute::get('/about', fn () => 'about');\n";
        let out = apply_block(src, "Widget", "NEW").unwrap();
        assert_eq!(
            out,
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/', fn () => 'home');\n\n// CRUDPACK:Widget:START\nNEW\n// CRUDPACK:Widget:END\n\nRoute::get('/about', fn () => 'about');\n"
        );
    }

    #[test]
    fn test_similar_keys_do_not_collide() {
        let src = apply_block(NEW_ROUTE_FILE, "PostCategory", "A").unwrap();
        assert_eq!(locate_block(&src, "Post").unwrap(), BlockLocation::Absent);
    }

    #[test]
    fn test_malformed_markers() {
        let orphan = "<?php\n// CRUDPACK:Widget:START\n";
        assert!(locate_block(orphan, "Widget").unwrap_err().contains("without END"));

        let reversed = "<?php\n// CRUDPACK:Widget:END\n// CRUDPACK:Widget:START\n";
        assert!(locate_block(reversed, "Widget").unwrap_err().contains("precedes"));

        let duplicated = "// CRUDPACK:Widget:START\n// CRUDPACK:Widget:END\n// CRUDPACK:Widget:START\n// CRUDPACK:Widget:END\n";
        assert!(locate_block(duplicated, "Widget").unwrap_err().contains("2 START"));
    }

    #[test]
    fn test_upsert_creates_missing_file() {
        let fs = MemoryFs::new();
        let upserter = RouteBlockUpserter::new(&fs, &DefaultPrompt);

        let outcome = upserter
            .upsert(Path::new("routes/web.php"), "Widget", "BODY", false)
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Inserted);
        let written = fs.contents("routes/web.php").unwrap();
        assert!(written.starts_with(NEW_ROUTE_FILE));
        assert_eq!(written.matches(ROUTE_IMPORT).count(), 1);
    }

    #[test]
    fn test_upsert_declined_leaves_file_alone() {
        let existing = apply_block(NEW_ROUTE_FILE, "Widget", "OLD").unwrap();
        let fs = MemoryFs::new().with_file("routes/web.php", existing.clone());

        let mut prompt = MockPromptPort::new();
        prompt
            .expect_confirm()
            .withf(|q, default| q == "Routes block already exists for [Widget]. Replace it?" && !*default)
            .times(1)
            .returning(|_, _| false);

        let outcome = RouteBlockUpserter::new(&fs, &prompt)
            .upsert(Path::new("routes/web.php"), "Widget", "NEW", false)
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Skipped);
        assert_eq!(fs.write_count(), 0);
        assert_eq!(fs.contents("routes/web.php").unwrap(), existing);
    }

    #[test]
    fn test_upsert_force_replaces_without_prompt() {
        let existing = apply_block(NEW_ROUTE_FILE, "Widget", "OLD").unwrap();
        let fs = MemoryFs::new().with_file("routes/web.php", existing);

        let mut prompt = MockPromptPort::new();
        prompt.expect_confirm().never();

        let outcome = RouteBlockUpserter::new(&fs, &prompt)
            .upsert(Path::new("routes/web.php"), "Widget", "NEW", true)
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Replaced);
        let written = fs.contents("routes/web.php").unwrap();
        assert!(written.contains("\nNEW\n"));
        assert!(!written.contains("OLD"));
    }

    #[test]
    fn test_upsert_malformed_is_validation_error() {
        let fs = MemoryFs::new().with_file("routes/web.php", "<?php\n// CRUDPACK:Widget:END\n");
        let err = RouteBlockUpserter::new(&fs, &DefaultPrompt)
            .upsert(Path::new("routes/web.php"), "Widget", "BODY", true)
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::CrudPackError::Validation(ValidationError::MalformedRouteBlock { .. })
        ));
        assert_eq!(fs.write_count(), 0);
    }
}
