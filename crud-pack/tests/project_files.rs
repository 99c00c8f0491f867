//! Route block, collection and install tests against a real project tree
//!
//! Each test scaffolds into a temporary directory through [`LocalFs`] so the
//! on-disk layout matches what a Laravel project sees.

use std::path::Path;

use crud_pack::collection::{sync_project, SyncOutcome};
use crud_pack::install::install;
use crud_pack::prelude::*;
use crud_pack::routes::{route_block_body, RouteBlockUpserter, UpsertOutcome, ROUTE_IMPORT};
use crud_pack::testing::{MemoryFs, ScriptedPrompt};
use tempfile::TempDir;

/// Helper to create an empty project directory
fn project() -> (TempDir, LocalFs) {
    let dir = tempfile::tempdir().unwrap();
    let fs = LocalFs::new(dir.path());
    (dir, fs)
}

fn read(dir: &TempDir, relative: &str) -> String {
    std::fs::read_to_string(dir.path().join(relative)).unwrap()
}

fn api_soft() -> MakeFlags {
    MakeFlags {
        api: true,
        soft_deletes: true,
        routes: true,
        ..MakeFlags::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_generation_on_disk() {
    let (dir, fs) = project();
    let config = CrudPackConfig::default();
    let name = ResourceName::derive("Invoice").unwrap();
    let flags = MakeFlags {
        web: true,
        soft_deletes: true,
        all: true,
        ..MakeFlags::default()
    };
    let plan = resolve(&flags, &DefaultPrompt).unwrap().plan;

    let report = ScaffoldGenerator::new(&fs, &DefaultPrompt, &config).generate(&name, &plan);
    assert!(!report.has_failures(), "{report:?}");

    for file in [
        "app/Http/Controllers/Concerns/HandlesDeletes.php",
        "app/Http/Controllers/InvoiceController.php",
        "app/Http/Requests/InvoiceRequest.php",
        "app/Models/Invoice.php",
        "app/Policies/InvoicePolicy.php",
        "resources/views/invoices/index.blade.php",
        "resources/views/invoices/create.blade.php",
        "resources/views/invoices/edit.blade.php",
        "resources/views/invoices/show.blade.php",
        "resources/views/invoices/_form.blade.php",
        "resources/views/invoices/trash.blade.php",
        "routes/web.php",
    ] {
        assert!(dir.path().join(file).is_file(), "missing {file}");
    }

    let migrations: Vec<_> = std::fs::read_dir(dir.path().join("database/migrations"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(migrations.len(), 1);
    assert!(migrations[0].ends_with("_create_invoices_table.php"));
}

#[test]
fn test_second_run_reuses_migration() {
    let (dir, fs) = project();
    let config = CrudPackConfig::default();
    let name = ResourceName::derive("Invoice").unwrap();
    let flags = MakeFlags {
        web: true,
        soft_deletes: true,
        migration: true,
        force: true,
        ..MakeFlags::default()
    };
    let plan = resolve(&flags, &DefaultPrompt).unwrap().plan;
    let generator = ScaffoldGenerator::new(&fs, &DefaultPrompt, &config);

    generator.generate(&name, &plan);
    let report = generator.generate(&name, &plan);

    let migration = report
        .artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Migration)
        .unwrap();
    assert_eq!(migration.outcome, ArtifactOutcome::Updated);
    assert_eq!(
        std::fs::read_dir(dir.path().join("database/migrations")).unwrap().count(),
        1
    );
}

#[test]
fn test_upsert_is_idempotent() {
    let (dir, fs) = project();
    let name = ResourceName::derive("Widget").unwrap();
    let body = route_block_body(ControllerKind::Api, true, &name);
    let upserter = RouteBlockUpserter::new(&fs, &DefaultPrompt);
    let path = Path::new("routes/api.php");

    assert_eq!(upserter.upsert(path, "Widget", &body, true).unwrap(), UpsertOutcome::Inserted);
    let first = read(&dir, "routes/api.php");

    assert_eq!(upserter.upsert(path, "Widget", &body, true).unwrap(), UpsertOutcome::Replaced);
    assert_eq!(read(&dir, "routes/api.php"), first);
    assert_eq!(first.matches(ROUTE_IMPORT).count(), 1);
}

#[test]
fn test_upsert_preserves_hand_written_routes() {
    let (dir, fs) = project();
    std::fs::create_dir_all(dir.path().join("routes")).unwrap();
    std::fs::write(
        dir.path().join("routes/web.php"),
        "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/about', fn () => view('about'));\n",
    )
    .unwrap();

    let name = ResourceName::derive("Post").unwrap();
    let body = route_block_body(ControllerKind::Web, false, &name);
    RouteBlockUpserter::new(&fs, &DefaultPrompt)
        .upsert(Path::new("routes/web.php"), "Post", &body, false)
        .unwrap();

    let routes = read(&dir, "routes/web.php");
    assert!(routes.starts_with(
        "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\nRoute::get('/about', fn () => view('about'));\n"
    ));
    assert!(routes.contains("// Route::get('posts/trash'"));
    assert!(routes.trim_end().ends_with("// CRUDPACK:Post:END"));
}

#[test]
fn test_malformed_markers_leave_file_untouched() {
    let original = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n\n// CRUDPACK:Post:START\nRoute::resource('posts', X::class);\n";
    let fs = MemoryFs::new().with_file("routes/web.php", original);
    let name = ResourceName::derive("Post").unwrap();
    let body = route_block_body(ControllerKind::Web, true, &name);

    let err = RouteBlockUpserter::new(&fs, &DefaultPrompt)
        .upsert(Path::new("routes/web.php"), "Post", &body, true)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudPackError::Validation(ValidationError::MalformedRouteBlock { .. })
    ));
    assert_eq!(fs.contents("routes/web.php").unwrap(), original);
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn test_widget_sync_detects_soft_deletes() {
    let (dir, fs) = project();
    let config = CrudPackConfig::default();
    let generator = ScaffoldGenerator::new(&fs, &DefaultPrompt, &config);

    let soft = resolve(&api_soft(), &DefaultPrompt).unwrap().plan;
    let hard = resolve(
        &MakeFlags {
            soft_deletes: false,
            no_soft_deletes: true,
            ..api_soft()
        },
        &DefaultPrompt,
    )
    .unwrap()
    .plan;

    generator.generate(&ResourceName::derive("Widget").unwrap(), &soft);
    generator.generate(&ResourceName::derive("Gadget").unwrap(), &hard);

    let outcome = sync_project(&fs, &config, false).unwrap();
    assert_eq!(
        outcome,
        SyncOutcome::Written {
            folders: vec!["Widget".to_string(), "Gadget".to_string()],
        }
    );

    let document: serde_json::Value =
        serde_json::from_str(&read(&dir, "postman/CrudPack.postman_collection.json")).unwrap();
    let folders = document["item"][0]["item"].as_array().unwrap();
    assert_eq!(folders[0]["name"], "Widget");
    assert_eq!(folders[0]["item"].as_array().unwrap().len(), 11);
    assert_eq!(folders[1]["name"], "Gadget");
    assert_eq!(folders[1]["item"].as_array().unwrap().len(), 6);
}

#[test]
fn test_sync_without_api_routes_fails() {
    let (_dir, fs) = project();
    let err = sync_project(&fs, &CrudPackConfig::default(), false).unwrap_err();
    assert!(matches!(err, CrudPackError::MissingFile(_)));
}

#[test]
fn test_install_then_decline_everything() {
    let (dir, fs) = project();
    let config = CrudPackConfig::default();

    let first = install(&fs, &DefaultPrompt, &config, false);
    assert!(first.iter().all(|r| r.outcome == ArtifactOutcome::Created));
    std::fs::write(dir.path().join("resources/views/welcome.blade.php"), "custom").unwrap();

    let prompt = ScriptedPrompt::new();
    let second = install(&fs, &prompt, &config, false);

    assert!(second.iter().all(|r| r.outcome == ArtifactOutcome::Skipped));
    assert_eq!(prompt.asked().len(), 4);
    assert_eq!(read(&dir, "resources/views/welcome.blade.php"), "custom");
}
