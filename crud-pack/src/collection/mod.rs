//! Postman collection sync
//!
//! Resources are recovered from the `CRUDPACK` blocks in `routes/api.php` and
//! merged into a Postman v2.1 document. Folders this tool generates carry
//! [`OWNERSHIP_MARKER`] as their description; everything else in the document
//! belongs to the user and is left as found.

pub mod postman;

pub use postman::{resource_folder, Folder, OWNERSHIP_MARKER, SCHEMA_URL};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::config::{CollectionSettings, CrudPackConfig};
use crate::error::{CrudPackError, Result};
use crate::fs::ProjectFs;

static BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"//\s*CRUDPACK:([A-Za-z0-9_]+):START").expect("valid block start pattern")
});

static API_RESOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Route::apiResource\(\s*'([^']+)'\s*,").expect("valid apiResource pattern")
});

/// A resource recovered from a route block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResource {
    /// Block key, the resource class name
    pub name: String,
    /// URI segment from `Route::apiResource`
    pub uri: String,
    /// Whether an active trash route exists
    pub soft_deletes: bool,
}

/// Lines of `block` that are not `//` comments
fn active_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with("//"))
}

fn parse_block(name: &str, block: &str) -> Option<ParsedResource> {
    let uri = active_lines(block)
        .find_map(|line| API_RESOURCE.captures(line))
        .map(|caps| caps[1].to_string())?;

    let trash = format!("route::get('{uri}/trash'");
    let soft_deletes = active_lines(block).any(|line| {
        line.to_lowercase()
            .replace(char::is_whitespace, "")
            .starts_with(&trash.to_lowercase())
    });

    Some(ParsedResource {
        name: name.to_string(),
        uri,
        soft_deletes,
    })
}

/// Resources declared by the blocks in an API route file, in file order
///
/// A block is a START marker and the first following END marker with the
/// same key. Blocks without an active `Route::apiResource` line are skipped.
#[must_use]
pub fn parse_resources(route_file: &str) -> Vec<ParsedResource> {
    let mut resources = Vec::new();
    let mut offset = 0;

    while let Some(caps) = BLOCK_START.captures(&route_file[offset..]) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = offset + whole.end();
        let name = key.as_str();

        let end = Regex::new(&format!(r"//\s*CRUDPACK:{}:END", regex::escape(name)))
            .ok()
            .and_then(|re| re.find(&route_file[body_start..]));

        match end {
            Some(end) => {
                let block = &route_file[body_start..body_start + end.start()];
                match parse_block(name, block) {
                    Some(resource) => resources.push(resource),
                    None => tracing::debug!(key = name, "block has no apiResource route, skipped"),
                }
                offset = body_start + end.end();
            }
            None => {
                tracing::warn!(key = name, "START marker without END marker, skipped");
                offset = body_start;
            }
        }
    }

    resources
}

fn fresh_document(app_name: &str, settings: &CollectionSettings) -> Value {
    json!({
        "info": {
            "name": settings.name,
            "schema": SCHEMA_URL,
        },
        "item": [
            { "name": app_name, "item": [] }
        ],
        "variable": [],
    })
}

fn is_usable(document: &Value) -> bool {
    document.get("info").is_some() && document.get("item").is_some_and(Value::is_array)
}

fn ensure_variables(document: &mut Value, settings: &CollectionSettings) {
    if !document.get("variable").is_some_and(Value::is_array) {
        document["variable"] = json!([]);
    }
    let Some(variables) = document["variable"].as_array_mut() else {
        return;
    };

    for (key, value) in [
        ("base_url", settings.base_url.as_str()),
        ("api_prefix", settings.api_prefix.as_str()),
    ] {
        let present = variables
            .iter()
            .any(|v| v.get("key").and_then(Value::as_str) == Some(key));
        if !present {
            variables.push(json!({ "key": key, "value": value }));
        }
    }
}

fn is_folder_named(item: &Value, name: &str) -> bool {
    item.get("name").and_then(Value::as_str) == Some(name) && item.get("item").is_some_and(Value::is_array)
}

fn is_owned(item: &Value) -> bool {
    item.get("description").and_then(Value::as_str) == Some(OWNERSHIP_MARKER)
}

/// Merges generated folders into a collection document
#[derive(Debug, Clone)]
pub struct CollectionSynchronizer {
    app_name: String,
    settings: CollectionSettings,
}

impl CollectionSynchronizer {
    /// Synchronizer placing folders under an application folder named
    /// `app_name`
    pub fn new(app_name: impl Into<String>, settings: CollectionSettings) -> Self {
        Self {
            app_name: app_name.into(),
            settings,
        }
    }

    /// Synchronizer built from project configuration
    #[must_use]
    pub fn from_config(config: &CrudPackConfig) -> Self {
        Self::new(config.app.name.clone(), config.collection.clone())
    }

    /// Merge the resources of `route_file` into `existing`
    ///
    /// `existing` is only reused when it has `info` and `item`. With `force`
    /// every owned folder is removed before merging. Owned folders with a
    /// matching name are replaced in place; others are appended.
    #[must_use]
    pub fn sync(&self, route_file: &str, existing: Option<Value>, force: bool) -> Value {
        let resources = parse_resources(route_file);
        let folders: Vec<Folder> = resources
            .iter()
            .map(|r| resource_folder(&r.name, &r.uri, r.soft_deletes))
            .collect();
        self.merge(existing, &folders, force)
    }

    fn merge(&self, existing: Option<Value>, folders: &[Folder], force: bool) -> Value {
        let mut document = existing
            .filter(is_usable)
            .unwrap_or_else(|| fresh_document(&self.app_name, &self.settings));
        ensure_variables(&mut document, &self.settings);

        let Some(top) = document["item"].as_array_mut() else {
            return document;
        };
        let app_index = top
            .iter()
            .position(|item| is_folder_named(item, &self.app_name))
            .unwrap_or_else(|| {
                top.push(json!({ "name": self.app_name, "item": [] }));
                top.len() - 1
            });

        let Some(children) = top[app_index]["item"].as_array_mut() else {
            return document;
        };

        if force {
            let before = children.len();
            children.retain(|item| !is_owned(item));
            tracing::debug!(removed = before - children.len(), "stripped generated folders");
        }

        for folder in folders {
            let value = serde_json::to_value(folder).unwrap_or(Value::Null);
            match children
                .iter()
                .position(|item| is_owned(item) && is_folder_named(item, &folder.name))
            {
                Some(index) => children[index] = value,
                None => children.push(value),
            }
        }

        document
    }
}

/// Result of [`sync_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The collection was written with these folders
    Written {
        /// Folder names, in route file order
        folders: Vec<String>,
    },
    /// No blocks in the route file; nothing written
    ///
    /// A forced sync over an existing collection still writes it, with every
    /// generated folder removed, and reports `Written` with no folders.
    NoBlocks,
}

/// Rebuild the project's collection from its API route file
///
/// # Errors
///
/// Returns [`CrudPackError::MissingFile`] when the API route file does not
/// exist, or an I/O error when the collection cannot be written.
pub fn sync_project(fs: &dyn ProjectFs, config: &CrudPackConfig, force: bool) -> Result<SyncOutcome> {
    let routes_path = config.paths.api_routes();
    if !fs.exists(&routes_path) {
        return Err(CrudPackError::MissingFile(routes_path));
    }
    let route_file = fs.read(&routes_path)?;

    let collection_path = &config.paths.collection;
    let existing = if fs.exists(collection_path) {
        match serde_json::from_str::<Value>(&fs.read(collection_path)?) {
            Ok(value) if is_usable(&value) => Some(value),
            Ok(_) | Err(_) => {
                tracing::warn!(path = %collection_path.display(), "existing collection unusable, starting fresh");
                None
            }
        }
    } else {
        None
    };

    let resources = parse_resources(&route_file);
    if resources.is_empty() && !(force && existing.is_some()) {
        tracing::warn!(path = %routes_path.display(), "no CRUDPACK blocks found, nothing to generate");
        return Ok(SyncOutcome::NoBlocks);
    }

    let document = CollectionSynchronizer::from_config(config).sync(&route_file, existing, force);

    if let Some(parent) = collection_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.mkdir(parent)?;
    }
    fs.write(collection_path, &serde_json::to_string_pretty(&document)?)?;
    tracing::info!(path = %collection_path.display(), resources = resources.len(), "collection updated");

    Ok(SyncOutcome::Written {
        folders: resources.into_iter().map(|r| r.name).collect(),
    })
}
