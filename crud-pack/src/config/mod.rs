//! Configuration management for crud-pack
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDPACK_` prefix)
//! 2. `<project>/crud-pack.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! Every path is relative to the Laravel project root.
//!
//! # Example Configuration
//!
//! ```toml
//! # crud-pack.toml
//! [app]
//! name = "Shop"
//!
//! [paths]
//! app = "app"
//! routes = "routes"
//! views = "resources/views"
//! migrations = "database/migrations"
//! config = "config"
//! stubs = "stubs/crud-pack"
//! collection = "postman/CrudPack.postman_collection.json"
//!
//! [collection]
//! name = "CrudPack"
//! base_url = "http://localhost"
//! api_prefix = "api"
//! ```
//!
//! Nested keys are reachable from the environment with a double underscore,
//! e.g. `CRUDPACK_APP__NAME=Shop`.

mod nav;

pub use nav::NavResource;

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File name looked up in the project root
pub const CONFIG_FILE: &str = "crud-pack.toml";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Application name; names the top-level collection folder
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Laravel".to_string(),
        }
    }
}

/// Project layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Application source root (`app/`)
    pub app: PathBuf,

    /// Route files directory
    pub routes: PathBuf,

    /// Blade views root
    pub views: PathBuf,

    /// Migrations directory
    pub migrations: PathBuf,

    /// Config directory
    pub config: PathBuf,

    /// Template override directory
    pub stubs: PathBuf,

    /// Request collection document
    pub collection: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            app: PathBuf::from("app"),
            routes: PathBuf::from("routes"),
            views: PathBuf::from("resources/views"),
            migrations: PathBuf::from("database/migrations"),
            config: PathBuf::from("config"),
            stubs: PathBuf::from("stubs/crud-pack"),
            collection: PathBuf::from("postman/CrudPack.postman_collection.json"),
        }
    }
}

impl PathSettings {
    /// `routes/web.php`
    #[must_use]
    pub fn web_routes(&self) -> PathBuf {
        self.routes.join("web.php")
    }

    /// `routes/api.php`
    #[must_use]
    pub fn api_routes(&self) -> PathBuf {
        self.routes.join("api.php")
    }
}

/// Request collection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Document name used when a fresh document is created
    pub name: String,

    /// Default value of the `base_url` variable
    pub base_url: String,

    /// Default value of the `api_prefix` variable
    pub api_prefix: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            name: "CrudPack".to_string(),
            base_url: "http://localhost".to_string(),
            api_prefix: "api".to_string(),
        }
    }
}

/// Complete crud-pack configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrudPackConfig {
    /// Application settings
    #[serde(default)]
    pub app: AppSettings,

    /// Project layout
    #[serde(default)]
    pub paths: PathSettings,

    /// Request collection settings
    #[serde(default)]
    pub collection: CollectionSettings,
}

impl CrudPackConfig {
    /// Load configuration for the project rooted at `project_root`
    ///
    /// A missing `crud-pack.toml` is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if an
    /// environment override has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crud_pack::config::CrudPackConfig;
    ///
    /// # fn example() -> crud_pack::Result<()> {
    /// let config = CrudPackConfig::load(".".as_ref())?;
    /// println!("{}", config.app.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_from(&project_root.join(CONFIG_FILE))
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut figment = Figment::new()
            // Start with defaults
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables override everything (double underscore for nesting)
        figment = figment.merge(Env::prefixed("CRUDPACK_").split("__").lowercase(true));

        let config: Self = figment.extract().map_err(Box::new)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CrudPackConfig::default();
        assert_eq!(config.app.name, "Laravel");
        assert_eq!(config.paths.views, PathBuf::from("resources/views"));
        assert_eq!(config.paths.api_routes(), PathBuf::from("routes/api.php"));
        assert_eq!(config.collection.base_url, "http://localhost");
        assert_eq!(config.collection.api_prefix, "api");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CrudPackConfig::load(dir.path()).unwrap();
        assert_eq!(config.app.name, "Laravel");
        assert_eq!(config.paths.stubs, PathBuf::from("stubs/crud-pack"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[app]\nname = \"Shop\"\n\n[paths]\nviews = \"views\"\n",
        )
        .unwrap();

        let config = CrudPackConfig::load(dir.path()).unwrap();
        assert_eq!(config.app.name, "Shop");
        assert_eq!(config.paths.views, PathBuf::from("views"));
        // Untouched keys keep their defaults
        assert_eq!(config.paths.routes, PathBuf::from("routes"));
        assert_eq!(config.collection.api_prefix, "api");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[app\nname = ").unwrap();
        assert!(CrudPackConfig::load(dir.path()).is_err());
    }
}
