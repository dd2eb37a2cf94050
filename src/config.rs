//! Runtime configuration
//!
//! Read from the environment at startup.

use std::path::PathBuf;

use crate::catalog::{self, Catalog, CatalogResult};

/// Env var naming a JSON catalog that replaces the built-in one
pub const CATALOG_PATH_VAR: &str = "NUTRIFIT_CATALOG_PATH";

/// Default tracing directive when RUST_LOG does not set one
pub const DEFAULT_LOG_DIRECTIVE: &str = "nutrifit=info";

/// Service configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }

    /// Load the configured catalog, or the built-in one if none is set
    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    items = catalog.len(),
                    "Loaded meal catalog"
                );
                Ok(catalog)
            }
            None => Ok(catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_from_lookup() {
        let config = Config::from_lookup(|key| {
            (key == CATALOG_PATH_VAR).then(|| "/etc/nutrifit/meals.json".to_string())
        });
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/nutrifit/meals.json")));
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_default_uses_builtin_catalog() {
        let catalog = Config::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), catalog::builtin().len());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/nonexistent/nutrifit.json")),
        };
        assert!(config.load_catalog().is_err());
    }
}
