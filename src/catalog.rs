//! Host catalog: installed plugins and the locale catalog.
//!
//! The catalog is the read-only view of the host site that the admin pages
//! need. It is loaded once at startup from a JSON document and shared
//! between requests.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Metadata for one known locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocaleInfo {
    /// Self-referential display name (e.g., "Français")
    #[serde(default)]
    pub native_name: Option<String>,
}

/// Read-only snapshot of the host site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostCatalog {
    /// Plugin file slug -> display name
    #[serde(default)]
    plugins: BTreeMap<String, String>,

    /// Locale codes with an installed language pack
    #[serde(default)]
    installed_locales: Vec<String>,

    /// Every locale the host knows about
    #[serde(default)]
    translations: BTreeMap<String, LocaleInfo>,
}

impl HostCatalog {
    pub fn new(
        plugins: BTreeMap<String, String>,
        installed_locales: Vec<String>,
        translations: BTreeMap<String, LocaleInfo>,
    ) -> Self {
        Self {
            plugins,
            installed_locales,
            translations,
        }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded host catalog: {} plugins, {} installed locales, {} known locales",
            catalog.plugins.len(),
            catalog.installed_locales.len(),
            catalog.translations.len()
        );

        Ok(catalog)
    }

    pub fn installed_plugins(&self) -> &BTreeMap<String, String> {
        &self.plugins
    }

    pub fn installed_locales(&self) -> &[String] {
        &self.installed_locales
    }

    pub fn available_translations(&self) -> &BTreeMap<String, LocaleInfo> {
        &self.translations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "plugins": {
            "akismet/akismet.php": "Akismet Anti-spam",
            "hello.php": "Hello Dolly"
        },
        "installed_locales": ["en_US", "fr_FR"],
        "translations": {
            "fr_FR": { "native_name": "Français" },
            "de_DE": { "native_name": "Deutsch" },
            "xx_XX": {}
        }
    }"#;

    #[test]
    fn test_from_json_full_document() {
        let catalog = HostCatalog::from_json(SAMPLE).expect("Should parse");

        assert_eq!(catalog.installed_plugins().len(), 2);
        assert_eq!(
            catalog.installed_plugins().get("hello.php").map(String::as_str),
            Some("Hello Dolly")
        );
        assert_eq!(catalog.installed_locales(), ["en_US", "fr_FR"]);
        assert_eq!(
            catalog.available_translations().get("de_DE"),
            Some(&LocaleInfo {
                native_name: Some("Deutsch".to_string())
            })
        );
        assert_eq!(
            catalog.available_translations().get("xx_XX"),
            Some(&LocaleInfo { native_name: None })
        );
    }

    #[test]
    fn test_from_json_missing_sections_default_to_empty() {
        let catalog = HostCatalog::from_json("{}").expect("Should parse");

        assert!(catalog.installed_plugins().is_empty());
        assert!(catalog.installed_locales().is_empty());
        assert!(catalog.available_translations().is_empty());
    }

    #[test]
    fn test_from_json_invalid_document() {
        let result = HostCatalog::from_json("not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).expect("write");

        let catalog = HostCatalog::load(&path).expect("Should load");
        assert_eq!(catalog.installed_locales().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = HostCatalog::load("/non/existent/catalog.json");
        match result {
            Err(CatalogError::Io { path, .. }) => assert!(path.contains("catalog.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
