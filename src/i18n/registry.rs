//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the tools know
//! about. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access. The registry is immutable once built.

use crate::i18n::terminology::{FRENCH_TERMS, SPANISH_TERMS};
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its code, name,
/// enabled status, whether it's the canonical language, and its built-in
/// terminology table.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the data subdirectory name (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub name: &'static str,

    /// Whether this is the source language of all documents (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Built-in source → target terminology (empty for the canonical language)
    pub terminology: &'static [(&'static str, &'static str)],
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages that documents are translated into.
    pub fn list_targets(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled && !lang.is_canonical)
            .collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations: English (canonical), Spanish and French.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            is_canonical: true,
            enabled: true,
            terminology: &[],
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            is_canonical: false,
            enabled: true,
            terminology: SPANISH_TERMS,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            is_canonical: false,
            enabled: true,
            terminology: FRENCH_TERMS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
        assert!(config.terminology.is_empty());
    }

    #[test]
    fn test_get_by_code_french() {
        let config = LanguageRegistry::get().get_by_code("fr").unwrap();

        assert_eq!(config.name, "French");
        assert!(!config.is_canonical);
        assert!(!config.terminology.is_empty());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("de").is_none());
    }

    #[test]
    fn test_list_targets_excludes_canonical() {
        let codes: Vec<&str> = LanguageRegistry::get()
            .list_targets()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["es", "fr"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(LanguageRegistry::get().canonical().code, "en");
    }
}
