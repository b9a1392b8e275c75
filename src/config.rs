use crate::i18n::{Language, MatchMode, TerminologyDictionary};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Conventional data files translated by the batch tool.
pub const DEFAULT_FILES: &[&str] = &[
    "weapon_rules.json",
    "universal_equipment.json",
    "universal_actions.json",
    "mission_actions.json",
    "ops_2025.json",
    "teams.json",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one subdirectory per language code
    pub base_dir: PathBuf,

    /// Language the source documents are written in
    pub source_language: Language,

    // Terminology
    pub match_mode: MatchMode,
    pub dictionary_dir: Option<PathBuf>,

    /// File names translated from the source language directory
    pub files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            source_language: Language::canonical(),
            match_mode: MatchMode::default(),
            dictionary_dir: None,
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Built-in terminology maps the canonical language onto the targets, so
/// only the canonical language can be the source.
fn source_language(code: &str) -> Result<Language> {
    let language =
        Language::from_code(code).context("I18N_SOURCE_LANG is not a supported language")?;
    if !language.is_canonical() {
        bail!(
            "I18N_SOURCE_LANG must be the canonical language ({}), got {}",
            Language::canonical().code(),
            language
        );
    }
    Ok(language)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            base_dir: std::env::var("I18N_BASE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.base_dir),

            source_language: match std::env::var("I18N_SOURCE_LANG") {
                Ok(code) => source_language(code.trim())?,
                Err(_) => defaults.source_language,
            },

            match_mode: match std::env::var("I18N_MATCH_MODE") {
                Ok(mode) => mode.parse::<MatchMode>().context("Invalid I18N_MATCH_MODE")?,
                Err(_) => defaults.match_mode,
            },
            dictionary_dir: std::env::var("I18N_DICTIONARY_DIR").ok().map(PathBuf::from),

            files: std::env::var("I18N_FILES")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|files| !files.is_empty())
                .unwrap_or(defaults.files),
        })
    }

    /// Directory of the documents for `language` (e.g. `<base>/es`).
    pub fn language_dir(&self, language: Language) -> PathBuf {
        self.base_dir.join(language.code())
    }

    /// Terminology for `language`: `<dictionary_dir>/<code>.json` when that
    /// file exists, the built-in table otherwise.
    pub fn dictionary_for(&self, language: Language) -> Result<TerminologyDictionary> {
        if let Some(path) = self.dictionary_override(language) {
            info!(
                "Loading {} terminology from {}",
                language.name(),
                path.display()
            );
            return TerminologyDictionary::from_json_file(&path, self.match_mode)
                .with_context(|| format!("Failed to load terminology for {}", language));
        }

        TerminologyDictionary::builtin(language, self.match_mode)
            .with_context(|| format!("Failed to build terminology for {}", language))
    }

    fn dictionary_override(&self, language: Language) -> Option<PathBuf> {
        self.dictionary_dir
            .as_deref()
            .map(|dir: &Path| dir.join(format!("{}.json", language.code())))
            .filter(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "I18N_BASE_DIR",
        "I18N_SOURCE_LANG",
        "I18N_MATCH_MODE",
        "I18N_DICTIONARY_DIR",
        "I18N_FILES",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.base_dir, PathBuf::from("."));
        assert_eq!(config.source_language, Language::ENGLISH);
        assert_eq!(config.match_mode, MatchMode::WordBoundary);
        assert!(config.dictionary_dir.is_none());
        assert_eq!(config.files.len(), 6);
        assert_eq!(config.files[5], "teams.json");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("I18N_BASE_DIR", "/data");
        std::env::set_var("I18N_MATCH_MODE", "substring");
        std::env::set_var("I18N_FILES", "teams.json, ops_2025.json,");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.base_dir, PathBuf::from("/data"));
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert_eq!(config.files, vec!["teams.json", "ops_2025.json"]);
        assert_eq!(config.language_dir(Language::FRENCH), PathBuf::from("/data/fr"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_match_mode() {
        clear_env();
        std::env::set_var("I18N_MATCH_MODE", "fuzzy");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_source_language() {
        clear_env();
        std::env::set_var("I18N_SOURCE_LANG", "xx");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_canonical_source() {
        clear_env();
        std::env::set_var("I18N_SOURCE_LANG", " en ");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.source_language, Language::ENGLISH);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_target_as_source() {
        clear_env();
        std::env::set_var("I18N_SOURCE_LANG", "es");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("canonical"), "unexpected error: {}", err);
    }

    #[test]
    fn test_dictionary_for_builtin() {
        let config = Config::default();
        let dictionary = config.dictionary_for(Language::SPANISH).unwrap();
        assert_eq!(dictionary.translate("Shoot"), "Disparar");
    }

    #[test]
    fn test_dictionary_for_override_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("fr.json"), r#"{"Shoot": "Feu"}"#).unwrap();

        let config = Config {
            dictionary_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let french = config.dictionary_for(Language::FRENCH).unwrap();
        assert_eq!(french.translate("Shoot"), "Feu");
        assert_eq!(french.len(), 1);

        // No es.json in the directory: built-in table
        let spanish = config.dictionary_for(Language::SPANISH).unwrap();
        assert_eq!(spanish.translate("Shoot"), "Disparar");
    }
}
