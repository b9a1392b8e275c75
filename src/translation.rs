use crate::config::Config;
use crate::error::FileError;
use crate::i18n::{Language, TerminologyDictionary};
use crate::json_io::{read_json, to_pretty_json, write_json_string};
use crate::walker::{walk, FieldVisitor};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Transform-mode visitor: rewrites translatable strings through a
/// terminology dictionary and counts what changed.
struct TerminologyTranslator<'a> {
    dictionary: &'a TerminologyDictionary,
    changed: usize,
}

impl TerminologyTranslator<'_> {
    fn keep_if_changed(&mut self, original: &str, translated: String) -> Option<String> {
        if translated == original {
            None
        } else {
            self.changed += 1;
            Some(translated)
        }
    }
}

impl FieldVisitor for TerminologyTranslator<'_> {
    fn text(&mut self, _path: &str, _key: &str, text: &str) -> Option<String> {
        let translated = self.dictionary.translate(text);
        self.keep_if_changed(text, translated)
    }

    /// Category labels are whole terms: exact lookup, kept as-is when unknown.
    fn label(&mut self, _path: &str, _key: &str, text: &str) -> Option<String> {
        let translated = self.dictionary.lookup(text)?.to_string();
        self.keep_if_changed(text, translated)
    }

    fn free_text(&mut self, path: &str, key: &str, text: &str) -> Option<String> {
        self.text(path, key, text)
    }
}

/// Translate every translatable string of `document`, returning a new
/// document and the number of strings that changed.
pub fn translate_document_counted(
    document: &Value,
    dictionary: &TerminologyDictionary,
) -> (Value, usize) {
    let mut translator = TerminologyTranslator {
        dictionary,
        changed: 0,
    };
    let translated = walk(document, &mut translator).unwrap_or_else(|| document.clone());
    (translated, translator.changed)
}

/// Translate every translatable string of `document`.
pub fn translate_document(document: &Value, dictionary: &TerminologyDictionary) -> Value {
    translate_document_counted(document, dictionary).0
}

/// Serialize a translated document and check it parses back as JSON.
fn serialize_verified(document: &Value) -> Result<String, FileError> {
    let json = to_pretty_json(document)?;
    serde_json::from_str::<Value>(&json).map_err(FileError::Serialize)?;
    Ok(json)
}

/// Translate one file. Nothing is written unless the whole file was read,
/// translated and serialized successfully.
///
/// Returns the number of strings that changed.
pub fn translate_file(
    source: &Path,
    destination: &Path,
    dictionary: &TerminologyDictionary,
) -> Result<usize, FileError> {
    let document = read_json(source)?;
    let (translated, changed) = translate_document_counted(&document, dictionary);
    let json = serialize_verified(&translated)?;
    write_json_string(destination, &json)?;

    debug!(
        "Translated {} -> {} ({} strings changed)",
        source.display(),
        destination.display(),
        changed
    );
    Ok(changed)
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files written, with the number of strings changed in each
    pub written: Vec<(PathBuf, usize)>,

    /// Source files that do not exist
    pub skipped: Vec<PathBuf>,

    /// Files that could not be translated, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Translate every configured file from the source language directory into
/// each target language directory. A failing file is recorded and the batch
/// moves on.
pub fn translate_batch(
    config: &Config,
    targets: &[(Language, TerminologyDictionary)],
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    let source_dir = config.language_dir(config.source_language);

    for (language, dictionary) in targets {
        info!(
            "Translating {} files to {} ({} terms, {} matching)",
            config.files.len(),
            language.name(),
            dictionary.len(),
            dictionary.mode()
        );
        let target_dir = config.language_dir(*language);

        for file in &config.files {
            let source = source_dir.join(file);
            let destination = target_dir.join(file);

            if !source.exists() {
                warn!("{} not found, skipping", source.display());
                summary.skipped.push(source);
                continue;
            }

            match translate_file(&source, &destination, dictionary) {
                Ok(changed) => {
                    info!("[OK] Created {} ({} strings changed)", destination.display(), changed);
                    summary.written.push((destination, changed));
                }
                Err(e) => {
                    error!("[ERROR] {}: {}", file, e);
                    summary.failed.push((destination, e.to_string()));
                }
            }
        }
    }

    summary
}

/// Load each target language's terminology and translate the batch. A
/// language whose terminology fails to load is recorded as failed and the
/// other languages are still translated.
pub fn translate_all(config: &Config) -> BatchSummary {
    let mut targets = Vec::new();
    let mut unavailable = Vec::new();

    // Dictionaries are built once and shared across every file
    for language in Language::targets() {
        match config.dictionary_for(language) {
            Ok(dictionary) => targets.push((language, dictionary)),
            Err(e) => {
                error!("[ERROR] Skipping {}: {:#}", language, e);
                unavailable.push((config.language_dir(language), format!("{:#}", e)));
            }
        }
    }

    let mut summary = translate_batch(config, &targets);
    summary.failed.extend(unavailable);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MatchMode;
    use serde_json::json;
    use tempfile::TempDir;

    fn spanish() -> TerminologyDictionary {
        TerminologyDictionary::builtin(Language::SPANISH, MatchMode::WordBoundary).unwrap()
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_translate_simple_action() {
        let dictionary =
            TerminologyDictionary::new([("Shoot", "Disparar")], MatchMode::WordBoundary).unwrap();
        let document = json!({"name": "Shoot", "id": "act01"});

        assert_eq!(
            translate_document(&document, &dictionary),
            json!({"name": "Disparar", "id": "act01"})
        );
    }

    #[test]
    fn test_identifiers_and_stats_untouched() {
        let document = json!({
            "wepId": "Shoot",
            "wepType": "Shoot",
            "ATK": "4",
            "isDefault": true,
            "wepName": "Shoot"
        });
        let translated = translate_document(&document, &spanish());

        assert_eq!(translated["wepId"], "Shoot");
        assert_eq!(translated["wepType"], "Shoot");
        assert_eq!(translated["wepName"], "Disparar");
    }

    #[test]
    fn test_archetypes_use_exact_lookup() {
        let document = json!({"archetypes": ["Security", "Recon team", "Infiltration"]});
        let translated = translate_document(&document, &spanish());

        assert_eq!(
            translated["archetypes"],
            json!(["Seguridad", "Recon team", "Infiltración"])
        );
    }

    #[test]
    fn test_free_text_lists_translated() {
        let document = json!({
            "conditions": ["Once per turning point", 7],
            "packs": ["Kill Team Core"]
        });
        let translated = translate_document(&document, &spanish());

        assert_eq!(translated["conditions"], json!(["Once per punto de inflexión", 7]));
        assert_eq!(translated["packs"], json!(["Kill Team Core"]));
    }

    #[test]
    fn test_changed_count() {
        let document = json!({
            "name": "Shoot",
            "description": "Nothing to see",
            "archetypes": ["Recon"]
        });
        let (_, changed) = translate_document_counted(&document, &spanish());
        assert_eq!(changed, 2);
    }

    #[test]
    fn test_untranslatable_document_returned_as_copy() {
        let document = json!([1, "two", null, {"seq": 3}]);
        assert_eq!(translate_document(&document, &spanish()), document);
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let dictionary = TerminologyDictionary::new(
            [("Shoot", "Disparar"), ("Fall Back", "Retirada")],
            MatchMode::WordBoundary,
        )
        .unwrap();
        let document = json!({"name": "Shoot", "description": "Fall Back or Shoot"});

        let once = translate_document(&document, &dictionary);
        let (twice, changed) = translate_document_counted(&once, &dictionary);
        assert_eq!(twice, once);
        assert_eq!(changed, 0);
    }

    // ==================== File Tests ====================

    #[test]
    fn test_translate_file_writes_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("en").join("actions.json");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, r#"{"name": "Dash", "seq": 1}"#).unwrap();
        let destination = dir.path().join("es").join("actions.json");

        let changed = translate_file(&source, &destination, &spanish()).unwrap();

        assert_eq!(changed, 1);
        let written = std::fs::read_to_string(&destination).unwrap();
        assert_eq!(written, "{\n  \"name\": \"Carrera\",\n  \"seq\": 1\n}\n");
    }

    #[test]
    fn test_translate_file_parse_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bad.json");
        std::fs::write(&source, "{ not json").unwrap();
        let destination = dir.path().join("out").join("bad.json");

        let err = translate_file(&source, &destination, &spanish()).unwrap_err();

        assert!(matches!(err, FileError::Parse { .. }));
        assert!(!destination.exists());
    }

    #[test]
    fn test_translate_file_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = translate_file(
            &dir.path().join("absent.json"),
            &dir.path().join("out.json"),
            &spanish(),
        )
        .unwrap_err();

        assert!(matches!(err, FileError::NotFound(_)));
    }

    // ==================== Batch Tests ====================

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("en");
        std::fs::create_dir_all(&en).unwrap();
        std::fs::write(en.join("good.json"), r#"{"name": "Shoot"}"#).unwrap();
        std::fs::write(en.join("bad.json"), "[").unwrap();

        let config = Config {
            base_dir: dir.path().to_path_buf(),
            files: vec!["bad.json".into(), "absent.json".into(), "good.json".into()],
            ..Config::default()
        };
        let targets = vec![
            (Language::SPANISH, config.dictionary_for(Language::SPANISH).unwrap()),
            (Language::FRENCH, config.dictionary_for(Language::FRENCH).unwrap()),
        ];

        let summary = translate_batch(&config, &targets);

        assert!(summary.has_failures());
        assert_eq!(summary.failed.len(), 2);
        assert_eq!(summary.skipped.len(), 2);
        assert_eq!(summary.written.len(), 2);
        assert!(!dir.path().join("es").join("bad.json").exists());

        let french = read_json(&dir.path().join("fr").join("good.json")).unwrap();
        assert_eq!(french, json!({"name": "Tirer"}));
    }

    #[test]
    fn test_translate_all_survives_broken_dictionary() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("en");
        let dicts = dir.path().join("dicts");
        std::fs::create_dir_all(&en).unwrap();
        std::fs::create_dir_all(&dicts).unwrap();
        std::fs::write(en.join("actions.json"), r#"{"name": "Shoot"}"#).unwrap();
        std::fs::write(dicts.join("fr.json"), r#"{"Shoot": 3}"#).unwrap();

        let config = Config {
            base_dir: dir.path().to_path_buf(),
            dictionary_dir: Some(dicts),
            files: vec!["actions.json".into()],
            ..Config::default()
        };

        let summary = translate_all(&config);

        assert!(summary.has_failures());
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, dir.path().join("fr"));
        assert_eq!(summary.written.len(), 1);
        assert!(!dir.path().join("fr").exists());

        let spanish = read_json(&dir.path().join("es").join("actions.json")).unwrap();
        assert_eq!(spanish, json!({"name": "Disparar"}));
    }
}
