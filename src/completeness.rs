//! Translation completeness checking.
//!
//! Compares the translatable strings of a source-language document with
//! those of a translated document. Structures may diverge; only paths present
//! in the source are considered.

use crate::extract::{extract_strings, Extraction};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// How many missing paths the rendered report lists.
const MISSING_SHOWN: usize = 20;

/// How many untranslated paths the rendered report lists.
const UNTRANSLATED_SHOWN: usize = 10;

/// Values longer than this are truncated in the rendered report.
const VALUE_PREVIEW_CHARS: usize = 50;

/// Outcome of comparing a source document with its translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessReport {
    /// Source paths with no translatable string in the target
    pub missing: Vec<String>,

    /// Source paths whose target string equals the source string exactly.
    /// Proper nouns translated to themselves land here too.
    pub untranslated: Vec<String>,

    /// Source paths whose target string differs from the source
    pub translated: Vec<String>,

    #[serde(skip)]
    source: Extraction,

    #[serde(skip)]
    target: Extraction,
}

impl CompletenessReport {
    /// Total number of translatable strings in the source document.
    pub fn total(&self) -> usize {
        self.source.total()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn untranslated_count(&self) -> usize {
        self.untranslated.len()
    }

    pub fn translated_count(&self) -> usize {
        self.translated.len()
    }

    /// Translated strings as a percentage (0-100) of the source strings.
    pub fn completeness_percent(&self) -> f64 {
        let total = self.total();
        if total > 0 {
            (self.translated_count() as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// A translation passes when no source string is missing.
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn source_value(&self, path: &str) -> Option<&str> {
        self.source.get(path)
    }

    pub fn target_value(&self, path: &str) -> Option<&str> {
        self.target.get(path)
    }
}

/// Compare two already-extracted documents.
pub fn compare(source: Extraction, target: Extraction) -> CompletenessReport {
    let mut missing = Vec::new();
    let mut untranslated = Vec::new();
    let mut translated = Vec::new();

    for (path, source_value) in source.iter() {
        match target.get(path) {
            None => missing.push(path.to_string()),
            Some(target_value) if target_value == source_value => {
                untranslated.push(path.to_string())
            }
            Some(_) => translated.push(path.to_string()),
        }
    }

    CompletenessReport {
        missing,
        untranslated,
        translated,
        source,
        target,
    }
}

/// Compare a source-language document with a translated one.
pub fn check(source: &Value, target: &Value) -> CompletenessReport {
    compare(extract_strings(source), extract_strings(target))
}

fn preview(value: &str) -> String {
    if value.chars().count() > VALUE_PREVIEW_CHARS {
        let head: String = value.chars().take(VALUE_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

/// Human-readable rendering of a report for the translation file `file`.
pub struct RenderedReport<'a> {
    report: &'a CompletenessReport,
    file: &'a str,
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "\nTranslation Completeness Report")?;
        writeln!(f, "File: {}", self.file)?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Total translatable strings: {}", report.total())?;
        writeln!(
            f,
            "Translated: {} ({:.1}%)",
            report.translated_count(),
            report.completeness_percent()
        )?;
        writeln!(f, "Missing: {}", report.missing_count())?;
        writeln!(
            f,
            "Untranslated (same as source): {}",
            report.untranslated_count()
        )?;

        if !report.missing.is_empty() {
            writeln!(
                f,
                "\n[WARNING] Missing translations ({}):",
                report.missing_count()
            )?;
            for path in report.missing.iter().take(MISSING_SHOWN) {
                writeln!(f, "  - {}", path)?;
            }
            if report.missing_count() > MISSING_SHOWN {
                writeln!(f, "  ... and {} more", report.missing_count() - MISSING_SHOWN)?;
            }
        }

        if !report.untranslated.is_empty() {
            writeln!(
                f,
                "\n[INFO] Potentially untranslated ({}):",
                report.untranslated_count()
            )?;
            for path in report.untranslated.iter().take(UNTRANSLATED_SHOWN) {
                writeln!(f, "  - {}", path)?;
                writeln!(f, "    SRC: {}", preview(report.source_value(path).unwrap_or_default()))?;
                writeln!(f, "    TR: {}", preview(report.target_value(path).unwrap_or_default()))?;
            }
            if report.untranslated_count() > UNTRANSLATED_SHOWN {
                writeln!(
                    f,
                    "  ... and {} more",
                    report.untranslated_count() - UNTRANSLATED_SHOWN
                )?;
            }
        }

        if report.passed() && report.translated_count() > 0 {
            writeln!(f, "\n[OK] Translation appears complete!")?;
        }

        Ok(())
    }
}

/// Render the human-readable report for the translation file `file`.
pub fn render<'a>(report: &'a CompletenessReport, file: &'a str) -> RenderedReport<'a> {
    RenderedReport { report, file }
}
