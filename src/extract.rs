//! String extraction: flattens a document into path → translatable string.

use crate::walker::{walk, FieldVisitor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Translatable strings of one document, keyed by path in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extraction {
    strings: IndexMap<String, String>,
}

impl Extraction {
    /// Number of extracted strings.
    pub fn total(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.strings.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strings.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl FieldVisitor for Extraction {
    fn text(&mut self, path: &str, _key: &str, text: &str) -> Option<String> {
        self.strings.insert(path.to_string(), text.to_string());
        None
    }
}

impl FromIterator<(String, String)> for Extraction {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

/// Collect every translatable string of `document`.
pub fn extract_strings(document: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    walk(document, &mut extraction);
    extraction
}

/// On-disk shape of an extraction, as written by `extract-translatables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionFile {
    pub source_file: String,
    pub total_strings: usize,
    pub strings: Extraction,
}

impl ExtractionFile {
    pub fn new(source_file: impl Into<String>, strings: Extraction) -> Self {
        Self {
            source_file: source_file.into(),
            total_strings: strings.total(),
            strings,
        }
    }
}

/// Writes strings from an extraction back at their paths.
struct Reinserter<'a> {
    strings: &'a Extraction,
}

impl FieldVisitor for Reinserter<'_> {
    fn text(&mut self, path: &str, _key: &str, text: &str) -> Option<String> {
        self.strings
            .get(path)
            .filter(|replacement| *replacement != text)
            .map(str::to_string)
    }
}

/// Rebuild `document` with the strings of `strings` written at their paths.
///
/// Paths not present in `document` are ignored; translatable strings without
/// an entry are kept as they are.
pub fn apply_strings(document: &Value, strings: &Extraction) -> Value {
    walk(document, &mut Reinserter { strings }).unwrap_or_else(|| document.clone())
}
