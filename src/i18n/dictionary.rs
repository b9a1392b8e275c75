//! Terminology dictionaries and phrase substitution.
//!
//! A dictionary maps source-language phrases to target-language phrases.
//! Translating a string applies every phrase once, longest phrase first, so a
//! multi-word phrase is replaced before any shorter phrase it contains.

use crate::error::FileError;
use crate::i18n::Language;
use crate::json_io::read_json;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::cmp::Reverse;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// How phrases are matched inside a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Whole words only, ignoring case. When several phrases differ only in
    /// case, the one spelled exactly like the matched text supplies the
    /// replacement.
    #[default]
    WordBoundary,

    /// Raw, case-sensitive substring anywhere in the text. Can hit partial
    /// words ("id" inside "solid").
    Substring,
}

impl FromStr for MatchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "word-boundary" | "word_boundary" | "word" => Ok(MatchMode::WordBoundary),
            "substring" | "raw" => Ok(MatchMode::Substring),
            other => anyhow::bail!(
                "Unknown match mode '{}' (expected 'word-boundary' or 'substring')",
                other
            ),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::WordBoundary => f.write_str("word-boundary"),
            MatchMode::Substring => f.write_str("substring"),
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Substring,
    Pattern(Regex),
}

/// One substitution step: a phrase (or, in word-boundary mode, every
/// spelling of a phrase that differs only in case).
#[derive(Debug, Clone)]
struct Term {
    /// Spellings of the phrase with their replacements, first-seen first
    variants: Vec<(String, String)>,
    matcher: Matcher,
}

impl Term {
    fn phrase_len(&self) -> usize {
        self.variants
            .first()
            .map(|(source, _)| source.chars().count())
            .unwrap_or(0)
    }

    fn apply(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Substring => self
                .variants
                .iter()
                .fold(text.to_string(), |acc, (source, target)| {
                    acc.replace(source.as_str(), target)
                }),
            Matcher::Pattern(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    let matched = &caps[0];
                    self.variants
                        .iter()
                        .find(|(source, _)| source == matched)
                        .or_else(|| self.variants.first())
                        .map(|(_, target)| target.clone())
                        .unwrap_or_else(|| matched.to_string())
                })
                .into_owned(),
        }
    }
}

/// Immutable source → target phrase table for one target language.
#[derive(Debug, Clone)]
pub struct TerminologyDictionary {
    /// Exact lookup table, in insertion order
    terms: IndexMap<String, String>,

    /// Substitution steps, longest phrase first
    steps: Vec<Term>,

    mode: MatchMode,
}

impl TerminologyDictionary {
    /// Build a dictionary from (source, target) pairs.
    ///
    /// A later pair with the same source phrase replaces the earlier one.
    /// Pairs with an empty source phrase are dropped.
    pub fn new<I, S, T>(pairs: I, mode: MatchMode) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut terms = IndexMap::new();
        for (source, target) in pairs {
            let source = source.into();
            if source.trim().is_empty() {
                debug!("Skipping terminology entry with empty source phrase");
                continue;
            }
            terms.insert(source, target.into());
        }

        let mut steps = match mode {
            MatchMode::Substring => terms
                .iter()
                .map(|(source, target)| Term {
                    variants: vec![(source.clone(), target.clone())],
                    matcher: Matcher::Substring,
                })
                .collect::<Vec<_>>(),
            MatchMode::WordBoundary => {
                let mut groups: IndexMap<String, Vec<(String, String)>> = IndexMap::new();
                for (source, target) in &terms {
                    groups
                        .entry(source.to_lowercase())
                        .or_default()
                        .push((source.clone(), target.clone()));
                }

                let mut steps = Vec::with_capacity(groups.len());
                for (folded, variants) in groups {
                    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&folded)))?;
                    steps.push(Term {
                        variants,
                        matcher: Matcher::Pattern(pattern),
                    });
                }
                steps
            }
        };

        // Stable: equal lengths keep insertion order
        steps.sort_by_key(|step| Reverse(step.phrase_len()));

        Ok(Self { terms, steps, mode })
    }

    /// The built-in table for `language` (empty for the canonical language).
    pub fn builtin(language: Language, mode: MatchMode) -> Result<Self, regex::Error> {
        Self::new(language.terminology().iter().copied(), mode)
    }

    /// Load a table from a JSON object of `"source": "target"` pairs.
    pub fn from_json_file(path: &Path, mode: MatchMode) -> Result<Self, FileError> {
        let invalid = |reason: String| FileError::Terminology {
            path: path.to_path_buf(),
            reason,
        };

        let value = read_json(path)?;
        let object = value
            .as_object()
            .ok_or_else(|| invalid("expected a JSON object of phrase pairs".to_string()))?;

        let mut pairs = Vec::with_capacity(object.len());
        for (source, target) in object {
            let target = target
                .as_str()
                .ok_or_else(|| invalid(format!("value for '{}' is not a string", source)))?;
            pairs.push((source.clone(), target.to_string()));
        }

        Self::new(pairs, mode).map_err(|e| invalid(e.to_string()))
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact, case-sensitive lookup of a whole phrase.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.terms.get(phrase).map(String::as_str)
    }

    /// Replace every known phrase in `text`, longest phrase first.
    ///
    /// Each phrase is applied once, to the string as rewritten by the longer
    /// phrases before it. Blank text is returned unchanged.
    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc))
    }
}
