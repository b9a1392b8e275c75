//! Languages and terminology.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `terminology`: Built-in per-language terminology tables
//! - `dictionary`: Terminology dictionaries and longest-first phrase substitution
//!
//! # Example
//!
//! ```rust,ignore
//! use rules_i18n::i18n::{Language, MatchMode, TerminologyDictionary};
//!
//! let spanish = Language::from_code("es")?;
//! let dictionary = TerminologyDictionary::builtin(spanish, MatchMode::WordBoundary)?;
//! assert_eq!(dictionary.translate("Shoot"), "Disparar");
//! ```

mod dictionary;
mod language;
mod registry;
mod terminology;

pub use dictionary::{MatchMode, TerminologyDictionary};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use terminology::{FRENCH_TERMS, SPANISH_TERMS};
