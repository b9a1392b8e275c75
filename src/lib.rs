//! Translation tooling for game-rule JSON documents.
//!
//! Finds the human-readable strings in arbitrarily shaped documents
//! (team, weapon and rules data), reports how completely a translated copy
//! covers them, and produces first-pass translations from terminology
//! dictionaries.

pub mod classifier;
pub mod completeness;
pub mod config;
pub mod error;
pub mod extract;
pub mod i18n;
pub mod json_io;
pub mod translation;
pub mod walker;
