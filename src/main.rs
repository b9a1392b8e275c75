//! Batch translation of the conventional data files.
//!
//! Usage:
//!   translate-all              # Translate ./en/*.json into ./es and ./fr
//!   translate-all <base_dir>   # Same, under <base_dir>
//!
//! Optional environment variables:
//! - I18N_BASE_DIR (defaults to ., overridden by the argument)
//! - I18N_SOURCE_LANG (defaults to en, the only accepted value)
//! - I18N_MATCH_MODE (word-boundary or substring, defaults to word-boundary)
//! - I18N_FILES (comma-separated file names, defaults to the six rules files)
//! - I18N_DICTIONARY_DIR (directory of <code>.json terminology overrides)

use anyhow::Result;
use rules_i18n::config::Config;
use rules_i18n::translation::translate_all;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rules_i18n=info".parse()?)
                .add_directive("translate_all=info".parse()?),
        )
        .init();

    let mut config = Config::from_env()?;
    if let Some(base_dir) = std::env::args().nth(1) {
        config.base_dir = PathBuf::from(base_dir);
    }

    info!(
        "Translating {} documents under {}",
        config.source_language,
        config.base_dir.display()
    );

    let summary = translate_all(&config);

    info!(
        "Translation complete: {} written, {} skipped, {} failed",
        summary.written.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    info!("Terminology replacement is a first pass only; manual review is recommended");

    if summary.has_failures() {
        for (path, reason) in &summary.failed {
            eprintln!("Failed: {} ({})", path.display(), reason);
        }
        std::process::exit(1);
    }

    Ok(())
}
