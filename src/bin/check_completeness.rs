//! Check how completely a translated document covers its source document.
//!
//! Usage:
//!   check-completeness <source_file> <translation_file>
//!
//! Exits with status 0 only when no source string is missing from the
//! translation. Strings identical to the source are reported but do not fail
//! the check.

use anyhow::Result;
use rules_i18n::completeness::{check, render};
use rules_i18n::json_io::read_json;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

fn print_usage() {
    eprintln!("Usage: check-completeness <source_file> <translation_file>");
    eprintln!("Example: check-completeness en/teams.json fr/teams.json");
}

/// Load a document or exit with a diagnostic naming its role.
fn load_or_exit(path: &str, role: &str) -> Value {
    match read_json(Path::new(path)) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error reading {} file: {}", role, e);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rules_i18n=info".parse()?)
                .add_directive("check_completeness=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage();
        std::process::exit(1);
    }

    let source_file = &args[1];
    let translation_file = &args[2];

    let source = load_or_exit(source_file, "source");
    let translation = load_or_exit(translation_file, "translation");

    let report = check(&source, &translation);
    print!("{}", render(&report, translation_file));

    if report.passed() {
        info!(
            "{}: {:.1}% translated, nothing missing",
            translation_file,
            report.completeness_percent()
        );
        Ok(())
    } else {
        warn!(
            "{}: {} of {} strings missing",
            translation_file,
            report.missing_count(),
            report.total()
        );
        std::io::stdout().flush()?;
        std::process::exit(1);
    }
}
