//! Extract every translatable string of a JSON document.
//!
//! Usage:
//!   extract-translatables <json_file>                 # Print to stdout
//!   extract-translatables <json_file> <output_file>   # Write to a file
//!
//! The output is a JSON object with the source file, the number of strings
//! found and the path → string map, ready to hand to translators.

use anyhow::{Context, Result};
use rules_i18n::extract::{extract_strings, ExtractionFile};
use rules_i18n::json_io::{read_json, to_pretty_json, write_json_string};
use std::path::Path;
use tracing::info;

fn print_usage() {
    eprintln!("Usage: extract-translatables <json_file> [output_file]");
    eprintln!("Example: extract-translatables teams.json teams_translatable.json");
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rules_i18n=info".parse()?)
                .add_directive("extract_translatables=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let json_file = &args[1];
    let output_file = args.get(2);

    let document = match read_json(Path::new(json_file)) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let strings = extract_strings(&document);
    let total = strings.total();
    let output = ExtractionFile::new(json_file.as_str(), strings);
    let json = to_pretty_json(&output).context("Failed to serialize extraction")?;

    match output_file {
        Some(output_file) => {
            write_json_string(Path::new(output_file), &json)
                .with_context(|| format!("Failed to write {}", output_file))?;
            info!("Extracted {} translatable strings to {}", total, output_file);
        }
        None => print!("{}", json),
    }

    Ok(())
}
