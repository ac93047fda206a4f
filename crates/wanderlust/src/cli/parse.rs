//! Offline parse command handler.

use super::OutputFormat;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};
use wanderlust::{Category, IoError, RecordKind, WanderlustResult, parse_text, render};

/// Parse a file, or standard input, and print the records.
#[instrument]
pub fn parse_file(
    kind: RecordKind,
    file: Option<&Path>,
    category: Category,
    format: OutputFormat,
) -> WanderlustResult<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            IoError::new(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| IoError::new(format!("Failed to read standard input: {}", e)))?;
            text
        }
    };
    debug!(chars = text.len(), "Read model answer");

    let parsed = parse_text(kind, &text, category);
    match format {
        OutputFormat::Human => print!("{}", render::parsed(&parsed)),
        OutputFormat::Json => println!("{}", render::json(&parsed)?),
    }
    Ok(())
}
