//! Template load and output persistence.
//!
//! The template is a JSON-serialized `Document`. Loading it yields an owned
//! tree, which is this program's equivalent of duplicating the template: the
//! template file itself is never written. The populated tree is saved as a
//! new dated file next to it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::document::Document;

const OUTPUT_FILE_STEM: &str = "職務経歴書";

pub fn load_template(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template '{}'", path.display()))?;
    let doc = serde_json::from_str(&raw)
        .with_context(|| format!("Template '{}' is not a valid document", path.display()))?;
    info!("Loaded template from {}", path.display());
    Ok(doc)
}

/// Dated output file name, e.g. `職務経歴書-2023-03-05.json`.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{OUTPUT_FILE_STEM}-{}.json", date.format("%Y-%m-%d"))
}

pub fn save_document(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(doc).context("Failed to serialize document")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write document '{}'", path.display()))?;
    info!("Saved populated document to {}", path.display());
    Ok(())
}
