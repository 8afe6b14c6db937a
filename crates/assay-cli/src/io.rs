//! File I/O for the `assay` binary.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::NamedTempFile;

/// Read and parse a score-ready JSON document.
pub fn read_input(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Write `value` to `path` atomically.
///
/// The document is written to a temporary file in the destination directory
/// and renamed into place, so a failed run never leaves a partial output.
pub fn write_output(path: &Path, value: &Value, pretty: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;

    if pretty {
        serde_json::to_writer_pretty(&mut tmp, value)?;
    } else {
        serde_json::to_writer(&mut tmp, value)?;
    }
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;

    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
