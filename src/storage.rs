//! # Document Storage
//!
//! File-system boundary of the feed: reading the raw PubChem export and the
//! canonical dataset, and writing every published document as pretty-printed
//! JSON (two-space indentation).
//!
//! ## Output Layout
//! ```text
//! <output_dir>/
//!   api/element-of-the-day.json
//!   api/element-of-the-hour.json
//!   data.json                     mirror of the day snapshot for local testing
//! ```
//!
//! Writes are plain overwrites: the last run wins.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::snapshot::{Cycle, Snapshot};
use crate::source::SourceDocument;
use crate::{Dataset, Result};

/// Directory under the output root that the display client polls.
pub const API_DIR: &str = "api";

/// Local-testing copy of the day snapshot.
pub const DAY_MIRROR: &str = "data.json";

/// Read and parse the raw source export.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    let text = fs::read_to_string(path.as_ref())?;
    SourceDocument::from_json(&text)
}

/// Read the canonical dataset written by [`write_dataset`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let data = fs::read(path.as_ref())?;
    Ok(serde_json::from_slice(&data)?)
}

/// Serialize `value` as indented JSON and overwrite `path`.
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path.as_ref(), text)?;
    debug!(path = %path.as_ref().display(), "wrote document");
    Ok(())
}

pub fn write_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    write_json(dataset, path)
}

/// Write a snapshot to its place under `output_dir`, creating `api/` if needed.
///
/// Returns every path written: the day cycle also refreshes [`DAY_MIRROR`].
pub fn write_snapshot<P: AsRef<Path>>(
    snapshot: &Snapshot,
    cycle: Cycle,
    output_dir: P,
) -> Result<Vec<PathBuf>> {
    let root = output_dir.as_ref();
    let api = root.join(API_DIR);
    fs::create_dir_all(&api)?;

    let mut written = vec![api.join(cycle.file_name())];
    if cycle == Cycle::Day {
        written.push(root.join(DAY_MIRROR));
    }
    for path in &written {
        write_json(snapshot, path)?;
    }
    Ok(written)
}
