//! Error types shared by every stage of the feed pipeline.

use std::io;
use thiserror::Error;

/// Errors that can occur while converting, selecting or publishing elements.
///
/// Missing optional values are not errors (they become `null` or `"N/A"`),
/// and missing required values are reported by [`crate::validate`] rather
/// than here.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Reading or writing a JSON document failed (permissions, missing file, disk space)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input was not JSON, or lacked the `Table` / `Columns` / `Row` structure
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Index selection needs at least one element to take a modulus over
    #[error("cannot select from an empty element list")]
    EmptyDataset,

    /// A selected index did not resolve to a record
    #[error("element index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// The dataset broke one or more documented invariants
    #[error("dataset failed validation with {0} issue(s)")]
    Validation(usize),
}

pub type Result<T, E = FeedError> = std::result::Result<T, E>;
