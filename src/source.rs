//! # Raw Source Table
//!
//! Typed model of the PubChem periodic-table export consumed by the
//! normalizer:
//!
//! ```json
//! {
//!   "Table": {
//!     "Columns": { "Column": ["AtomicNumber", "Symbol", "..."] },
//!     "Row": [ { "Cell": ["1", "H", "..."] } ]
//!   }
//! }
//! ```
//!
//! Cells are positional. [`ColumnIndex`] maps a column name to its position
//! once, so every later lookup is by name and reordered source columns are
//! harmless.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::Result;

/// Every source column the normalizer reads, in output order.
pub const COLUMNS: [&str; 17] = [
    "AtomicNumber",
    "Symbol",
    "Name",
    "AtomicMass",
    "CPKHexColor",
    "ElectronConfiguration",
    "Electronegativity",
    "AtomicRadius",
    "IonizationEnergy",
    "ElectronAffinity",
    "OxidationStates",
    "StandardState",
    "MeltingPoint",
    "BoilingPoint",
    "Density",
    "GroupBlock",
    "YearDiscovered",
];

/// Top-level document wrapper.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(rename = "Table")]
    pub table: SourceTable,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceTable {
    #[serde(rename = "Columns")]
    pub columns: SourceColumns,
    #[serde(rename = "Row")]
    pub rows: Vec<SourceRow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceColumns {
    #[serde(rename = "Column")]
    pub names: Vec<String>,
}

/// One element's cells, parallel to [`SourceColumns::names`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceRow {
    #[serde(rename = "Cell")]
    pub cells: Vec<String>,
}

impl SourceDocument {
    /// Parse a raw export. Fails on invalid JSON or a missing table layer.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Column name → cell position, built once per table.
#[derive(Clone, Debug, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the mapping from a column list.
    ///
    /// When a name appears twice the later position wins. Any column in
    /// [`COLUMNS`] that the table does not declare is logged once here; its
    /// field will fall back to an empty/null value for every row.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let positions: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_ref().to_string(), idx))
            .collect();

        let index = ColumnIndex { positions };
        for missing in index.missing_columns() {
            warn!(column = missing, "source table does not declare expected column");
        }
        index
    }

    /// Position of `column`, if declared.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Cell value for `column` in `cells`, if the column exists and the row is long enough.
    pub fn cell<'a>(&self, cells: &'a [String], column: &str) -> Option<&'a str> {
        self.position(column)
            .and_then(|idx| cells.get(idx))
            .map(String::as_str)
    }

    /// Expected columns that this table lacks.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.positions.contains_key(*name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
