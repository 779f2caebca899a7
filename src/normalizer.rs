//! # Dataset Normalizer
//!
//! Flattens the nested PubChem table into the 17-field [`ElementRecord`]
//! list published as `data-all.json`.
//!
//! ## Field Policy
//! - **Required** (`atomic_number`, `symbol`, `name`, `atomic_mass`,
//!   `electron_configuration`, `standard_state`, `category`, `year_discovered`):
//!   copied verbatim, an empty cell stays `""`
//! - **Optional** (everything else): an empty cell becomes `None`
//!
//! Rows are never sorted or filtered: record `i` is always source row `i`.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::source::{ColumnIndex, SourceDocument};
use crate::{Dataset, DatasetMetadata, ElementRecord, Result};

/// Default `metadata.data_source` label.
pub const DATA_SOURCE: &str = "PubChem";

/// Default `metadata.description`.
pub const DESCRIPTION: &str = "Complete periodic table data with all 118 elements";

/// Labels written into [`DatasetMetadata`].
#[derive(Clone, Debug)]
pub struct MetadataLabels {
    pub data_source: String,
    pub description: String,
}

impl Default for MetadataLabels {
    fn default() -> Self {
        MetadataLabels {
            data_source: DATA_SOURCE.to_string(),
            description: DESCRIPTION.to_string(),
        }
    }
}

/// Map one row of cells to an [`ElementRecord`] using `columns`.
pub fn map_element_data(cells: &[String], columns: &ColumnIndex) -> ElementRecord {
    let required = |column: &str| columns.cell(cells, column).unwrap_or_default().to_string();
    let optional = |column: &str| {
        columns
            .cell(cells, column)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    ElementRecord {
        atomic_number: required("AtomicNumber"),
        symbol: required("Symbol"),
        name: required("Name"),
        atomic_mass: required("AtomicMass"),
        cpk_hex_color: optional("CPKHexColor"),
        electron_configuration: required("ElectronConfiguration"),
        electronegativity: optional("Electronegativity"),
        atomic_radius: optional("AtomicRadius"),
        ionization_energy: optional("IonizationEnergy"),
        electron_affinity: optional("ElectronAffinity"),
        oxidation_states: optional("OxidationStates"),
        standard_state: required("StandardState"),
        melting_point: optional("MeltingPoint"),
        boiling_point: optional("BoilingPoint"),
        density: optional("Density"),
        category: required("GroupBlock"),
        year_discovered: required("YearDiscovered"),
    }
}

/// Normalize every row of `source`, preserving order.
pub fn normalize_elements(source: &SourceDocument) -> Vec<ElementRecord> {
    let columns = ColumnIndex::new(&source.table.columns.names);
    source
        .table
        .rows
        .iter()
        .map(|row| map_element_data(&row.cells, &columns))
        .collect()
}

/// Convert a parsed source document into the canonical [`Dataset`].
///
/// `generated_at` is stamped into the metadata as an ISO-8601 UTC string
/// with millisecond precision (e.g. `2026-01-17T14:00:00.000Z`).
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use element_feed::normalizer::{convert_elements_data, MetadataLabels};
/// use element_feed::source::SourceDocument;
///
/// let source = SourceDocument::from_json(
///     r#"{"Table": {"Columns": {"Column": ["AtomicNumber", "Symbol"]},
///                   "Row": [{"Cell": ["1", "H"]}]}}"#,
/// ).unwrap();
/// let now = Utc.with_ymd_and_hms(2026, 1, 17, 14, 0, 0).unwrap();
///
/// let dataset = convert_elements_data(&source, &MetadataLabels::default(), now);
/// assert_eq!(dataset.metadata.total_elements, 1);
/// assert_eq!(dataset.metadata.generated_at, "2026-01-17T14:00:00.000Z");
/// assert_eq!(dataset.elements[0].symbol, "H");
/// ```
pub fn convert_elements_data(
    source: &SourceDocument,
    labels: &MetadataLabels,
    generated_at: DateTime<Utc>,
) -> Dataset {
    let elements = normalize_elements(source);
    debug!(rows = elements.len(), "normalized source rows");

    Dataset {
        metadata: DatasetMetadata {
            total_elements: elements.len(),
            data_source: labels.data_source.clone(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            description: labels.description.clone(),
        },
        elements,
    }
}

/// Parse raw JSON text and convert it in one step.
pub fn convert_json(
    text: &str,
    labels: &MetadataLabels,
    generated_at: DateTime<Utc>,
) -> Result<Dataset> {
    let source = SourceDocument::from_json(text)?;
    let dataset = convert_elements_data(&source, labels, generated_at);
    log_summary(&dataset);
    Ok(dataset)
}

/// Log count plus first and last element after a conversion.
pub fn log_summary(dataset: &Dataset) {
    match (dataset.elements.first(), dataset.elements.last()) {
        (Some(first), Some(last)) => info!(
            count = dataset.elements.len(),
            first = %format!("{} ({})", first.name, first.symbol),
            last = %format!("{} ({})", last.name, last.symbol),
            "converted elements"
        ),
        _ => info!(count = 0, "converted elements"),
    }
}
