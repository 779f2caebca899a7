//! # Element Feed Core Library
//!
//! This library turns a static periodic-table export into a rotating
//! "element of the day" and "element of the hour" feed for a polling display
//! client.
//!
//! ## Design Philosophy
//!
//! ### Source Fidelity
//! - **Strings everywhere**: Every element property is kept exactly as the source
//!   wrote it (`"1.0080"`, `"+1, -1"`), so trailing zeros and ranges survive
//! - **Explicit nulls**: Optional properties are `Option<String>` and serialize as
//!   `null`, never as a missing key
//!
//! ### Determinism
//! No function in this crate reads the system clock. Every operation that
//! depends on time takes the timestamp as a parameter, so a run is fully
//! reproducible from its inputs and the scheduling boundary stays injectable.
//!
//! ### Data Flow
//! 1. **Convert**: raw PubChem table → [`normalizer`] → [`Dataset`] → `data-all.json`
//! 2. **Select**: dataset + "now" → [`selector`] → array index
//! 3. **Publish**: record + "now" → [`snapshot`] → `api/element-of-the-*.json`
//!
//! ## Core Types
//! - [`ElementRecord`]: one normalized chemical element (17 fields)
//! - [`Dataset`]: the ordered element list plus [`DatasetMetadata`]

use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod normalizer;
pub mod renderer;
pub mod selector;
pub mod snapshot;
pub mod source;
pub mod storage;
pub mod validate;

pub use error::{FeedError, Result};

/// One normalized chemical element.
///
/// Field order matches the published `data-all.json` layout. Required fields
/// are passed through verbatim from the source (an empty source cell stays an
/// empty string); optional fields are `None` whenever the source cell is empty.
///
/// # Example
/// ```
/// use element_feed::ElementRecord;
///
/// let hydrogen = ElementRecord {
///     atomic_number: "1".into(),
///     symbol: "H".into(),
///     name: "Hydrogen".into(),
///     atomic_mass: "1.0080".into(),
///     melting_point: Some("13.81".into()),
///     ..ElementRecord::default()
/// };
///
/// assert_eq!(hydrogen.symbol, "H");
/// assert!(hydrogen.density.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub atomic_number: String,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: String,
    pub cpk_hex_color: Option<String>,
    pub electron_configuration: String,
    pub electronegativity: Option<String>,
    pub atomic_radius: Option<String>,
    pub ionization_energy: Option<String>,
    pub electron_affinity: Option<String>,
    pub oxidation_states: Option<String>,
    pub standard_state: String,
    pub melting_point: Option<String>,
    pub boiling_point: Option<String>,
    pub density: Option<String>,
    /// `GroupBlock` in the source table.
    pub category: String,
    pub year_discovered: String,
}

impl ElementRecord {
    /// Optional fields by output name, in serialization order.
    pub fn optional_fields(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("cpk_hex_color", self.cpk_hex_color.as_deref()),
            ("electronegativity", self.electronegativity.as_deref()),
            ("atomic_radius", self.atomic_radius.as_deref()),
            ("ionization_energy", self.ionization_energy.as_deref()),
            ("electron_affinity", self.electron_affinity.as_deref()),
            ("oxidation_states", self.oxidation_states.as_deref()),
            ("melting_point", self.melting_point.as_deref()),
            ("boiling_point", self.boiling_point.as_deref()),
            ("density", self.density.as_deref()),
        ]
    }

    /// Required fields by output name, in serialization order.
    pub fn required_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("atomic_number", &self.atomic_number),
            ("symbol", &self.symbol),
            ("name", &self.name),
            ("atomic_mass", &self.atomic_mass),
            ("electron_configuration", &self.electron_configuration),
            ("standard_state", &self.standard_state),
            ("category", &self.category),
            ("year_discovered", &self.year_discovered),
        ]
    }
}

/// Descriptive header written above the element list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub total_elements: usize,
    pub data_source: String,
    /// ISO-8601 UTC timestamp of the conversion run
    pub generated_at: String,
    pub description: String,
}

/// The canonical flat dataset (`data-all.json`).
///
/// Built once by [`normalizer::convert_elements_data`] and treated as
/// read-only by every later run. The order of `elements` is a published
/// contract: it decides which element appears on which day and hour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: DatasetMetadata,
    pub elements: Vec<ElementRecord>,
}
