//! # Snapshot Builder
//!
//! Reshapes one [`ElementRecord`] into the display-oriented document a
//! polling client reads (`api/element-of-the-day.json`,
//! `api/element-of-the-hour.json`).
//!
//! Unlike the dataset, the snapshot never contains `null`: absent values are
//! rendered as the sentinel [`NOT_AVAILABLE`], and melting/boiling points carry
//! a Kelvin suffix.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::selector;
use crate::{ElementRecord, FeedError, Result};

/// Placeholder for a missing display value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Unit appended to melting and boiling points.
pub const TEMPERATURE_UNIT: &str = "K";

/// Published document wrapper: `{ "element": { ... } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub element: SnapshotElement,
}

/// Display subset of an element plus its publication time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub atomic_number: String,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: String,
    pub category: String,
    pub standard_state: String,
    pub electron_configuration: String,
    pub electronegativity: String,
    /// `"<value> K"` or `"N/A"`
    pub melting_point: String,
    /// `"<value> K"` or `"N/A"`
    pub boiling_point: String,
    pub density: String,
    pub oxidation_states: String,
    pub year_discovered: String,
    /// ISO-8601 UTC, millisecond precision
    pub updated_at: String,
}

/// Which rotation a snapshot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Day,
    Hour,
}

impl Cycle {
    /// Output file name under `api/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Cycle::Day => "element-of-the-day.json",
            Cycle::Hour => "element-of-the-hour.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cycle::Day => "Element of the Day",
            Cycle::Hour => "Element of the Hour",
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn with_temperature_unit(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("{v} {TEMPERATURE_UNIT}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format `timestamp` the way every published document does.
pub fn iso_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the display payload for `record`, stamped with `timestamp`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use element_feed::ElementRecord;
/// use element_feed::snapshot::build_element_data;
///
/// let record = ElementRecord {
///     melting_point: Some("13.81".into()),
///     ..ElementRecord::default()
/// };
/// let at = Utc.with_ymd_and_hms(2026, 1, 17, 14, 0, 0).unwrap();
/// let element = build_element_data(&record, &at);
///
/// assert_eq!(element.melting_point, "13.81 K");
/// assert_eq!(element.boiling_point, "N/A");
/// assert_eq!(element.updated_at, "2026-01-17T14:00:00.000Z");
/// ```
pub fn build_element_data<Tz: TimeZone>(
    record: &ElementRecord,
    timestamp: &DateTime<Tz>,
) -> SnapshotElement {
    SnapshotElement {
        atomic_number: record.atomic_number.clone(),
        symbol: record.symbol.clone(),
        name: record.name.clone(),
        atomic_mass: record.atomic_mass.clone(),
        category: record.category.clone(),
        standard_state: record.standard_state.clone(),
        electron_configuration: record.electron_configuration.clone(),
        electronegativity: or_not_available(record.electronegativity.as_deref()),
        melting_point: with_temperature_unit(record.melting_point.as_deref()),
        boiling_point: with_temperature_unit(record.boiling_point.as_deref()),
        density: or_not_available(record.density.as_deref()),
        oxidation_states: or_not_available(record.oxidation_states.as_deref()),
        year_discovered: record.year_discovered.clone(),
        updated_at: iso_timestamp(timestamp),
    }
}

/// Select the record for `cycle` at `now` and wrap it as a [`Snapshot`].
pub fn generate<Tz: TimeZone>(
    cycle: Cycle,
    elements: &[ElementRecord],
    now: &DateTime<Tz>,
) -> Result<Snapshot> {
    let index = match cycle {
        Cycle::Day => selector::index_for_day(now, elements.len())?,
        Cycle::Hour => selector::index_for_hour(now, elements.len())?,
    };
    let record = elements.get(index).ok_or(FeedError::IndexOutOfRange {
        index,
        len: elements.len(),
    })?;

    let snapshot = Snapshot {
        element: build_element_data(record, now),
    };
    info!(
        cycle = cycle.label(),
        index,
        element = %format!("{} ({})", record.name, record.symbol),
        "selected element"
    );
    Ok(snapshot)
}

/// Element of the day, using the calendar of `now`'s time zone.
pub fn element_of_the_day<Tz: TimeZone>(
    elements: &[ElementRecord],
    now: &DateTime<Tz>,
) -> Result<Snapshot> {
    generate(Cycle::Day, elements, now)
}

/// Element of the hour, keyed on the UTC hour of `now`.
pub fn element_of_the_hour<Tz: TimeZone>(
    elements: &[ElementRecord],
    now: &DateTime<Tz>,
) -> Result<Snapshot> {
    generate(Cycle::Hour, elements, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrogen() -> ElementRecord {
        ElementRecord {
            atomic_number: "1".into(),
            symbol: "H".into(),
            name: "Hydrogen".into(),
            atomic_mass: "1.0080".into(),
            cpk_hex_color: Some("FFFFFF".into()),
            electron_configuration: "1s1".into(),
            electronegativity: Some("2.2".into()),
            atomic_radius: Some("120".into()),
            ionization_energy: Some("13.598".into()),
            electron_affinity: Some("0.754".into()),
            oxidation_states: Some("+1, -1".into()),
            standard_state: "Gas".into(),
            melting_point: Some("13.81".into()),
            boiling_point: Some("20.28".into()),
            density: Some("0.00008988".into()),
            category: "Nonmetal".into(),
            year_discovered: "1766".into(),
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 17, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_builds_display_fields() {
        let element = build_element_data(&hydrogen(), &at());

        assert_eq!(element.atomic_number, "1");
        assert_eq!(element.symbol, "H");
        assert_eq!(element.name, "Hydrogen");
        assert_eq!(element.atomic_mass, "1.0080");
        assert_eq!(element.category, "Nonmetal");
        assert_eq!(element.standard_state, "Gas");
        assert_eq!(element.electron_configuration, "1s1");
        assert_eq!(element.electronegativity, "2.2");
        assert_eq!(element.melting_point, "13.81 K");
        assert_eq!(element.boiling_point, "20.28 K");
        assert_eq!(element.density, "0.00008988");
        assert_eq!(element.oxidation_states, "+1, -1");
        assert_eq!(element.year_discovered, "1766");
        assert_eq!(element.updated_at, "2026-01-17T14:00:00.000Z");
    }

    #[test]
    fn test_missing_values_become_sentinel() {
        let record = ElementRecord {
            electronegativity: None,
            melting_point: None,
            boiling_point: None,
            density: None,
            oxidation_states: None,
            ..hydrogen()
        };
        let element = build_element_data(&record, &at());

        assert_eq!(element.electronegativity, "N/A");
        assert_eq!(element.melting_point, "N/A");
        assert_eq!(element.boiling_point, "N/A");
        assert_eq!(element.density, "N/A");
        assert_eq!(element.oxidation_states, "N/A");
    }

    #[test]
    fn test_empty_strings_are_treated_as_missing() {
        let record = ElementRecord {
            melting_point: Some(String::new()),
            density: Some(String::new()),
            ..hydrogen()
        };
        let element = build_element_data(&record, &at());
        assert_eq!(element.melting_point, "N/A");
        assert_eq!(element.density, "N/A");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = Snapshot {
            element: build_element_data(&hydrogen(), &at()),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        let element = value["element"].as_object().unwrap();
        assert_eq!(element.len(), 14);
        assert!(element.values().all(|v| v.is_string()));
        assert!(!element.contains_key("cpk_hex_color"));
    }

    #[test]
    fn test_updated_at_normalizes_to_utc() {
        let offset = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let local = at().with_timezone(&offset);
        assert_eq!(iso_timestamp(&local), "2026-01-17T14:00:00.000Z");
    }

    #[test]
    fn test_generate_rejects_empty_list() {
        assert!(matches!(
            element_of_the_day(&[], &at()),
            Err(FeedError::EmptyDataset)
        ));
        assert!(matches!(
            element_of_the_hour(&[], &at()),
            Err(FeedError::EmptyDataset)
        ));
    }

    #[test]
    fn test_cycle_file_names() {
        assert_eq!(Cycle::Day.file_name(), "element-of-the-day.json");
        assert_eq!(Cycle::Hour.file_name(), "element-of-the-hour.json");
    }
}
