//! # Dataset Validation
//!
//! The normalizer passes required fields through untouched, so a broken
//! source produces a broken dataset without complaint. This module checks the
//! invariants a display client relies on and reports every violation it
//! finds:
//!
//! - atomic numbers run 1..=N in order
//! - symbols and names are unique
//! - symbols look like `H`, `He`, `Uue`
//! - atomic masses are plain decimals
//! - `standard_state`, `category` and `year_discovered` are in their domains
//! - required fields are non-empty, optional fields are never `""`
//! - `metadata.total_elements` equals the element count

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::{Dataset, ElementRecord};

/// Element class (`GroupBlock` in the source).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "Alkali metal",
            Category::AlkalineEarthMetal => "Alkaline earth metal",
            Category::TransitionMetal => "Transition metal",
            Category::PostTransitionMetal => "Post-transition metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase at standard conditions, including the predicted states of synthetic elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardState {
    Solid,
    Liquid,
    Gas,
    ExpectedGas,
    ExpectedSolid,
}

impl StandardState {
    pub const ALL: [StandardState; 5] = [
        StandardState::Solid,
        StandardState::Liquid,
        StandardState::Gas,
        StandardState::ExpectedGas,
        StandardState::ExpectedSolid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StandardState::Solid => "Solid",
            StandardState::Liquid => "Liquid",
            StandardState::Gas => "Gas",
            StandardState::ExpectedGas => "Expected to be a Gas",
            StandardState::ExpectedSolid => "Expected to be a Solid",
        }
    }
}

impl FromStr for StandardState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for StandardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One broken invariant, tied to the element position it was found at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// 0-based position in `elements`, `None` for dataset-level issues
    pub index: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(idx) => write!(f, "element #{} {}: {}", idx + 1, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// `Ancient`, `Unknown`, or exactly four ASCII digits.
pub fn is_valid_year(year: &str) -> bool {
    year == "Ancient"
        || year == "Unknown"
        || (year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

/// One uppercase letter followed by up to two lowercase letters.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest: Vec<char> = chars.collect();
            rest.len() <= 2 && rest.iter().all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}

/// Digits with an optional fractional part (`"1.0080"`, `"294"`).
pub fn is_valid_mass(mass: &str) -> bool {
    let (whole, frac) = match mass.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (mass, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && frac.map_or(true, digits)
}

fn check_element(index: usize, element: &ElementRecord, issues: &mut Vec<ValidationIssue>) {
    let mut push = |field: &'static str, message: String| {
        issues.push(ValidationIssue {
            index: Some(index),
            field,
            message,
        })
    };

    for (field, value) in element.required_fields() {
        if value.is_empty() {
            push(field, "required value is empty".to_string());
        }
    }
    for (field, value) in element.optional_fields() {
        if value == Some("") {
            push(field, "optional value should be null, not empty".to_string());
        }
    }

    let expected = (index + 1).to_string();
    if element.atomic_number != expected {
        push(
            "atomic_number",
            format!("expected {expected}, found {:?}", element.atomic_number),
        );
    }
    if !element.symbol.is_empty() && !is_valid_symbol(&element.symbol) {
        push("symbol", format!("malformed symbol {:?}", element.symbol));
    }
    if !element.atomic_mass.is_empty() && !is_valid_mass(&element.atomic_mass) {
        push(
            "atomic_mass",
            format!("not numeric: {:?}", element.atomic_mass),
        );
    }
    if element.standard_state.parse::<StandardState>().is_err() {
        push(
            "standard_state",
            format!("unknown state {:?}", element.standard_state),
        );
    }
    if element.category.parse::<Category>().is_err() {
        push("category", format!("unknown category {:?}", element.category));
    }
    if !is_valid_year(&element.year_discovered) {
        push(
            "year_discovered",
            format!("invalid year {:?}", element.year_discovered),
        );
    }
}

/// Check every documented invariant of `elements`.
pub fn validate_elements(elements: &[ElementRecord]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut symbols = HashSet::new();
    let mut names = HashSet::new();

    for (index, element) in elements.iter().enumerate() {
        check_element(index, element, &mut issues);

        if !symbols.insert(element.symbol.as_str()) {
            issues.push(ValidationIssue {
                index: Some(index),
                field: "symbol",
                message: format!("duplicate symbol {:?}", element.symbol),
            });
        }
        if !names.insert(element.name.as_str()) {
            issues.push(ValidationIssue {
                index: Some(index),
                field: "name",
                message: format!("duplicate name {:?}", element.name),
            });
        }
    }
    issues
}

/// Validate a whole dataset, including its metadata.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if dataset.metadata.total_elements != dataset.elements.len() {
        issues.push(ValidationIssue {
            index: None,
            field: "total_elements",
            message: format!(
                "metadata says {}, dataset has {}",
                dataset.metadata.total_elements,
                dataset.elements.len()
            ),
        });
    }
    issues.extend(validate_elements(&dataset.elements));
    issues
}
