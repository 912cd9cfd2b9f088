//! Field access and unit conversion helpers for STAF data rows
//!
//! STAF columns are addressed by the names on the section header line, and
//! a `-` or empty field means the value is absent. Coordinates are written
//! in meters and weights in metric tons; these helpers convert them to the
//! integer millimeters and grams used internally.

use std::collections::HashMap;

use crate::app::models::{Grams, Millimeters};
use crate::constants::{ABSENT_FIELD, GRAMS_PER_TON, MILLIMETERS_PER_METER};

/// Parse a coordinate field in meters into millimeters.
pub fn parse_meters(field: &str) -> Option<Millimeters> {
    let value: f64 = field.trim().parse().ok()?;
    value
        .is_finite()
        .then(|| (value * MILLIMETERS_PER_METER).round() as Millimeters)
}

/// Parse a weight field in metric tons into grams.
pub fn parse_tons(field: &str) -> Option<Grams> {
    let value: f64 = field.trim().parse().ok()?;
    value
        .is_finite()
        .then(|| (value * GRAMS_PER_TON).round() as Grams)
}

/// Parse a `Y`/`N` flag field.
pub fn parse_flag(field: &str) -> Option<bool> {
    match field.trim() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Column lookup for one section, built from its header line.
///
/// Lookups return `None` for unknown columns and for absent values, so
/// section parsers read every attribute through the same permissive path.
#[derive(Debug)]
pub struct FieldMap {
    index_by_name: HashMap<String, usize>,
}

impl FieldMap {
    pub fn new(header: &[String]) -> Self {
        let index_by_name = header
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        FieldMap { index_by_name }
    }

    /// The raw field under `column`, with absence normalized to `None`.
    pub fn get<'a>(&self, record: &'a [String], column: &str) -> Option<&'a str> {
        let index = *self.index_by_name.get(column)?;
        let field = record.get(index)?.trim();
        (!field.is_empty() && field != ABSENT_FIELD).then_some(field)
    }

    /// An owned copy of the field under `column`.
    pub fn string(&self, record: &[String], column: &str) -> Option<String> {
        self.get(record, column).map(str::to_string)
    }

    /// The field under `column` parsed from meters into millimeters.
    pub fn meters(&self, record: &[String], column: &str) -> Option<Millimeters> {
        self.get(record, column).and_then(parse_meters)
    }

    /// The field under `column` parsed from metric tons into grams.
    pub fn tons(&self, record: &[String], column: &str) -> Option<Grams> {
        self.get(record, column).and_then(parse_tons)
    }

    /// The field under `column` parsed as a `Y`/`N` flag.
    pub fn flag(&self, record: &[String], column: &str) -> Option<bool> {
        self.get(record, column).and_then(parse_flag)
    }
}
