//! Section parsers for the STAF flat format
//!
//! Turns the raw sections produced by the scanner into typed records and
//! bay sections, converting units as it goes. Parsing is permissive by
//! contract: a malformed field becomes an absent value and a row without a
//! valid identity is skipped with a warning, so a sparse or sloppy file
//! still converts.
//!
//! ## Organization
//!
//! - [`fields`] - Column lookup and unit conversion shared by all sections
//! - [`ship`] - SHIP section (vessel-wide attributes and CG interpretation)
//! - [`bay`] - SECTION section (bay/level declarations)
//! - [`row`] - STACK section (per-row definitions)
//! - [`tier`] - TIER section (per-tier VCG declarations)
//! - [`slot`] - SLOT section (per-slot capabilities)
//! - [`lid`] - LID section (hatch lids)

pub mod bay;
pub mod fields;
pub mod lid;
pub mod row;
pub mod ship;
pub mod slot;
pub mod tier;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::ParsedStafData;
use crate::app::services::section_scanner::SectionMap;
use crate::constants::{
    SECTION_BAY, SECTION_LID, SECTION_ROW, SECTION_SHIP, SECTION_SLOT, SECTION_TIER,
};

pub use fields::FieldMap;

/// Parse every known section of a scanned STAF file.
///
/// Mandatory-section presence is the caller's concern; any section absent
/// here simply contributes nothing.
pub fn parse_all_sections(sections: &SectionMap) -> ParsedStafData {
    let mut data = ParsedStafData::default();

    if let Some(section) = sections.get(SECTION_SHIP) {
        data.ship = ship::parse_ship(section);
    }
    if let Some(section) = sections.get(SECTION_BAY) {
        data.bay_levels = bay::parse_bays(section);
    }
    if let Some(section) = sections.get(SECTION_ROW) {
        data.rows = row::parse_rows(section);
    }
    if let Some(section) = sections.get(SECTION_TIER) {
        data.tiers = tier::parse_tiers(section);
    }
    if let Some(section) = sections.get(SECTION_SLOT) {
        data.slots = slot::parse_slots(section);
    }
    if let Some(section) = sections.get(SECTION_LID) {
        data.lids = lid::parse_lids(section);
    }

    debug!(
        "Parsed {} bay sections, {} row records, {} tier records, {} slot records, {} lid records",
        data.bay_levels.len(),
        data.rows.len(),
        data.tiers.len(),
        data.slots.len(),
        data.lids.len()
    );

    data
}
