//! SHIP section parser
//!
//! The SHIP section carries vessel-wide attributes on a single data row,
//! most importantly how the raw CG values of the rest of the file are to be
//! interpreted. Absent or unrecognized option fields keep their defaults:
//! ESTIMATED values measured from the aft perpendicular.

use tracing::debug;

use crate::app::models::{
    ForeAft, LcgReference, PortStarboard, ShipProfile, ValuesSource, VcgValuesSource,
};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::ship as cols;

use super::fields::FieldMap;

/// Parse the SHIP section into a ship profile.
pub fn parse_ship(section: &RawSection) -> ShipProfile {
    let mut profile = ShipProfile::default();
    let fields = FieldMap::new(&section.header);

    let Some(record) = section.rows.first() else {
        debug!("SHIP section has no data row, using defaults");
        return profile;
    };
    if section.rows.len() > 1 {
        debug!("SHIP section has {} data rows, using the first", section.rows.len());
    }

    profile.ship_class = fields.string(record, cols::CLASS);
    profile.ship_name = fields.string(record, cols::NAME);
    profile.position_format = fields.string(record, cols::POSITION_FORMAT);

    if let Some(values) = fields.get(record, cols::LCG_IN_USE).and_then(ValuesSource::from_staf) {
        profile.lcg.values = values;
    }
    if let Some(reference) = fields.get(record, cols::LCG_REFERENCE).and_then(LcgReference::from_staf) {
        profile.lcg.reference = reference;
    }
    if let Some(direction) = fields.get(record, cols::LCG_DIRECTION).and_then(ForeAft::from_staf) {
        profile.lcg.positive_direction = direction;
    }

    if let Some(values) = fields.get(record, cols::VCG_IN_USE).and_then(VcgValuesSource::from_staf) {
        profile.vcg.values = values;
    }

    if let Some(values) = fields.get(record, cols::TCG_IN_USE).and_then(ValuesSource::from_staf) {
        profile.tcg.values = values;
    }
    if let Some(direction) = fields
        .get(record, cols::TCG_DIRECTION)
        .and_then(PortStarboard::from_staf)
    {
        profile.tcg.positive_direction = direction;
    }

    profile
}
