//! LID section parser
//!
//! Hatch lid definitions pass through the conversion untouched by the CG
//! pipeline; they are only collected here and re-shaped for the output
//! document at the end.

use tracing::warn;

use crate::app::models::{BayLevel, IsoBay, IsoRow, LidRecord};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::{self, lid as cols};

use super::fields::FieldMap;

/// Parse the LID section into flat lid records, in file order.
pub fn parse_lids(section: &RawSection) -> Vec<LidRecord> {
    let fields = FieldMap::new(&section.header);
    let mut records = Vec::new();

    for record in &section.rows {
        let Some(label) = fields.string(record, cols::LID_ID) else {
            warn!("LID row without a lid id, skipped");
            continue;
        };
        let Some(iso_bay) = fields.get(record, columns::STAF_BAY).and_then(IsoBay::parse) else {
            warn!("LID row {label} without a valid bay number, skipped");
            continue;
        };
        let Some(level) = fields.get(record, columns::LEVEL).and_then(BayLevel::from_staf) else {
            warn!("LID row {label} without a valid level, skipped");
            continue;
        };

        records.push(LidRecord {
            label,
            iso_bay,
            level,
            port_iso_row: fields.get(record, cols::PORT_ISO_ROW).and_then(IsoRow::parse),
            starboard_iso_row: fields.get(record, cols::STARBOARD_ISO_ROW).and_then(IsoRow::parse),
            join_lid_fwd_label: fields.string(record, cols::JOIN_LID_FWD),
            join_lid_aft_label: fields.string(record, cols::JOIN_LID_AFT),
            overlap_port: fields.flag(record, cols::OVERLAP_PORT).unwrap_or(false),
            overlap_starboard: fields.flag(record, cols::OVERLAP_STARBOARD).unwrap_or(false),
        });
    }

    records
}
