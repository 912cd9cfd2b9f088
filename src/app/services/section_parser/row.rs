//! STACK section parser (row definitions)
//!
//! Each data row describes one row of a bay section: its tier span, base
//! height, TCG and per-length LCGs. Values stay exactly as written, in the
//! reference frame declared by the SHIP section; remapping happens later.

use indexmap::IndexMap;
use tracing::warn;

use crate::app::models::{BayLevel, ContainerLength, IsoBay, IsoRow, IsoTier, RowRecord};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::{self, row as cols};

use super::fields::FieldMap;

/// Row LCG columns per container length class.
const LCG_COLUMNS: [(ContainerLength, &str); 5] = [
    (ContainerLength::L20, cols::LCG_20),
    (ContainerLength::L24, cols::LCG_24),
    (ContainerLength::L40, cols::LCG_40),
    (ContainerLength::L45, cols::LCG_45),
    (ContainerLength::L48, cols::LCG_48),
];

/// Parse the STACK section into flat row records, in file order.
pub fn parse_rows(section: &RawSection) -> Vec<RowRecord> {
    let fields = FieldMap::new(&section.header);
    let mut records = Vec::new();

    for record in &section.rows {
        let Some(iso_bay) = fields.get(record, columns::STAF_BAY).and_then(IsoBay::parse) else {
            warn!("STACK row without a valid bay number, skipped");
            continue;
        };
        let Some(level) = fields.get(record, columns::LEVEL).and_then(BayLevel::from_staf) else {
            warn!("STACK row for bay {iso_bay} without a valid level, skipped");
            continue;
        };
        let Some(iso_row) = fields.get(record, cols::ISO_ROW).and_then(IsoRow::parse) else {
            warn!("STACK row for bay {iso_bay} {level} without a valid row number, skipped");
            continue;
        };

        let mut lcg_by_length = IndexMap::new();
        for (length, column) in LCG_COLUMNS {
            if let Some(lcg) = fields.meters(record, column) {
                lcg_by_length.insert(length, lcg);
            }
        }

        records.push(RowRecord {
            iso_bay,
            level,
            iso_row,
            label: fields.string(record, cols::LABEL),
            top_iso_tier: fields.get(record, cols::TOP_TIER).and_then(IsoTier::parse),
            bottom_iso_tier: fields.get(record, cols::BOTTOM_TIER).and_then(IsoTier::parse),
            bottom_base: fields.meters(record, cols::BOTTOM_BASE),
            max_height: fields.meters(record, cols::MAX_HEIGHT),
            tcg: fields.meters(record, cols::TCG),
            lcg_by_length,
        });
    }

    records
}
