//! SLOT section parser
//!
//! Each data row declares the capabilities of a span of slots: one row of a
//! bay section plus a list of tier tokens. Above deck the tokens are deck
//! ordinals counted from 1 and are rebased onto ISO tiers later, once the
//! lowest above-deck tier of the vessel is known; below deck they are
//! absolute ISO tiers already.

use tracing::{debug, warn};

use crate::app::models::{BayLevel, ContainerLength, IsoBay, IsoRow, SlotRecord};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::{self, slot as cols};

use super::fields::FieldMap;

/// Slot acceptance columns per container length class.
const ACCEPT_COLUMNS: [(ContainerLength, &str); 5] = [
    (ContainerLength::L20, cols::ACCEPTS_20),
    (ContainerLength::L24, cols::ACCEPTS_24),
    (ContainerLength::L40, cols::ACCEPTS_40),
    (ContainerLength::L45, cols::ACCEPTS_45),
    (ContainerLength::L48, cols::ACCEPTS_48),
];

fn parse_tier_tokens(field: &str) -> Vec<u8> {
    field
        .split_whitespace()
        .filter_map(|token| match token.parse::<u8>() {
            Ok(tier) => Some(tier),
            Err(_) => {
                debug!("Unparseable tier token '{token}' in SLOT row, skipped");
                None
            }
        })
        .collect()
}

/// Parse the SLOT section into flat slot records, in file order.
pub fn parse_slots(section: &RawSection) -> Vec<SlotRecord> {
    let fields = FieldMap::new(&section.header);
    let mut records = Vec::new();

    for record in &section.rows {
        let Some(iso_bay) = fields.get(record, columns::STAF_BAY).and_then(IsoBay::parse) else {
            warn!("SLOT row without a valid bay number, skipped");
            continue;
        };
        let Some(level) = fields.get(record, columns::LEVEL).and_then(BayLevel::from_staf) else {
            warn!("SLOT row for bay {iso_bay} without a valid level, skipped");
            continue;
        };
        let Some(iso_row) = fields.get(record, cols::ISO_ROW).and_then(IsoRow::parse) else {
            warn!("SLOT row for bay {iso_bay} {level} without a valid row number, skipped");
            continue;
        };

        let tier_tokens = fields
            .get(record, cols::TIERS)
            .map(parse_tier_tokens)
            .unwrap_or_default();

        let sizes = ACCEPT_COLUMNS
            .iter()
            .filter(|(_, column)| fields.flag(record, column) == Some(true))
            .map(|(length, _)| *length)
            .collect();

        records.push(SlotRecord {
            iso_bay,
            level,
            iso_row,
            tier_tokens,
            sizes,
            reefer: fields.flag(record, cols::REEFER).unwrap_or(false),
            restricted: fields.flag(record, cols::RESTRICTED).unwrap_or(false),
        });
    }

    records
}
