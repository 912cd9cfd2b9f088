//! TIER section parser
//!
//! Each data row gives the VCG and display label of one tier within a bay
//! section. Tier records only feed the transient per-tier table; the CG
//! remapping phase folds them into per-row bottom bases.

use tracing::warn;

use crate::app::models::{BayLevel, IsoBay, IsoTier, TierRecord};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::{self, tier as cols};

use super::fields::FieldMap;

/// Parse the TIER section into flat tier records, in file order.
pub fn parse_tiers(section: &RawSection) -> Vec<TierRecord> {
    let fields = FieldMap::new(&section.header);
    let mut records = Vec::new();

    for record in &section.rows {
        let Some(iso_bay) = fields.get(record, columns::STAF_BAY).and_then(IsoBay::parse) else {
            warn!("TIER row without a valid bay number, skipped");
            continue;
        };
        let Some(level) = fields.get(record, columns::LEVEL).and_then(BayLevel::from_staf) else {
            warn!("TIER row for bay {iso_bay} without a valid level, skipped");
            continue;
        };
        let Some(iso_tier) = fields.get(record, cols::ISO_TIER).and_then(IsoTier::parse) else {
            warn!("TIER row for bay {iso_bay} {level} without a valid tier number, skipped");
            continue;
        };

        records.push(TierRecord {
            iso_bay,
            level,
            iso_tier,
            label: fields.string(record, cols::LABEL),
            vcg: fields.meters(record, cols::VCG),
        });
    }

    records
}
