//! SECTION section parser (bay declarations)
//!
//! Each data row declares one `(bay, level)` pair and its section-wide
//! attributes. This is the only place bay sections are created; every later
//! pass merges into the containers built here.

use std::collections::HashSet;

use tracing::warn;

use crate::app::models::{
    BayLevel, BayLevelData, Bulkhead, ContLengthInfo, ContainerLength, ForeAft, IsoBay,
    PerStackInfo, StackAttributes,
};
use crate::app::services::section_scanner::RawSection;
use crate::constants::columns::{self, bay as cols};

use super::fields::FieldMap;

/// Bay LCG and stack weight columns per container length class.
const LENGTH_COLUMNS: [(ContainerLength, &str, &str); 5] = [
    (ContainerLength::L20, cols::LCG_20, cols::STACK_WT_20),
    (ContainerLength::L24, cols::LCG_24, cols::STACK_WT_24),
    (ContainerLength::L40, cols::LCG_40, cols::STACK_WT_40),
    (ContainerLength::L45, cols::LCG_45, cols::STACK_WT_45),
    (ContainerLength::L48, cols::LCG_48, cols::STACK_WT_48),
];

/// Parse the SECTION section into empty-but-attributed bay sections, in
/// file order.
///
/// Rows without a valid bay and level are skipped, and a repeated
/// `(bay, level)` pair keeps its first row.
pub fn parse_bays(section: &RawSection) -> Vec<BayLevelData> {
    let fields = FieldMap::new(&section.header);
    let mut seen: HashSet<(IsoBay, BayLevel)> = HashSet::new();
    let mut bay_levels = Vec::new();

    for record in &section.rows {
        let Some(iso_bay) = fields.get(record, columns::STAF_BAY).and_then(IsoBay::parse) else {
            warn!("SECTION row without a valid bay number, skipped");
            continue;
        };
        let Some(level) = fields.get(record, columns::LEVEL).and_then(BayLevel::from_staf) else {
            warn!("SECTION row for bay {iso_bay} without a valid level, skipped");
            continue;
        };
        if !seen.insert((iso_bay, level)) {
            warn!("Duplicate SECTION row for bay {iso_bay} {level}, keeping the first");
            continue;
        }

        let mut bay_level = BayLevelData::new(iso_bay, level);
        bay_level.label_20 = fields.string(record, cols::NAME_20);
        bay_level.label_40 = fields.string(record, cols::NAME_40);

        for (length, lcg_column, weight_column) in LENGTH_COLUMNS {
            let lcg = fields.meters(record, lcg_column);
            let stack_weight = fields.tons(record, weight_column);
            if lcg.is_some() || stack_weight.is_some() {
                bay_level
                    .info_by_cont_length
                    .insert(length, ContLengthInfo { lcg, stack_weight });
            }
        }

        if let Some(max_height) = fields.meters(record, cols::MAX_HEIGHT) {
            bay_level.per_stack_info = Some(PerStackInfo {
                common: StackAttributes {
                    max_height: Some(max_height),
                },
            });
        }

        bay_level.paired_bay = fields.get(record, cols::PAIRED_BAY).and_then(ForeAft::from_staf);
        bay_level.reefer_plugs = fields.get(record, cols::REEFER_PLUGS).and_then(ForeAft::from_staf);
        bay_level.doors = fields.get(record, cols::DOORS).and_then(ForeAft::from_staf);
        bay_level.athwart_ship = fields.flag(record, cols::ATHWARTSHIPS);

        let fore = fields.flag(record, cols::BULKHEAD);
        let fore_lcg = fields.meters(record, cols::BULKHEAD_LCG);
        let aft_lcg = fields.meters(record, cols::BULKHEAD_AFT_LCG);
        if fore.is_some() || fore_lcg.is_some() || aft_lcg.is_some() {
            bay_level.bulkhead = Some(Bulkhead {
                fore,
                fore_lcg,
                aft_lcg,
            });
        }

        bay_levels.push(bay_level);
    }

    bay_levels
}
