//! Row merge pass
//!
//! Folds flat STACK records into the per-row tables of their bay sections.
//! Each value simply lands on the row it names; when a row appears in
//! several records, the tier span widens to cover all of them and later
//! scalar values win.

use crate::app::models::{BayLevelData, CgOverride, IsoTier, RowInfo, RowRecord};
use crate::app::services::record_index::BayLevelIndex;

fn min_tier(current: Option<IsoTier>, candidate: Option<IsoTier>) -> Option<IsoTier> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_tier(current: Option<IsoTier>, candidate: Option<IsoTier>) -> Option<IsoTier> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Merge row records into their bay sections.
///
/// Returns the highest ISO bay number over all sections, which callers feed
/// into the size summary. Records addressing a `(bay, level)` pair that was
/// never declared are left behind in the index and ignored.
pub fn merge_row_info(
    bay_levels: &mut [BayLevelData],
    index: &BayLevelIndex<RowRecord>,
) -> u8 {
    let mut iso_bays = 0u8;

    for bay_level in bay_levels.iter_mut() {
        iso_bays = iso_bays.max(bay_level.iso_bay.number());

        for record in index.get(bay_level.iso_bay, bay_level.level) {
            let info = bay_level
                .per_row_info
                .each
                .entry(record.iso_row)
                .or_insert_with(|| RowInfo::new(record.iso_row));

            if let Some(label) = &record.label {
                info.label = Some(label.clone());
            }
            info.top_iso_tier = max_tier(info.top_iso_tier, record.top_iso_tier);
            info.bottom_iso_tier = min_tier(info.bottom_iso_tier, record.bottom_iso_tier);

            if let Some(tcg) = record.tcg {
                info.tcg = CgOverride::Value(tcg);
            }
            if let Some(bottom_base) = record.bottom_base {
                info.bottom_base = CgOverride::Value(bottom_base);
            }
            if let Some(max_height) = record.max_height {
                info.max_height = Some(max_height);
            }

            for (&length, &lcg) in &record.lcg_by_length {
                info.row_info_by_length.entry(length).or_default().lcg = Some(lcg);
            }
        }
    }

    iso_bays
}
