//! Size summary calculation
//!
//! Derives the aggregate extents of the vessel grid from the merged per-row
//! tables: highest bay and row, tier extents above and below deck, and
//! whether the center line row is used.
//!
//! The converter runs this twice. The bootstrap run is what tells the slot
//! merge pass where above-deck tiers start; the final run captures the
//! finished document.

use crate::app::models::{BayLevel, BayLevelData, IsoRow, IsoTier, SizeSummary};

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

fn max_row(current: Option<IsoRow>, candidate: IsoRow) -> Option<IsoRow> {
    match current {
        Some(row) => Some(row.max(candidate)),
        None => Some(candidate),
    }
}

/// Calculate the size summary over all bay sections.
///
/// `iso_bays` is the highest bay number, already known from the row merge
/// pass. A vessel with no rows yields a summary of all-absent extents.
pub fn calculate_summary(iso_bays: u8, bay_levels: &[BayLevelData]) -> SizeSummary {
    let mut summary = SizeSummary {
        iso_bays,
        ..SizeSummary::default()
    };

    for bay_level in bay_levels {
        for (iso_row, info) in &bay_level.per_row_info.each {
            if iso_row.is_center_line() {
                summary.center_line_row = true;
            }
            summary.max_row = max_row(summary.max_row, *iso_row);

            match bay_level.level {
                BayLevel::Above => {
                    summary.min_above_tier = min_tier(summary.min_above_tier, info.bottom_iso_tier);
                    summary.max_above_tier = max_tier(summary.max_above_tier, info.top_iso_tier);
                }
                BayLevel::Below => {
                    summary.min_below_tier = min_tier(summary.min_below_tier, info.bottom_iso_tier);
                    summary.max_below_tier = max_tier(summary.max_below_tier, info.top_iso_tier);
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{BayLevelData, IsoBay, RowInfo};

    fn bay_with_rows(bay: u8, level: BayLevel, rows: &[(u8, Option<u8>, Option<u8>)]) -> BayLevelData {
        let mut bay_level = BayLevelData::new(IsoBay::new(bay).unwrap(), level);
        for &(row, bottom, top) in rows {
            let iso_row = IsoRow::new(row).unwrap();
            let mut info = RowInfo::new(iso_row);
            info.bottom_iso_tier = bottom.and_then(IsoTier::new);
            info.top_iso_tier = top.and_then(IsoTier::new);
            bay_level.per_row_info.each.insert(iso_row, info);
        }
        bay_level
    }

    #[test]
    fn test_empty_vessel_has_absent_extents() {
        let summary = calculate_summary(0, &[]);
        assert_eq!(summary, SizeSummary::default());
        assert!(summary.min_above_tier.is_none());
        assert!(!summary.center_line_row);
    }

    #[test]
    fn test_extents_split_by_level() {
        let bays = vec![
            bay_with_rows(1, BayLevel::Above, &[(2, Some(80), Some(86)), (4, Some(82), Some(84))]),
            bay_with_rows(1, BayLevel::Below, &[(2, Some(2), Some(8))]),
            bay_with_rows(3, BayLevel::Above, &[(6, Some(78), Some(90))]),
        ];

        let summary = calculate_summary(3, &bays);

        assert_eq!(summary.iso_bays, 3);
        assert_eq!(summary.max_row, IsoRow::new(6));
        assert_eq!(summary.min_above_tier, IsoTier::new(78));
        assert_eq!(summary.max_above_tier, IsoTier::new(90));
        assert_eq!(summary.min_below_tier, IsoTier::new(2));
        assert_eq!(summary.max_below_tier, IsoTier::new(8));
        assert!(!summary.center_line_row);
    }

    #[test]
    fn test_center_line_row_detected() {
        let bays = vec![bay_with_rows(1, BayLevel::Below, &[(0, Some(2), Some(8))])];
        let summary = calculate_summary(1, &bays);
        assert!(summary.center_line_row);
        assert_eq!(summary.max_row, IsoRow::new(0));
    }

    #[test]
    fn test_rows_without_tier_spans_leave_extents_absent() {
        let bays = vec![bay_with_rows(1, BayLevel::Above, &[(2, None, None)])];
        let summary = calculate_summary(1, &bays);
        assert_eq!(summary.max_row, IsoRow::new(2));
        assert!(summary.min_above_tier.is_none());
        assert!(summary.max_above_tier.is_none());
    }

    #[test]
    fn test_recomputation_is_stable() {
        let bays = vec![bay_with_rows(1, BayLevel::Above, &[(2, Some(80), Some(86))])];
        let first = calculate_summary(1, &bays);
        let second = calculate_summary(1, &bays);
        assert_eq!(first, second);
    }
}
