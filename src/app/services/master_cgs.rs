//! Master CG consolidation
//!
//! Row CG values repeat heavily across a vessel: the same row number tends
//! to sit at the same TCG in every bay, and rows sharing a bottom tier tend
//! to share a bottom base. Consolidation hoists the most frequent value of
//! each group into the vessel-wide `masterCGs` table and blanks the per-row
//! values equal to it, shrinking the document without losing information.
//!
//! Grouping keys: TCGs by row number, separately above and below deck;
//! bottom bases by the bottom tier of their row. The master of a group is
//! its strictly most frequent value, ties resolving to the value seen
//! first in document order, so consolidation is deterministic.
//!
//! [`calculate_master_cgs`] works on effective values (an explicit override,
//! or the current master where a row already defers), which makes a repeat
//! run over already-compacted data a no-op.

use indexmap::IndexMap;
use std::hash::Hash;
use tracing::debug;

use crate::app::models::{
    BayLevel, BayLevelData, CgOverride, IsoRow, IsoTier, MasterCgs, Millimeters,
};

#[derive(Debug, Default)]
struct ModeAccumulator {
    counts: IndexMap<Millimeters, usize>,
}

impl ModeAccumulator {
    fn record(&mut self, value: Millimeters) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Most frequent value; ties resolve to the earliest recorded.
    fn mode(&self) -> Option<Millimeters> {
        let mut best: Option<(Millimeters, usize)> = None;
        for (&value, &count) in &self.counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

fn modes<K: Hash + Eq>(groups: IndexMap<K, ModeAccumulator>) -> IndexMap<K, Millimeters> {
    groups
        .into_iter()
        .filter_map(|(key, accumulator)| accumulator.mode().map(|mode| (key, mode)))
        .collect()
}

/// Compute the master CG table from the effective row values.
///
/// `current` is the master table rows already defer to; pass the default
/// empty table on the first run. Rows with no effective value for an axis
/// contribute nothing to its group.
pub fn calculate_master_cgs(bay_levels: &[BayLevelData], current: &MasterCgs) -> MasterCgs {
    let mut above: IndexMap<IsoRow, ModeAccumulator> = IndexMap::new();
    let mut below: IndexMap<IsoRow, ModeAccumulator> = IndexMap::new();
    let mut bases: IndexMap<IsoTier, ModeAccumulator> = IndexMap::new();

    for bay_level in bay_levels {
        for (&iso_row, info) in &bay_level.per_row_info.each {
            let effective_tcg = info
                .tcg
                .value()
                .or_else(|| current.tcg_for(bay_level.level, iso_row));
            if let Some(tcg) = effective_tcg {
                let group = match bay_level.level {
                    BayLevel::Above => &mut above,
                    BayLevel::Below => &mut below,
                };
                group.entry(iso_row).or_default().record(tcg);
            }

            // A bottom base can only be grouped when its row reports a
            // bottom tier
            if let Some(bottom) = info.bottom_iso_tier {
                let effective_base = info
                    .bottom_base
                    .value()
                    .or_else(|| current.bottom_base_for(bottom));
                if let Some(base) = effective_base {
                    bases.entry(bottom).or_default().record(base);
                }
            }
        }
    }

    MasterCgs {
        above_tcgs: modes(above),
        below_tcgs: modes(below),
        bottom_bases: modes(bases),
    }
}

/// Blank every per-row CG value equal to its master, leaving only true
/// overrides in the rows.
pub fn compact_repeated_cgs(master: &MasterCgs, bay_levels: &mut [BayLevelData]) {
    let mut compacted = 0usize;

    for bay_level in bay_levels.iter_mut() {
        let level = bay_level.level;
        for (&iso_row, info) in bay_level.per_row_info.each.iter_mut() {
            if let Some(tcg) = info.tcg.value() {
                if master.tcg_for(level, iso_row) == Some(tcg) {
                    info.tcg = CgOverride::UsesMaster;
                    compacted += 1;
                }
            }

            if let (Some(bottom), Some(base)) = (info.bottom_iso_tier, info.bottom_base.value()) {
                if master.bottom_base_for(bottom) == Some(base) {
                    info.bottom_base = CgOverride::UsesMaster;
                    compacted += 1;
                }
            }
        }
    }

    debug!("Compacted {compacted} row CG values into masters");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{BayLevelData, IsoBay, RowInfo};

    fn row(number: u8) -> IsoRow {
        IsoRow::new(number).unwrap()
    }

    fn tier(number: u8) -> IsoTier {
        IsoTier::new(number).unwrap()
    }

    fn bay_with_row_tcg(bay: u8, level: BayLevel, iso_row: u8, tcg: i64) -> BayLevelData {
        let mut bay_level = BayLevelData::new(IsoBay::new(bay).unwrap(), level);
        let mut info = RowInfo::new(row(iso_row));
        info.tcg = CgOverride::Value(tcg);
        bay_level.per_row_info.each.insert(row(iso_row), info);
        bay_level
    }

    fn bay_with_row_base(bay: u8, level: BayLevel, iso_row: u8, bottom: u8, base: i64) -> BayLevelData {
        let mut bay_level = BayLevelData::new(IsoBay::new(bay).unwrap(), level);
        let mut info = RowInfo::new(row(iso_row));
        info.bottom_iso_tier = Some(tier(bottom));
        info.bottom_base = CgOverride::Value(base);
        bay_level.per_row_info.each.insert(row(iso_row), info);
        bay_level
    }

    #[test]
    fn test_mode_prefers_highest_count() {
        let bays = vec![
            bay_with_row_tcg(1, BayLevel::Above, 2, 100),
            bay_with_row_tcg(3, BayLevel::Above, 2, 100),
            bay_with_row_tcg(5, BayLevel::Above, 2, 105),
        ];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert_eq!(master.above_tcgs[&row(2)], 100);
    }

    #[test]
    fn test_mode_tie_resolves_to_first_seen() {
        let bays = vec![
            bay_with_row_tcg(1, BayLevel::Above, 2, 5),
            bay_with_row_tcg(3, BayLevel::Above, 2, 7),
            bay_with_row_tcg(5, BayLevel::Above, 2, 5),
            bay_with_row_tcg(7, BayLevel::Above, 2, 7),
        ];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert_eq!(master.above_tcgs[&row(2)], 5);
    }

    #[test]
    fn test_tcgs_group_separately_by_level() {
        let bays = vec![
            bay_with_row_tcg(1, BayLevel::Above, 2, 2438),
            bay_with_row_tcg(1, BayLevel::Below, 2, 2500),
        ];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert_eq!(master.above_tcgs[&row(2)], 2438);
        assert_eq!(master.below_tcgs[&row(2)], 2500);
    }

    #[test]
    fn test_bottom_bases_group_by_bottom_tier() {
        let bays = vec![
            bay_with_row_base(1, BayLevel::Above, 0, 80, 18_834),
            bay_with_row_base(3, BayLevel::Above, 2, 80, 18_834),
            bay_with_row_base(1, BayLevel::Below, 0, 2, 1334),
        ];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert_eq!(master.bottom_bases[&tier(80)], 18_834);
        assert_eq!(master.bottom_bases[&tier(2)], 1334);
    }

    #[test]
    fn test_base_without_bottom_tier_is_not_grouped() {
        let mut bay_level = BayLevelData::new(IsoBay::new(1).unwrap(), BayLevel::Above);
        let mut info = RowInfo::new(row(2));
        info.bottom_base = CgOverride::Value(18_834);
        bay_level.per_row_info.each.insert(row(2), info);
        let mut bays = vec![bay_level];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert!(master.bottom_bases.is_empty());

        // And compaction leaves the ungroupable override in place
        compact_repeated_cgs(&master, &mut bays);
        assert_eq!(
            bays[0].per_row_info.each[&row(2)].bottom_base,
            CgOverride::Value(18_834)
        );
    }

    #[test]
    fn test_compaction_blanks_values_equal_to_master() {
        let mut bays = vec![
            bay_with_row_tcg(1, BayLevel::Above, 2, 100),
            bay_with_row_tcg(3, BayLevel::Above, 2, 100),
            bay_with_row_tcg(5, BayLevel::Above, 2, 105),
        ];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        compact_repeated_cgs(&master, &mut bays);

        assert!(bays[0].per_row_info.each[&row(2)].tcg.is_master());
        assert!(bays[1].per_row_info.each[&row(2)].tcg.is_master());
        assert_eq!(
            bays[2].per_row_info.each[&row(2)].tcg,
            CgOverride::Value(105)
        );
    }

    #[test]
    fn test_consolidation_is_idempotent_on_compacted_data() {
        let mut bays = vec![
            bay_with_row_tcg(1, BayLevel::Above, 2, 100),
            bay_with_row_tcg(3, BayLevel::Above, 2, 100),
            bay_with_row_tcg(5, BayLevel::Above, 2, 105),
            bay_with_row_base(7, BayLevel::Below, 0, 2, 1334),
        ];

        let first = calculate_master_cgs(&bays, &MasterCgs::default());
        compact_repeated_cgs(&first, &mut bays);
        let snapshot = bays.clone();

        // Recomputing over effective values reproduces the same masters,
        // and compacting again changes nothing
        let second = calculate_master_cgs(&bays, &first);
        assert_eq!(second, first);
        compact_repeated_cgs(&second, &mut bays);
        assert_eq!(bays, snapshot);
    }

    #[test]
    fn test_rows_without_values_produce_no_masters() {
        let mut bay_level = BayLevelData::new(IsoBay::new(1).unwrap(), BayLevel::Above);
        bay_level
            .per_row_info
            .each
            .insert(row(2), RowInfo::new(row(2)));
        let bays = vec![bay_level];

        let master = calculate_master_cgs(&bays, &MasterCgs::default());
        assert!(master.is_empty());
    }
}
