//! Final document cleanup
//!
//! The hierarchy passes leave behind aggregates that ended up carrying no
//! data: length entries with every field absent, row LCG tables whose values
//! were never filled in, bulkhead records with nothing set. This pass prunes
//! them so the serialized document contains only sections that say something.

use tracing::debug;

use crate::app::models::{BayLevelData, VesselSpec};

/// Prune empty aggregates from every bay section.
pub fn clean_bay_levels(bay_levels: &mut [BayLevelData]) {
    for bay_level in bay_levels.iter_mut() {
        // Tier tables were consumed during CG remapping; nothing may leak
        // into the document
        bay_level.per_tier_info = None;

        bay_level
            .info_by_cont_length
            .retain(|_, info| !info.is_empty());

        for info in bay_level.per_row_info.each.values_mut() {
            info.row_info_by_length.retain(|_, entry| entry.lcg.is_some());
        }

        if bay_level
            .common_row_info
            .as_ref()
            .is_some_and(|common| common.max_height.is_none())
        {
            bay_level.common_row_info = None;
        }

        if bay_level
            .per_stack_info
            .as_ref()
            .is_some_and(|stacks| stacks.is_empty())
        {
            bay_level.per_stack_info = None;
        }

        if bay_level
            .bulkhead
            .as_ref()
            .is_some_and(|bulkhead| bulkhead.is_empty())
        {
            bay_level.bulkhead = None;
        }
    }
}

/// Prune empty aggregates from the whole document.
pub fn clean_document(document: &mut VesselSpec) {
    clean_bay_levels(&mut document.bays_data);
    debug!("Cleaned document with {} bay sections", document.bays_data.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{
        BayLevel, Bulkhead, CommonRowInfo, ContLengthInfo, ContainerLength, IsoBay, IsoRow,
        PerStackInfo, RowInfo, RowInfoByLength,
    };

    fn bay_level() -> BayLevelData {
        BayLevelData::new(IsoBay::new(1).unwrap(), BayLevel::Above)
    }

    #[test]
    fn test_empty_length_entries_are_pruned() {
        let mut bay = bay_level();
        bay.info_by_cont_length
            .insert(ContainerLength::L20, ContLengthInfo::default());
        bay.info_by_cont_length.insert(
            ContainerLength::L40,
            ContLengthInfo {
                lcg: Some(160_000),
                stack_weight: None,
            },
        );
        let mut bays = vec![bay];

        clean_bay_levels(&mut bays);

        assert_eq!(bays[0].info_by_cont_length.len(), 1);
        assert!(bays[0].info_by_cont_length.contains_key(&ContainerLength::L40));
    }

    #[test]
    fn test_valueless_row_lcg_entries_are_pruned() {
        let iso_row = IsoRow::new(2).unwrap();
        let mut info = RowInfo::new(iso_row);
        info.row_info_by_length
            .insert(ContainerLength::L20, RowInfoByLength { lcg: Some(151_000) });
        info.row_info_by_length
            .insert(ContainerLength::L40, RowInfoByLength { lcg: None });

        let mut bay = bay_level();
        bay.per_row_info.each.insert(iso_row, info);
        let mut bays = vec![bay];

        clean_bay_levels(&mut bays);

        let cleaned = &bays[0].per_row_info.each[&iso_row].row_info_by_length;
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.contains_key(&ContainerLength::L20));
    }

    #[test]
    fn test_empty_optional_aggregates_become_absent() {
        let mut bay = bay_level();
        bay.common_row_info = Some(CommonRowInfo { max_height: None });
        bay.per_stack_info = Some(PerStackInfo::default());
        bay.bulkhead = Some(Bulkhead {
            fore: Some(false),
            fore_lcg: None,
            aft_lcg: None,
        });
        let mut bays = vec![bay];

        clean_bay_levels(&mut bays);

        assert!(bays[0].common_row_info.is_none());
        assert!(bays[0].per_stack_info.is_none());
        assert!(bays[0].bulkhead.is_none());
    }

    #[test]
    fn test_populated_aggregates_survive() {
        let mut bay = bay_level();
        bay.common_row_info = Some(CommonRowInfo {
            max_height: Some(12_000),
        });
        bay.bulkhead = Some(Bulkhead {
            fore: Some(true),
            fore_lcg: Some(155_000),
            aft_lcg: None,
        });
        let mut bays = vec![bay];

        clean_bay_levels(&mut bays);

        assert!(bays[0].common_row_info.is_some());
        assert!(bays[0].bulkhead.is_some());
    }
}
