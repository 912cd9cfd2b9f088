//! Bay/level record index
//!
//! Row, tier and slot records all address a bay section by the same
//! `(bay, level)` pair. Building an index once turns the repeated "records
//! for this section" lookups of the hierarchy passes into O(1) map reads
//! instead of rescans of the flat record list.

use std::collections::HashMap;

use crate::app::models::{BayLevel, IsoBay, RowRecord, SlotRecord, TierRecord};

/// A record that belongs to one bay section.
pub trait BayLevelKeyed {
    fn iso_bay(&self) -> IsoBay;
    fn level(&self) -> BayLevel;
}

impl BayLevelKeyed for RowRecord {
    fn iso_bay(&self) -> IsoBay {
        self.iso_bay
    }

    fn level(&self) -> BayLevel {
        self.level
    }
}

impl BayLevelKeyed for TierRecord {
    fn iso_bay(&self) -> IsoBay {
        self.iso_bay
    }

    fn level(&self) -> BayLevel {
        self.level
    }
}

impl BayLevelKeyed for SlotRecord {
    fn iso_bay(&self) -> IsoBay {
        self.iso_bay
    }

    fn level(&self) -> BayLevel {
        self.level
    }
}

/// Records grouped by `(bay, level)`, preserving file order within a group.
///
/// Lookups for sections with no records return an empty slice; absence is
/// normal here, never an error.
#[derive(Debug)]
pub struct BayLevelIndex<R> {
    groups: HashMap<(IsoBay, BayLevel), Vec<R>>,
}

impl<R: BayLevelKeyed> BayLevelIndex<R> {
    /// Group `records` by their bay section in one pass.
    pub fn build(records: Vec<R>) -> Self {
        let mut groups: HashMap<(IsoBay, BayLevel), Vec<R>> = HashMap::new();
        for record in records {
            groups
                .entry((record.iso_bay(), record.level()))
                .or_default()
                .push(record);
        }
        BayLevelIndex { groups }
    }

    /// Records for one bay section, in file order.
    pub fn get(&self, iso_bay: IsoBay, level: BayLevel) -> &[R] {
        self.groups
            .get(&(iso_bay, level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct bay sections with records.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::IsoTier;

    fn tier_record(bay: u8, level: BayLevel, tier: u8, vcg: i64) -> TierRecord {
        TierRecord {
            iso_bay: IsoBay::new(bay).unwrap(),
            level,
            iso_tier: IsoTier::new(tier).unwrap(),
            label: None,
            vcg: Some(vcg),
        }
    }

    #[test]
    fn test_groups_by_bay_and_level() {
        let records = vec![
            tier_record(1, BayLevel::Above, 80, 20_000),
            tier_record(1, BayLevel::Below, 2, 2500),
            tier_record(1, BayLevel::Above, 82, 22_590),
            tier_record(3, BayLevel::Above, 80, 20_000),
        ];

        let index = BayLevelIndex::build(records);
        assert_eq!(index.len(), 3);

        let bay1_above = index.get(IsoBay::new(1).unwrap(), BayLevel::Above);
        assert_eq!(bay1_above.len(), 2);
        assert_eq!(bay1_above[0].iso_tier, IsoTier::new(80).unwrap());
        assert_eq!(bay1_above[1].iso_tier, IsoTier::new(82).unwrap());

        assert_eq!(index.get(IsoBay::new(1).unwrap(), BayLevel::Below).len(), 1);
    }

    #[test]
    fn test_missing_section_yields_empty_slice() {
        let index = BayLevelIndex::build(vec![tier_record(1, BayLevel::Above, 80, 0)]);
        assert!(index.get(IsoBay::new(7).unwrap(), BayLevel::Above).is_empty());
        assert!(index.get(IsoBay::new(1).unwrap(), BayLevel::Below).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let index: BayLevelIndex<TierRecord> = BayLevelIndex::build(Vec::new());
        assert!(index.is_empty());
    }
}
