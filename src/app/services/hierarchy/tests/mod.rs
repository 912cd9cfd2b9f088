//! Shared builders for hierarchy tests

use indexmap::IndexMap;

use crate::app::models::{
    BayLevel, BayLevelData, ContainerLength, IsoBay, IsoRow, IsoTier, RowRecord, SlotRecord,
    TierRecord,
};


pub fn bay_level(bay: u8, level: BayLevel) -> BayLevelData {
    BayLevelData::new(IsoBay::new(bay).unwrap(), level)
}

pub fn row(number: u8) -> IsoRow {
    IsoRow::new(number).unwrap()
}

pub fn tier(number: u8) -> IsoTier {
    IsoTier::new(number).unwrap()
}

pub fn row_record(bay: u8, level: BayLevel, iso_row: u8) -> RowRecord {
    RowRecord {
        iso_bay: IsoBay::new(bay).unwrap(),
        level,
        iso_row: row(iso_row),
        label: None,
        top_iso_tier: None,
        bottom_iso_tier: None,
        bottom_base: None,
        max_height: None,
        tcg: None,
        lcg_by_length: IndexMap::new(),
    }
}

pub fn tier_record(bay: u8, level: BayLevel, iso_tier: u8, vcg: Option<i64>) -> TierRecord {
    TierRecord {
        iso_bay: IsoBay::new(bay).unwrap(),
        level,
        iso_tier: tier(iso_tier),
        label: None,
        vcg,
    }
}

pub fn slot_record(
    bay: u8,
    level: BayLevel,
    iso_row: u8,
    tokens: &[u8],
    sizes: &[ContainerLength],
) -> SlotRecord {
    SlotRecord {
        iso_bay: IsoBay::new(bay).unwrap(),
        level,
        iso_row: row(iso_row),
        tier_tokens: tokens.to_vec(),
        sizes: sizes.to_vec(),
        reefer: false,
        restricted: false,
    }
}
