//! Tests for SLOT and LID section parsing

use super::make_section;
use crate::app::models::{BayLevel, ContainerLength, IsoRow};
use crate::app::services::section_parser::lid::parse_lids;
use crate::app::services::section_parser::slot::parse_slots;

#[test]
fn test_parses_slot_record() {
    let section = make_section(
        "SLOT",
        "STAF BAY\tLEVEL\tISO STACK\tTIERS\tACC 20\tACC 40\tACC 45\tREEFER\tRESTRICTED",
        &["01\tA\t02\t1 2 3\tY\tY\tN\tY\t-"],
    );

    let records = parse_slots(&section);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.iso_row, IsoRow::new(2).unwrap());
    assert_eq!(record.tier_tokens, vec![1, 2, 3]);
    assert_eq!(
        record.sizes,
        vec![ContainerLength::L20, ContainerLength::L40]
    );
    assert!(record.reefer);
    assert!(!record.restricted);
}

#[test]
fn test_below_deck_slot_uses_absolute_tiers() {
    let section = make_section(
        "SLOT",
        "STAF BAY\tLEVEL\tISO STACK\tTIERS\tACC 20",
        &["01\tB\t00\t02 04 06\tY"],
    );

    let records = parse_slots(&section);
    assert_eq!(records[0].level, BayLevel::Below);
    assert_eq!(records[0].tier_tokens, vec![2, 4, 6]);
}

#[test]
fn test_bad_tier_tokens_are_dropped() {
    let section = make_section(
        "SLOT",
        "STAF BAY\tLEVEL\tISO STACK\tTIERS\tACC 20",
        &["01\tA\t02\t1 x 3\tY", "01\tA\t04\t-\tY"],
    );

    let records = parse_slots(&section);
    assert_eq!(records[0].tier_tokens, vec![1, 3]);
    assert!(records[1].tier_tokens.is_empty());
}

#[test]
fn test_parses_lid_record() {
    let section = make_section(
        "LID",
        "LID ID\tSTAF BAY\tLEVEL\tPORT ISO STACK\tSTBD ISO STACK\tJOIN LID FWD\tJOIN LID AFT\tOVERLAP PORT\tOVERLAP STBD",
        &["L01A\t01\tA\t08\t02\t-\tL03A\tY\t-"],
    );

    let records = parse_lids(&section);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.label, "L01A");
    assert_eq!(record.port_iso_row, IsoRow::new(8));
    assert_eq!(record.starboard_iso_row, IsoRow::new(2));
    assert_eq!(record.join_lid_fwd_label, None);
    assert_eq!(record.join_lid_aft_label.as_deref(), Some("L03A"));
    assert!(record.overlap_port);
    assert!(!record.overlap_starboard);
}

#[test]
fn test_lid_rows_without_id_or_bay_are_skipped() {
    let section = make_section(
        "LID",
        "LID ID\tSTAF BAY\tLEVEL",
        &["-\t01\tA", "L02\t-\tA", "L03\t01\t-"],
    );

    assert!(parse_lids(&section).is_empty());
}
