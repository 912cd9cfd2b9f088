//! Tests for SHIP section parsing

use super::make_section;
use crate::app::models::{
    ForeAft, LcgReference, PortStarboard, ValuesSource, VcgValuesSource,
};
use crate::app::services::section_parser::ship::parse_ship;

#[test]
fn test_parses_full_ship_row() {
    let section = make_section(
        "SHIP",
        "CLASS\tNAME\tPOSITION FORMAT\tLCG IN USE\tLCG REF PT\tLCG + DIR\tVCG IN USE\tTCG IN USE\tTCG + DIR",
        &["PANAMAX\tMV EXAMPLE\tBAY-STACK-TIER\tY\tMS\tF\tT\tY\tP"],
    );

    let profile = parse_ship(&section);

    assert_eq!(profile.ship_class.as_deref(), Some("PANAMAX"));
    assert_eq!(profile.ship_name.as_deref(), Some("MV EXAMPLE"));
    assert_eq!(profile.position_format.as_deref(), Some("BAY-STACK-TIER"));
    assert_eq!(profile.lcg.values, ValuesSource::Known);
    assert_eq!(profile.lcg.reference, LcgReference::Midships);
    assert_eq!(profile.lcg.positive_direction, ForeAft::Fwd);
    assert_eq!(profile.vcg.values, VcgValuesSource::ByTier);
    assert_eq!(profile.tcg.values, ValuesSource::Known);
    assert_eq!(profile.tcg.positive_direction, PortStarboard::Port);
}

#[test]
fn test_absent_options_keep_defaults() {
    let section = make_section("SHIP", "CLASS\tNAME", &["PANAMAX\t-"]);

    let profile = parse_ship(&section);

    assert_eq!(profile.ship_name, None);
    assert_eq!(profile.lcg.values, ValuesSource::Estimated);
    assert_eq!(profile.lcg.reference, LcgReference::AftPerpendicular);
    assert_eq!(profile.vcg.values, VcgValuesSource::Estimated);
    assert_eq!(profile.tcg.positive_direction, PortStarboard::Starboard);
}

#[test]
fn test_unrecognized_option_codes_keep_defaults() {
    let section = make_section(
        "SHIP",
        "LCG IN USE\tLCG REF PT\tVCG IN USE",
        &["MAYBE\tXX\t7"],
    );

    let profile = parse_ship(&section);

    assert_eq!(profile.lcg.values, ValuesSource::Estimated);
    assert_eq!(profile.lcg.reference, LcgReference::AftPerpendicular);
    assert_eq!(profile.vcg.values, VcgValuesSource::Estimated);
}

#[test]
fn test_empty_ship_section_uses_defaults() {
    let section = make_section("SHIP", "CLASS\tNAME", &[]);
    let profile = parse_ship(&section);
    assert_eq!(profile.ship_class, None);
    assert_eq!(profile.lcg.values, ValuesSource::Estimated);
}

#[test]
fn test_extra_ship_rows_are_ignored() {
    let section = make_section("SHIP", "CLASS", &["FIRST", "SECOND"]);
    let profile = parse_ship(&section);
    assert_eq!(profile.ship_class.as_deref(), Some("FIRST"));
}
