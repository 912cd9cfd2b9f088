//! Constants used throughout the STAF converter
//!
//! Centralizes STAF section and column names, unit conversion factors,
//! and the fixed identifiers of the produced OpenVesselSpec document.

use crate::app::models::Millimeters;

// ============================================================================
// Output document identity
// ============================================================================

/// Schema tag written into every produced document
pub const OVS_SCHEMA: &str = "OpenVesselSpec";

/// Schema version written into every produced document
pub const OVS_VERSION: &str = "1.0.0";

// ============================================================================
// STAF file structure
// ============================================================================

/// Prefix of a section start line (`*SHIP`, `*SECTION`, ...)
pub const SECTION_PREFIX: char = '*';

/// Prefix of the column header line inside a section
pub const HEADER_PREFIX: &str = "**";

/// Field separator on header and data lines
pub const FIELD_SEPARATOR: char = '\t';

/// Marker used by STAF writers for an absent value
pub const ABSENT_FIELD: &str = "-";

/// Section holding vessel-wide attributes
pub const SECTION_SHIP: &str = "SHIP";

/// Section declaring bay/level containers and their attributes
pub const SECTION_BAY: &str = "SECTION";

/// Section holding per-row (stack) definitions
pub const SECTION_ROW: &str = "STACK";

/// Section holding per-tier definitions
pub const SECTION_TIER: &str = "TIER";

/// Section holding per-slot capability definitions
pub const SECTION_SLOT: &str = "SLOT";

/// Section holding hatch lid definitions
pub const SECTION_LID: &str = "LID";

/// Sections that must all be present for the input to count as STAF
pub const MANDATORY_SECTIONS: &[&str] = &[SECTION_SHIP, SECTION_BAY, SECTION_ROW, SECTION_TIER];

// ============================================================================
// Units
// ============================================================================

/// Millimeters per meter, for converting STAF coordinate fields
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

/// Grams per metric ton, for converting STAF weight fields
pub const GRAMS_PER_TON: f64 = 1_000_000.0;

/// One millimeter expressed in feet
pub const ONE_MILLIMETER_IN_FEET: f64 = 0.003280839895;

/// Nominal container height in feet used when deriving a row bottom base
/// from the VCG of its lowest tier
pub const BASE_ADJUST_FEET: f64 = 8.5;

/// Default fraction of the nominal container height assumed between a
/// tier's VCG reference and the base of the row
pub const DEFAULT_VCG_HEIGHT_FACTOR: f64 = 0.45;

// ============================================================================
// STAF column names
// ============================================================================

/// Column header names, grouped by the section they belong to.
pub mod columns {
    /// Bay number column shared by all bay-scoped sections
    pub const STAF_BAY: &str = "STAF BAY";

    /// Level column (`A` above deck, `B` below deck)
    pub const LEVEL: &str = "LEVEL";

    pub mod ship {
        pub const CLASS: &str = "CLASS";
        pub const NAME: &str = "NAME";
        pub const POSITION_FORMAT: &str = "POSITION FORMAT";
        pub const LCG_IN_USE: &str = "LCG IN USE";
        pub const LCG_REFERENCE: &str = "LCG REF PT";
        pub const LCG_DIRECTION: &str = "LCG + DIR";
        pub const VCG_IN_USE: &str = "VCG IN USE";
        pub const TCG_IN_USE: &str = "TCG IN USE";
        pub const TCG_DIRECTION: &str = "TCG + DIR";
    }

    pub mod bay {
        pub const NAME_20: &str = "20 NAME";
        pub const NAME_40: &str = "40 NAME";
        pub const LCG_20: &str = "LCG 20";
        pub const LCG_24: &str = "LCG 24";
        pub const LCG_40: &str = "LCG 40";
        pub const LCG_45: &str = "LCG 45";
        pub const LCG_48: &str = "LCG 48";
        pub const STACK_WT_20: &str = "STACK WT 20";
        pub const STACK_WT_24: &str = "STACK WT 24";
        pub const STACK_WT_40: &str = "STACK WT 40";
        pub const STACK_WT_45: &str = "STACK WT 45";
        pub const STACK_WT_48: &str = "STACK WT 48";
        pub const MAX_HEIGHT: &str = "MAX HEIGHT";
        pub const PAIRED_BAY: &str = "PAIRED BAY";
        pub const REEFER_PLUGS: &str = "REEFER PLUGS";
        pub const DOORS: &str = "DOORS";
        pub const ATHWARTSHIPS: &str = "ATHWARTSHIPS";
        pub const BULKHEAD: &str = "BULKHEAD";
        pub const BULKHEAD_LCG: &str = "BULKHEAD LCG";
        pub const BULKHEAD_AFT_LCG: &str = "BULKHEAD AFT LCG";
    }

    pub mod row {
        pub const ISO_ROW: &str = "ISO STACK";
        pub const LABEL: &str = "CUSTOM STACK";
        pub const TOP_TIER: &str = "TOP TIER";
        pub const BOTTOM_TIER: &str = "BOTTOM TIER";
        pub const BOTTOM_BASE: &str = "BOTTOM BASE";
        pub const MAX_HEIGHT: &str = "MAX HT";
        pub const TCG: &str = "TCG";
        pub const LCG_20: &str = "LCG 20";
        pub const LCG_24: &str = "LCG 24";
        pub const LCG_40: &str = "LCG 40";
        pub const LCG_45: &str = "LCG 45";
        pub const LCG_48: &str = "LCG 48";
    }

    pub mod tier {
        pub const ISO_TIER: &str = "ISO TIER";
        pub const LABEL: &str = "CUSTOM TIER";
        pub const VCG: &str = "VCG";
    }

    pub mod slot {
        pub const ISO_ROW: &str = "ISO STACK";
        pub const TIERS: &str = "TIERS";
        pub const ACCEPTS_20: &str = "ACC 20";
        pub const ACCEPTS_24: &str = "ACC 24";
        pub const ACCEPTS_40: &str = "ACC 40";
        pub const ACCEPTS_45: &str = "ACC 45";
        pub const ACCEPTS_48: &str = "ACC 48";
        pub const REEFER: &str = "REEFER";
        pub const RESTRICTED: &str = "RESTRICTED";
    }

    pub mod lid {
        pub const LID_ID: &str = "LID ID";
        pub const PORT_ISO_ROW: &str = "PORT ISO STACK";
        pub const STARBOARD_ISO_ROW: &str = "STBD ISO STACK";
        pub const JOIN_LID_FWD: &str = "JOIN LID FWD";
        pub const JOIN_LID_AFT: &str = "JOIN LID AFT";
        pub const OVERLAP_PORT: &str = "OVERLAP PORT";
        pub const OVERLAP_STARBOARD: &str = "OVERLAP STBD";
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Distance in millimeters between a bottom tier's VCG reference and the
/// base of its row, for the given height factor.
pub fn base_adjust(height_factor: f64) -> Millimeters {
    ((BASE_ADJUST_FEET / ONE_MILLIMETER_IN_FEET) * height_factor).round() as Millimeters
}
