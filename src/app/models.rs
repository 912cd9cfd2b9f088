//! Data models for STAF conversion
//!
//! This module contains the core data structures for representing a vessel
//! stowage definition, both in its flat per-section form as read from a STAF
//! file and in the hierarchical OpenVesselSpec form written out as JSON.
//!
//! All coordinates are held internally as integer millimeters and all weights
//! as integer grams, so equality comparisons during master CG consolidation
//! are exact.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::constants::DEFAULT_VCG_HEIGHT_FACTOR;

/// Longitudinal, transversal and vertical coordinates in millimeters.
pub type Millimeters = i64;

/// Weights in grams.
pub type Grams = i64;

fn is_false(value: &bool) -> bool {
    !*value
}

// =============================================================================
// Coordinate identifiers
// =============================================================================

/// ISO bay number, `01` to `99`.
///
/// Displayed and serialized as a zero-padded two-digit string so documents
/// keep the familiar ISO position notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoBay(u8);

impl IsoBay {
    /// Create a bay number, rejecting values outside `1..=99`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=99).contains(&number).then_some(IsoBay(number))
    }

    /// Parse a STAF bay field such as `"01"` or `"1"`.
    pub fn parse(field: &str) -> Option<Self> {
        field.trim().parse::<u8>().ok().and_then(IsoBay::new)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for IsoBay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for IsoBay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// ISO row (stack) number, `00` to `99`.
///
/// Row `00` sits on the vessel center line; even rows extend to port and odd
/// rows to starboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoRow(u8);

impl IsoRow {
    pub fn new(number: u8) -> Option<Self> {
        (number <= 99).then_some(IsoRow(number))
    }

    /// Parse a STAF row field such as `"00"` or `"2"`.
    pub fn parse(field: &str) -> Option<Self> {
        field.trim().parse::<u8>().ok().and_then(IsoRow::new)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Whether this is the center line row `00`.
    pub fn is_center_line(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for IsoRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for IsoRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// ISO tier number, `00` to `99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoTier(u8);

impl IsoTier {
    pub fn new(number: u8) -> Option<Self> {
        (number <= 99).then_some(IsoTier(number))
    }

    /// Parse a STAF tier field such as `"80"` or `"2"`.
    pub fn parse(field: &str) -> Option<Self> {
        field.trim().parse::<u8>().ok().and_then(IsoTier::new)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for IsoTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for IsoTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Row and tier of a single slot inside a bay, rendered as the four-digit
/// code `RRTT` (for example row 02 tier 80 is `"0280"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotCode {
    row: IsoRow,
    tier: IsoTier,
}

impl SlotCode {
    pub fn new(row: IsoRow, tier: IsoTier) -> Self {
        SlotCode { row, tier }
    }

    pub fn row(self) -> IsoRow {
        self.row
    }

    pub fn tier(self) -> IsoTier {
        self.tier
    }
}

impl fmt::Display for SlotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.tier)
    }
}

impl Serialize for SlotCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Orientation and measurement-source enumerations
// =============================================================================

/// Vertical position of a bay section relative to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BayLevel {
    Above,
    Below,
}

impl BayLevel {
    /// Parse the STAF `LEVEL` field (`A` above deck, `B` below deck).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "A" => Some(BayLevel::Above),
            "B" => Some(BayLevel::Below),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BayLevel::Above => "ABOVE",
            BayLevel::Below => "BELOW",
        }
    }
}

impl fmt::Display for BayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fore/aft orientation, used both for paired-bay references and for the
/// direction in which raw LCG values grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForeAft {
    #[default]
    Fwd,
    Aft,
}

impl ForeAft {
    /// Parse a STAF direction field (`F` forward, `A` aft).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "F" => Some(ForeAft::Fwd),
            "A" => Some(ForeAft::Aft),
            _ => None,
        }
    }
}

/// Side of the vessel in which raw TCG values grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortStarboard {
    Port,
    #[default]
    Starboard,
}

impl PortStarboard {
    /// Parse a STAF direction field (`P` port, `S` starboard).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "P" => Some(PortStarboard::Port),
            "S" => Some(PortStarboard::Starboard),
            _ => None,
        }
    }
}

/// Reference point that raw STAF LCG values are measured from.
///
/// After remapping, all longitudinal coordinates are measured from the aft
/// perpendicular regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LcgReference {
    FwdPerpendicular,
    Midships,
    #[default]
    AftPerpendicular,
}

impl LcgReference {
    /// Parse the STAF `LCG REF PT` field (`FP`, `MS` or `AP`).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "FP" => Some(LcgReference::FwdPerpendicular),
            "MS" => Some(LcgReference::Midships),
            "AP" => Some(LcgReference::AftPerpendicular),
            _ => None,
        }
    }
}

/// Whether a CG axis carries surveyed values or estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuesSource {
    Known,
    #[default]
    Estimated,
}

impl ValuesSource {
    /// Parse a STAF `IN USE` flag (`Y` known, `N` estimated).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "Y" => Some(ValuesSource::Known),
            "N" => Some(ValuesSource::Estimated),
            _ => None,
        }
    }
}

/// Source of vertical CG values, which may additionally be declared per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VcgValuesSource {
    Known,
    /// VCGs are declared per tier and must be folded into per-row bottom
    /// bases during remapping.
    ByTier,
    #[default]
    Estimated,
}

impl VcgValuesSource {
    /// Parse the STAF `VCG IN USE` field (`Y` known, `T` by tier, `N` estimated).
    pub fn from_staf(field: &str) -> Option<Self> {
        match field.trim() {
            "Y" => Some(VcgValuesSource::Known),
            "T" => Some(VcgValuesSource::ByTier),
            "N" => Some(VcgValuesSource::Estimated),
            _ => None,
        }
    }
}

/// Nominal container length classes a position can carry.
///
/// Serialized as the plain length in feet, so a JSON map keyed by length
/// reads `"20": ...` and a sizes array reads `[20, 40]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerLength {
    L20,
    L24,
    L40,
    L45,
    L48,
}

impl ContainerLength {
    /// All length classes in ascending order.
    pub const ALL: [ContainerLength; 5] = [
        ContainerLength::L20,
        ContainerLength::L24,
        ContainerLength::L40,
        ContainerLength::L45,
        ContainerLength::L48,
    ];

    pub fn feet(self) -> u8 {
        match self {
            ContainerLength::L20 => 20,
            ContainerLength::L24 => 24,
            ContainerLength::L40 => 40,
            ContainerLength::L45 => 45,
            ContainerLength::L48 => 48,
        }
    }

    pub fn from_feet(feet: u8) -> Option<Self> {
        match feet {
            20 => Some(ContainerLength::L20),
            24 => Some(ContainerLength::L24),
            40 => Some(ContainerLength::L40),
            45 => Some(ContainerLength::L45),
            48 => Some(ContainerLength::L48),
            _ => None,
        }
    }
}

impl fmt::Display for ContainerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.feet())
    }
}

impl Serialize for ContainerLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.feet())
    }
}

// =============================================================================
// CG overrides
// =============================================================================

/// A per-row CG attribute that either overrides the vessel-wide master value
/// or defers to it.
///
/// Consolidation replaces row values equal to the master with `UsesMaster`,
/// and `UsesMaster` fields are omitted from the JSON output. A consumer
/// reconstructs the effective value by substituting the master value for its
/// grouping key when the field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CgOverride {
    /// Explicit value in millimeters for this row.
    Value(Millimeters),
    /// Defer to the vessel-wide master value.
    #[default]
    UsesMaster,
}

impl CgOverride {
    pub fn from_option(value: Option<Millimeters>) -> Self {
        match value {
            Some(v) => CgOverride::Value(v),
            None => CgOverride::UsesMaster,
        }
    }

    /// The explicit value, if any.
    pub fn value(self) -> Option<Millimeters> {
        match self {
            CgOverride::Value(v) => Some(v),
            CgOverride::UsesMaster => None,
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self, CgOverride::UsesMaster)
    }

    /// Apply a coordinate transformation to the explicit value, leaving
    /// `UsesMaster` untouched.
    pub fn transform(&mut self, f: impl FnOnce(Millimeters) -> Millimeters) {
        if let CgOverride::Value(v) = self {
            *v = f(*v);
        }
    }
}

impl Serialize for CgOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CgOverride::Value(v) => serializer.serialize_i64(*v),
            // Only reachable when a caller serializes the variant directly;
            // struct fields skip it.
            CgOverride::UsesMaster => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Flat per-section records
// =============================================================================

/// One data row of the STAF `STACK` section: a row definition scoped to a
/// bay and level.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    pub iso_bay: IsoBay,
    pub level: BayLevel,
    pub iso_row: IsoRow,
    /// Display label from the `CUSTOM STACK` column.
    pub label: Option<String>,
    pub top_iso_tier: Option<IsoTier>,
    pub bottom_iso_tier: Option<IsoTier>,
    /// Height of the row base over the keel.
    pub bottom_base: Option<Millimeters>,
    pub max_height: Option<Millimeters>,
    pub tcg: Option<Millimeters>,
    /// Row LCG per container length class.
    pub lcg_by_length: IndexMap<ContainerLength, Millimeters>,
}

/// One data row of the STAF `TIER` section: a tier definition scoped to a
/// bay and level.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRecord {
    pub iso_bay: IsoBay,
    pub level: BayLevel,
    pub iso_tier: IsoTier,
    /// Display label from the `CUSTOM TIER` column.
    pub label: Option<String>,
    pub vcg: Option<Millimeters>,
}

/// One data row of the STAF `SLOT` section: slot capabilities for a span of
/// tiers within one row of a bay and level.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRecord {
    pub iso_bay: IsoBay,
    pub level: BayLevel,
    pub iso_row: IsoRow,
    /// Raw tier tokens from the `TIERS` column. Above deck these are deck
    /// ordinals counted from 1; below deck they are absolute ISO tiers.
    pub tier_tokens: Vec<u8>,
    /// Length classes accepted at these slots.
    pub sizes: Vec<ContainerLength>,
    pub reefer: bool,
    pub restricted: bool,
}

/// One data row of the STAF `LID` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LidRecord {
    pub label: String,
    pub iso_bay: IsoBay,
    pub level: BayLevel,
    pub port_iso_row: Option<IsoRow>,
    pub starboard_iso_row: Option<IsoRow>,
    pub join_lid_fwd_label: Option<String>,
    pub join_lid_aft_label: Option<String>,
    pub overlap_port: bool,
    pub overlap_starboard: bool,
}

// =============================================================================
// Ship profile (parsed SHIP section)
// =============================================================================

/// Longitudinal CG interpretation declared by the SHIP section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LcgSettings {
    pub values: ValuesSource,
    /// Reference point raw LCG values are measured from.
    pub reference: LcgReference,
    /// Direction in which raw LCG values increase.
    pub positive_direction: ForeAft,
    /// Length between perpendiculars, supplied by configuration.
    pub lpp: Millimeters,
}

/// Transversal CG interpretation declared by the SHIP section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TcgSettings {
    pub values: ValuesSource,
    /// Side on which raw TCG values are positive.
    pub positive_direction: PortStarboard,
}

/// Vertical CG interpretation declared by the SHIP section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VcgSettings {
    pub values: VcgValuesSource,
    /// Fraction of the nominal container height between a tier's VCG
    /// reference and the base of the row, supplied by configuration.
    pub height_factor: f64,
}

impl Default for VcgSettings {
    fn default() -> Self {
        VcgSettings {
            values: VcgValuesSource::default(),
            height_factor: DEFAULT_VCG_HEIGHT_FACTOR,
        }
    }
}

/// Vessel-wide attributes parsed from the SHIP section, before the CG axes
/// are normalized for output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipProfile {
    pub ship_class: Option<String>,
    pub ship_name: Option<String>,
    /// Label convention for positions, as declared by the file.
    pub position_format: Option<String>,
    pub lcg: LcgSettings,
    pub tcg: TcgSettings,
    pub vcg: VcgSettings,
}

// =============================================================================
// Bay level data
// =============================================================================

/// Per-length attributes of a bay section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContLengthInfo {
    /// Bay LCG for this length class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcg: Option<Millimeters>,
    /// Maximum stack weight for this length class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_weight: Option<Grams>,
}

impl ContLengthInfo {
    pub fn is_empty(&self) -> bool {
        self.lcg.is_none() && self.stack_weight.is_none()
    }
}

/// Per-length attributes of a single row.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowInfoByLength {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcg: Option<Millimeters>,
}

/// Attributes of a single row within a bay section.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowInfo {
    pub iso_row: IsoRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_iso_tier: Option<IsoTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_iso_tier: Option<IsoTier>,
    /// Row TCG, deferring to `masterCGs` when not overridden.
    #[serde(skip_serializing_if = "CgOverride::is_master")]
    pub tcg: CgOverride,
    /// Height of the row base over the keel, deferring to `masterCGs` when
    /// not overridden.
    #[serde(skip_serializing_if = "CgOverride::is_master")]
    pub bottom_base: CgOverride,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Millimeters>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub row_info_by_length: IndexMap<ContainerLength, RowInfoByLength>,
}

impl RowInfo {
    pub fn new(iso_row: IsoRow) -> Self {
        RowInfo {
            iso_row,
            label: None,
            top_iso_tier: None,
            bottom_iso_tier: None,
            tcg: CgOverride::UsesMaster,
            bottom_base: CgOverride::UsesMaster,
            max_height: None,
            row_info_by_length: IndexMap::new(),
        }
    }
}

/// Row attributes of a bay section, keyed by row number.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PerRowInfo {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub each: IndexMap<IsoRow, RowInfo>,
}

impl PerRowInfo {
    pub fn is_empty(&self) -> bool {
        self.each.is_empty()
    }
}

/// Row attributes shared by every row of a bay section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommonRowInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Millimeters>,
}

/// Stack attributes shared by every stack of a bay section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StackAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Millimeters>,
}

/// Stack attributes of a bay section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerStackInfo {
    pub common: StackAttributes,
}

impl PerStackInfo {
    pub fn is_empty(&self) -> bool {
        self.common.max_height.is_none()
    }
}

/// Attributes of a single tier within a bay section.
///
/// Tier data only exists while the hierarchy is being assembled; the
/// remapping phase consumes it and it never reaches the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct TierInfo {
    pub iso_tier: IsoTier,
    pub label: Option<String>,
    pub vcg: Option<Millimeters>,
}

impl TierInfo {
    pub fn new(iso_tier: IsoTier) -> Self {
        TierInfo {
            iso_tier,
            label: None,
            vcg: None,
        }
    }
}

/// Capabilities of a single slot within a bay section.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    pub pos: SlotCode,
    /// Length classes this slot accepts, ascending.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub sizes: BTreeSet<ContainerLength>,
    #[serde(skip_serializing_if = "is_false")]
    pub reefer: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub restricted: bool,
}

impl SlotInfo {
    pub fn new(pos: SlotCode) -> Self {
        SlotInfo {
            pos,
            sizes: BTreeSet::new(),
            reefer: false,
            restricted: false,
        }
    }
}

/// Transverse bulkhead attributes of a bay section.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bulkhead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fore_lcg: Option<Millimeters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aft_lcg: Option<Millimeters>,
}

impl Bulkhead {
    pub fn is_empty(&self) -> bool {
        !self.fore.unwrap_or(false) && self.fore_lcg.is_none() && self.aft_lcg.is_none()
    }
}

/// One bay section of the vessel: everything known about a `(bay, level)`
/// pair.
///
/// Created from the STAF `SECTION` section, then filled in by the hierarchy
/// building passes. The `(iso_bay, level)` pair is unique across the vessel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BayLevelData {
    pub iso_bay: IsoBay,
    pub level: BayLevel,

    /// Bay label used when the vessel is displayed in 20-foot units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_20: Option<String>,

    /// Bay label used when the vessel is displayed in 40-foot units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_40: Option<String>,

    /// Bay attributes that vary by container length class.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub info_by_cont_length: IndexMap<ContainerLength, ContLengthInfo>,

    /// Per-row attributes, keyed by row number.
    #[serde(skip_serializing_if = "PerRowInfo::is_empty")]
    pub per_row_info: PerRowInfo,

    /// Attributes common to every row of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_row_info: Option<CommonRowInfo>,

    /// Attributes common to every stack of this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_stack_info: Option<PerStackInfo>,

    /// Per-tier attributes. Transient: consumed by CG remapping and never
    /// serialized.
    #[serde(skip)]
    pub per_tier_info: Option<IndexMap<IsoTier, TierInfo>>,

    /// Per-slot capabilities, keyed by `RRTT` slot code.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub per_slot_info: IndexMap<SlotCode, SlotInfo>,

    /// Which neighbouring bay this section pairs with for 40-foot stowage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_bay: Option<ForeAft>,

    /// Where reefer plugs are fitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reefer_plugs: Option<ForeAft>,

    /// Mandated container door orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doors: Option<ForeAft>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub athwart_ship: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulkhead: Option<Bulkhead>,
}

impl BayLevelData {
    /// Create an empty bay section for a newly discovered `(bay, level)` pair.
    pub fn new(iso_bay: IsoBay, level: BayLevel) -> Self {
        BayLevelData {
            iso_bay,
            level,
            label_20: None,
            label_40: None,
            info_by_cont_length: IndexMap::new(),
            per_row_info: PerRowInfo::default(),
            common_row_info: None,
            per_stack_info: None,
            per_tier_info: None,
            per_slot_info: IndexMap::new(),
            paired_bay: None,
            reefer_plugs: None,
            doors: None,
            athwart_ship: None,
            bulkhead: None,
        }
    }
}

// =============================================================================
// Ship data (output)
// =============================================================================

/// Longitudinal CG interpretation of the output document. All LCGs are
/// measured from the aft perpendicular, growing forward.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LcgOptions {
    pub values: ValuesSource,
    pub lpp: Millimeters,
}

/// Transversal CG interpretation of the output document. All TCGs are
/// measured from the center line, positive towards starboard.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TcgOptions {
    pub values: ValuesSource,
}

/// Vertical CG interpretation of the output document. All VCGs are expressed
/// as per-row bottom bases over the keel.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VcgOptions {
    pub values: ValuesSource,
    pub height_factor: f64,
}

/// Vessel-wide master CG values, produced by consolidation.
///
/// TCG masters are grouped by row number, separately above and below deck.
/// Bottom base masters are grouped by the bottom tier of the rows they came
/// from.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasterCgs {
    pub above_tcgs: IndexMap<IsoRow, Millimeters>,
    pub below_tcgs: IndexMap<IsoRow, Millimeters>,
    pub bottom_bases: IndexMap<IsoTier, Millimeters>,
}

impl MasterCgs {
    /// Master TCG for a row at the given level, if one was consolidated.
    pub fn tcg_for(&self, level: BayLevel, row: IsoRow) -> Option<Millimeters> {
        match level {
            BayLevel::Above => self.above_tcgs.get(&row).copied(),
            BayLevel::Below => self.below_tcgs.get(&row).copied(),
        }
    }

    /// Master bottom base for rows whose bottom tier is `tier`, if one was
    /// consolidated.
    pub fn bottom_base_for(&self, tier: IsoTier) -> Option<Millimeters> {
        self.bottom_bases.get(&tier).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.above_tcgs.is_empty() && self.below_tcgs.is_empty() && self.bottom_bases.is_empty()
    }
}

/// Vessel-wide attributes of the output document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_format: Option<String>,

    pub lcg_options: LcgOptions,
    pub tcg_options: TcgOptions,
    pub vcg_options: VcgOptions,

    /// Length classes that occur anywhere in the vessel, ascending.
    pub containers_lengths: Vec<ContainerLength>,

    #[serde(rename = "masterCGs")]
    pub master_cgs: MasterCgs,
}

impl ShipData {
    /// Normalize a parsed ship profile into output form.
    ///
    /// Per-tier VCG declarations have been folded into bottom bases by the
    /// time this runs, so `BY_TIER` collapses to `KNOWN`.
    pub fn from_profile(profile: &ShipProfile, containers_lengths: Vec<ContainerLength>) -> Self {
        let vcg_values = match profile.vcg.values {
            VcgValuesSource::Estimated => ValuesSource::Estimated,
            VcgValuesSource::Known | VcgValuesSource::ByTier => ValuesSource::Known,
        };

        ShipData {
            ship_class: profile.ship_class.clone(),
            ship_name: profile.ship_name.clone(),
            position_format: profile.position_format.clone(),
            lcg_options: LcgOptions {
                values: profile.lcg.values,
                lpp: profile.lcg.lpp,
            },
            tcg_options: TcgOptions {
                values: profile.tcg.values,
            },
            vcg_options: VcgOptions {
                values: vcg_values,
                height_factor: profile.vcg.height_factor,
            },
            containers_lengths,
            master_cgs: MasterCgs::default(),
        }
    }
}

// =============================================================================
// Document level structures
// =============================================================================

/// Aggregate extents of the vessel grid.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeSummary {
    /// Highest ISO bay number in use.
    pub iso_bays: u8,

    /// Whether any section uses the center line row `00`.
    pub center_line_row: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_row: Option<IsoRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_above_tier: Option<IsoTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_above_tier: Option<IsoTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_below_tier: Option<IsoTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_below_tier: Option<IsoTier>,
}

/// Display labels of one bay.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BayLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_20: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_40: Option<String>,
}

/// Custom display labels for bays, rows and tiers, collected before any
/// coordinate rewriting.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionLabels {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub bays: IndexMap<IsoBay, BayLabels>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rows: IndexMap<IsoRow, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub tiers: IndexMap<IsoTier, String>,
}

impl PositionLabels {
    pub fn is_empty(&self) -> bool {
        self.bays.is_empty() && self.rows.is_empty() && self.tiers.is_empty()
    }
}

/// One hatch lid of the output document.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LidData {
    pub label: String,
    pub iso_bay: IsoBay,
    pub level: BayLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_iso_row: Option<IsoRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starboard_iso_row: Option<IsoRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_lid_fwd_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_lid_aft_label: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub overlap_port: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub overlap_starboard: bool,
}

/// The complete OpenVesselSpec document produced by a conversion.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VesselSpec {
    /// Always `"OpenVesselSpec"`.
    pub schema: String,

    /// Schema version, currently `"1.0.0"`.
    pub version: String,

    pub size_summary: SizeSummary,
    pub ship_data: ShipData,
    pub bays_data: Vec<BayLevelData>,
    pub position_labels: PositionLabels,
    pub lid_data: Vec<LidData>,
}

impl VesselSpec {
    /// Serialize the document to JSON.
    pub fn to_json_string(&self, pretty: bool) -> crate::error::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

// =============================================================================
// Parsed file aggregate
// =============================================================================

/// Everything parsed out of a STAF file, before hierarchy building.
///
/// The bay sections come from the `SECTION` section; the flat record vectors
/// hold the remaining sections in file order and are drained as the pipeline
/// merges them into the bay sections.
#[derive(Debug, Clone, Default)]
pub struct ParsedStafData {
    pub ship: ShipProfile,
    pub bay_levels: Vec<BayLevelData>,
    pub rows: Vec<RowRecord>,
    pub tiers: Vec<TierRecord>,
    pub slots: Vec<SlotRecord>,
    pub lids: Vec<LidRecord>,
}
