//! Conversion pipeline
//!
//! [`convert`] drives a STAF file through every phase in a fixed order:
//!
//! 1. Scan the flat text into sections and verify the mandatory ones exist
//! 2. Parse each section into typed records
//! 3. Merge row, tier and slot records into their bay sections
//! 4. Collect position labels while tier tables still exist
//! 5. Remap every CG onto the document reference frames
//! 6. Hoist shared row attributes and consolidate master CGs
//! 7. Assemble and clean the final document
//!
//! Slot merging needs the lowest above-deck tier, so a bootstrap size
//! summary runs before it and the definitive one runs after all rewriting.

use std::collections::BTreeSet;
use std::mem;

use tracing::info;

use crate::app::models::{BayLevelData, ContainerLength, ShipData, VesselSpec};
use crate::app::services::cg_remap::remap_cgs;
use crate::app::services::cleanup::clean_document;
use crate::app::services::hierarchy::{
    hoist_common_row_info, merge_row_info, merge_slot_info, merge_tier_info,
};
use crate::app::services::labels::extract_position_labels;
use crate::app::services::lids::transform_lids;
use crate::app::services::master_cgs::{calculate_master_cgs, compact_repeated_cgs};
use crate::app::services::record_index::BayLevelIndex;
use crate::app::services::section_parser::parse_all_sections;
use crate::app::services::section_scanner::SectionMap;
use crate::app::services::summary::calculate_summary;
use crate::config::ConversionConfig;
use crate::constants::{OVS_SCHEMA, OVS_VERSION};
use crate::error::Result;

/// Convert STAF file content into an OpenVesselSpec document.
pub fn convert(file_content: &str, config: &ConversionConfig) -> Result<VesselSpec> {
    config.validate()?;

    let sections = SectionMap::scan(file_content);
    sections.check_mandatory()?;
    info!("Scanned {} STAF sections", sections.len());

    let mut data = parse_all_sections(&sections);
    data.ship.lcg.lpp = config.lpp;
    data.ship.vcg.height_factor = config.vcg_height_factor;

    let row_index = BayLevelIndex::build(mem::take(&mut data.rows));
    let tier_index = BayLevelIndex::build(mem::take(&mut data.tiers));
    let slot_index = BayLevelIndex::build(mem::take(&mut data.slots));

    let mut bay_levels = mem::take(&mut data.bay_levels);
    let iso_bays = merge_row_info(&mut bay_levels, &row_index);
    merge_tier_info(&mut bay_levels, &tier_index);

    // Above-deck slot tiers are deck ordinals; rebasing them onto ISO tiers
    // needs the lowest above-deck tier from a bootstrap summary
    let bootstrap = calculate_summary(iso_bays, &bay_levels);
    merge_slot_info(&mut bay_levels, &slot_index, bootstrap.min_above_tier);

    // Tier tables do not survive CG remapping, so labels come out first
    let position_labels = extract_position_labels(&bay_levels);

    let containers_lengths = container_lengths_in_vessel(&bay_levels);
    let mut ship_data = ShipData::from_profile(&data.ship, containers_lengths);

    remap_cgs(&mut bay_levels, &data.ship);
    hoist_common_row_info(&mut bay_levels);

    let master_cgs = calculate_master_cgs(&bay_levels, &ship_data.master_cgs);
    compact_repeated_cgs(&master_cgs, &mut bay_levels);
    ship_data.master_cgs = master_cgs;

    let size_summary = calculate_summary(iso_bays, &bay_levels);

    let mut document = VesselSpec {
        schema: OVS_SCHEMA.to_string(),
        version: OVS_VERSION.to_string(),
        size_summary,
        ship_data,
        bays_data: bay_levels,
        position_labels,
        lid_data: transform_lids(mem::take(&mut data.lids)),
    };
    clean_document(&mut document);

    info!(
        "Converted STAF file: {} bay sections, {} lids",
        document.bays_data.len(),
        document.lid_data.len()
    );
    Ok(document)
}

/// All container length classes used anywhere in the vessel, ascending.
fn container_lengths_in_vessel(bay_levels: &[BayLevelData]) -> Vec<ContainerLength> {
    let mut lengths: BTreeSet<ContainerLength> = BTreeSet::new();

    for bay_level in bay_levels {
        lengths.extend(bay_level.info_by_cont_length.keys().copied());
        for info in bay_level.per_row_info.each.values() {
            lengths.extend(info.row_info_by_length.keys().copied());
        }
        for slot in bay_level.per_slot_info.values() {
            lengths.extend(slot.sizes.iter().copied());
        }
    }

    lengths.into_iter().collect()
}
