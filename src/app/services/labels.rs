//! Position label extraction
//!
//! Bays, rows and tiers can carry free-form display labels alongside their
//! ISO coordinates. Labels are collected into one vessel-wide table keyed by
//! coordinate, with the first declaration winning when sections disagree.
//!
//! Tier labels live in the transient per-tier tables, so extraction has to
//! run before CG remapping consumes them.

use tracing::debug;

use crate::app::models::{BayLevelData, PositionLabels};

/// Collect bay, row and tier display labels from every bay section.
pub fn extract_position_labels(bay_levels: &[BayLevelData]) -> PositionLabels {
    let mut labels = PositionLabels::default();

    for bay_level in bay_levels {
        if bay_level.label_20.is_some() || bay_level.label_40.is_some() {
            let entry = labels.bays.entry(bay_level.iso_bay).or_default();
            if entry.label_20.is_none() {
                entry.label_20 = bay_level.label_20.clone();
            }
            if entry.label_40.is_none() {
                entry.label_40 = bay_level.label_40.clone();
            }
        }

        for (&iso_row, info) in &bay_level.per_row_info.each {
            if let Some(label) = &info.label {
                labels.rows.entry(iso_row).or_insert_with(|| label.clone());
            }
        }

        if let Some(tiers) = &bay_level.per_tier_info {
            for (&iso_tier, info) in tiers {
                if let Some(label) = &info.label {
                    labels.tiers.entry(iso_tier).or_insert_with(|| label.clone());
                }
            }
        }
    }

    debug!(
        "Extracted position labels: {} bays, {} rows, {} tiers",
        labels.bays.len(),
        labels.rows.len(),
        labels.tiers.len()
    );
    labels
}
