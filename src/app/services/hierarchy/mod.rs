//! Hierarchy building
//!
//! The passes in this module fold the flat per-section records into the bay
//! sections declared by the SECTION section, producing the nested shape of
//! the output document.
//!
//! ## Organization
//!
//! - [`rows`] - STACK records into per-row tables
//! - [`tiers`] - TIER records into transient per-tier tables
//! - [`slots`] - SLOT records into per-slot tables, rebasing above-deck
//!   tier ordinals onto ISO tiers

pub mod rows;
pub mod slots;
pub mod tiers;

#[cfg(test)]
pub mod tests;

pub use rows::merge_row_info;
pub use slots::merge_slot_info;
pub use tiers::merge_tier_info;

use crate::app::models::{BayLevelData, CommonRowInfo};

/// Hoist a per-row attribute shared by every row of a section into its
/// `commonRowInfo`.
///
/// Only runs when every row of the section carries the same present
/// `maxHeight`; a single divergent or absent value keeps the attribute
/// per-row.
pub fn hoist_common_row_info(bay_levels: &mut [BayLevelData]) {
    for bay_level in bay_levels.iter_mut() {
        let mut heights = bay_level.per_row_info.each.values().map(|info| info.max_height);

        let Some(first) = heights.next() else {
            continue;
        };
        let Some(height) = first else {
            continue;
        };
        if !heights.all(|h| h == Some(height)) {
            continue;
        }

        bay_level.common_row_info = Some(CommonRowInfo {
            max_height: Some(height),
        });
        for info in bay_level.per_row_info.each.values_mut() {
            info.max_height = None;
        }
    }
}
