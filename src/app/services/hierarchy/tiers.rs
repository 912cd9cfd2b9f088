//! Tier merge pass
//!
//! Folds flat TIER records into the transient per-tier tables of their bay
//! sections. These tables live only until CG remapping, which converts the
//! tier VCGs into per-row bottom bases and discards them.

use indexmap::IndexMap;

use crate::app::models::{BayLevelData, TierInfo, TierRecord};
use crate::app::services::record_index::BayLevelIndex;

/// Merge tier records into their bay sections.
pub fn merge_tier_info(bay_levels: &mut [BayLevelData], index: &BayLevelIndex<TierRecord>) {
    for bay_level in bay_levels.iter_mut() {
        for record in index.get(bay_level.iso_bay, bay_level.level) {
            let tiers = bay_level.per_tier_info.get_or_insert_with(IndexMap::new);
            let info = tiers
                .entry(record.iso_tier)
                .or_insert_with(|| TierInfo::new(record.iso_tier));

            if let Some(label) = &record.label {
                info.label = Some(label.clone());
            }
            if let Some(vcg) = record.vcg {
                info.vcg = Some(vcg);
            }
        }
    }
}
