//! Slot merge pass
//!
//! Expands flat SLOT records into per-slot entries of their bay sections.
//! This pass runs after the first size summary because above-deck tier
//! tokens are deck ordinals counted from 1: ordinal `n` sits on ISO tier
//! `minAboveTier + 2 * (n - 1)`. Below deck the tokens are absolute ISO
//! tiers and need no rebasing.

use tracing::warn;

use crate::app::models::{BayLevel, BayLevelData, IsoTier, SlotCode, SlotInfo, SlotRecord};
use crate::app::services::record_index::BayLevelIndex;

fn resolve_tier(level: BayLevel, token: u8, min_above_tier: Option<IsoTier>) -> Option<IsoTier> {
    match level {
        BayLevel::Above => {
            let base = min_above_tier?;
            if token == 0 {
                return None;
            }
            let offset = 2u8.checked_mul(token - 1)?;
            IsoTier::new(base.number().checked_add(offset)?)
        }
        BayLevel::Below => IsoTier::new(token),
    }
}

/// Merge slot records into their bay sections.
///
/// `min_above_tier` comes from the bootstrap size summary; when a vessel
/// has no above-deck rows it is `None` and above-deck slot records cannot
/// be placed, so they are skipped with a warning.
pub fn merge_slot_info(
    bay_levels: &mut [BayLevelData],
    index: &BayLevelIndex<SlotRecord>,
    min_above_tier: Option<IsoTier>,
) {
    for bay_level in bay_levels.iter_mut() {
        for record in index.get(bay_level.iso_bay, bay_level.level) {
            for &token in &record.tier_tokens {
                let Some(iso_tier) = resolve_tier(bay_level.level, token, min_above_tier) else {
                    warn!(
                        "Slot tier token {token} in bay {} {} cannot be placed on an ISO tier, skipped",
                        bay_level.iso_bay, bay_level.level
                    );
                    continue;
                };

                let pos = SlotCode::new(record.iso_row, iso_tier);
                let slot = bay_level
                    .per_slot_info
                    .entry(pos)
                    .or_insert_with(|| SlotInfo::new(pos));

                slot.sizes.extend(record.sizes.iter().copied());
                slot.reefer |= record.reefer;
                slot.restricted |= record.restricted;
            }
        }
    }
}
