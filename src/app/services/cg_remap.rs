//! Reference frame remapping
//!
//! STAF files declare CG values in whatever frame the naval architect used:
//! LCGs measured from the fore perpendicular or midships, TCGs positive to
//! port, VCGs declared per tier. The output document allows exactly one
//! frame, so this pass rewrites every coordinate once, in place:
//!
//! - LCGs become distances from the aft perpendicular, growing forward
//! - TCGs become center line offsets, positive to starboard
//! - per-tier VCGs become per-row bottom bases over the keel
//!
//! Each axis is only rewritten when its values are marked as surveyed
//! (`KNOWN`, or `BY_TIER` for VCGs); estimated values pass through. The
//! transient per-tier tables are consumed here and never reach the output.

use tracing::debug;

use crate::app::models::{
    BayLevelData, CgOverride, ForeAft, LcgReference, LcgSettings, Millimeters, PortStarboard,
    ShipProfile, TcgSettings, ValuesSource, VcgSettings, VcgValuesSource,
};
use crate::constants::base_adjust;

/// Remap every CG in the vessel into the output reference frame.
pub fn remap_cgs(bay_levels: &mut [BayLevelData], profile: &ShipProfile) {
    if profile.lcg.values == ValuesSource::Known {
        remap_lcgs(bay_levels, &profile.lcg);
    }
    if profile.vcg.values == VcgValuesSource::ByTier {
        remap_vcgs(bay_levels, &profile.vcg);
    }
    if profile.tcg.values == ValuesSource::Known {
        remap_tcgs(bay_levels, &profile.tcg);
    }

    // Tier tables are consumed by this phase; nothing downstream may read
    // tier-indexed data.
    for bay_level in bay_levels.iter_mut() {
        bay_level.per_tier_info = None;
    }
}

fn remap_lcgs(bay_levels: &mut [BayLevelData], settings: &LcgSettings) {
    let lpp = settings.lpp;
    let sign: Millimeters = match settings.positive_direction {
        ForeAft::Fwd => 1,
        ForeAft::Aft => -1,
    };
    let rebase = |lcg: Millimeters| match settings.reference {
        LcgReference::FwdPerpendicular => lpp - lcg * sign,
        LcgReference::Midships => lpp / 2 + lcg * sign,
        LcgReference::AftPerpendicular => lcg * sign,
    };

    debug!(
        "Remapping LCGs from {:?} (positive {:?}) onto the aft perpendicular, lpp {lpp} mm",
        settings.reference, settings.positive_direction
    );

    for bay_level in bay_levels.iter_mut() {
        for info in bay_level.info_by_cont_length.values_mut() {
            if let Some(lcg) = info.lcg {
                info.lcg = Some(rebase(lcg));
            }
        }

        if let Some(bulkhead) = &mut bay_level.bulkhead {
            if let Some(lcg) = bulkhead.fore_lcg {
                bulkhead.fore_lcg = Some(rebase(lcg));
            }
            if let Some(lcg) = bulkhead.aft_lcg {
                bulkhead.aft_lcg = Some(rebase(lcg));
            }
        }

        for row_info in bay_level.per_row_info.each.values_mut() {
            for by_length in row_info.row_info_by_length.values_mut() {
                if let Some(lcg) = by_length.lcg {
                    by_length.lcg = Some(rebase(lcg));
                }
            }
        }
    }
}

fn remap_vcgs(bay_levels: &mut [BayLevelData], settings: &VcgSettings) {
    let adjust = base_adjust(settings.height_factor);
    debug!("Deriving bottom bases from tier VCGs, base adjust {adjust} mm");

    for bay_level in bay_levels.iter_mut() {
        let Some(tiers) = bay_level.per_tier_info.take() else {
            continue;
        };

        for row_info in bay_level.per_row_info.each.values_mut() {
            let Some(bottom) = row_info.bottom_iso_tier else {
                continue;
            };
            let Some(vcg) = tiers.get(&bottom).and_then(|tier| tier.vcg) else {
                continue;
            };
            row_info.bottom_base = CgOverride::Value(vcg - adjust);
        }
    }
}

fn remap_tcgs(bay_levels: &mut [BayLevelData], settings: &TcgSettings) {
    let sign: Millimeters = match settings.positive_direction {
        PortStarboard::Starboard => 1,
        PortStarboard::Port => -1,
    };
    debug!("Remapping TCGs onto the center line, positive to starboard (sign {sign})");

    for bay_level in bay_levels.iter_mut() {
        for row_info in bay_level.per_row_info.each.values_mut() {
            row_info.tcg.transform(|tcg| tcg * sign);
        }
    }
}
