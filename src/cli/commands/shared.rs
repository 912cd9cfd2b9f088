//! Shared components for CLI commands
//!
//! Common types and utilities used across the command implementations.

use tracing::debug;

use crate::app::models::VesselSpec;
use crate::error::Result;

/// Conversion statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of bay sections in the document
    pub bay_sections: usize,
    /// Total number of rows across all bay sections
    pub rows: usize,
    /// Total number of slots across all bay sections
    pub slots: usize,
    /// Number of hatch lids
    pub lids: usize,
    /// Number of consolidated master CG values
    pub master_cg_values: usize,
    /// Size of the serialized document in bytes
    pub output_bytes: u64,
    /// Total conversion time
    pub processing_time: std::time::Duration,
}

impl ConversionStats {
    /// Collect counts from a finished document.
    pub fn from_document(document: &VesselSpec) -> Self {
        let master = &document.ship_data.master_cgs;

        ConversionStats {
            bay_sections: document.bays_data.len(),
            rows: document
                .bays_data
                .iter()
                .map(|bay| bay.per_row_info.each.len())
                .sum(),
            slots: document
                .bays_data
                .iter()
                .map(|bay| bay.per_slot_info.len())
                .sum(),
            lids: document.lid_data.len(),
            master_cg_values: master.above_tcgs.len()
                + master.below_tcgs.len()
                + master.bottom_bases.len(),
            output_bytes: 0,
            processing_time: std::time::Duration::default(),
        }
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("staf_converter={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{
        BayLevel, BayLevelData, IsoBay, IsoRow, RowInfo, ShipData, ShipProfile, SizeSummary,
        VesselSpec,
    };

    fn document_with_rows(row_count: usize) -> VesselSpec {
        let mut bay = BayLevelData::new(IsoBay::new(1).unwrap(), BayLevel::Above);
        for number in 0..row_count {
            let iso_row = IsoRow::new(number as u8).unwrap();
            bay.per_row_info.each.insert(iso_row, RowInfo::new(iso_row));
        }

        VesselSpec {
            schema: "OpenVesselSpec".to_string(),
            version: "1.0.0".to_string(),
            size_summary: SizeSummary::default(),
            ship_data: ShipData::from_profile(&ShipProfile::default(), Vec::new()),
            bays_data: vec![bay],
            position_labels: Default::default(),
            lid_data: Vec::new(),
        }
    }

    #[test]
    fn test_stats_from_document() {
        let stats = ConversionStats::from_document(&document_with_rows(3));
        assert_eq!(stats.bay_sections, 1);
        assert_eq!(stats.rows, 3);
        assert_eq!(stats.slots, 0);
        assert_eq!(stats.lids, 0);
        assert_eq!(stats.master_cg_values, 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(ConversionStats::format_size(500), "500 B");
        assert_eq!(ConversionStats::format_size(1536), "1.50 KB");
        assert_eq!(ConversionStats::format_size(1048576), "1.00 MB");
    }
}
