//! Conversion configuration.
//!
//! STAF files do not carry the vessel length between perpendiculars or the
//! height factor used to derive bottom bases from tier VCGs, so both are
//! supplied by the caller alongside the file content.

use serde::{Deserialize, Serialize};

use crate::app::models::Millimeters;
use crate::constants::DEFAULT_VCG_HEIGHT_FACTOR;
use crate::error::{Result, StafError};

/// Parameters of a single STAF conversion
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Length between perpendiculars in millimeters
    pub lpp: Millimeters,

    /// Fraction of the nominal container height between a tier's VCG
    /// reference and the base of the row
    pub vcg_height_factor: f64,
}

impl ConversionConfig {
    /// Create a configuration with the default VCG height factor
    pub fn new(lpp: Millimeters) -> Self {
        Self {
            lpp,
            vcg_height_factor: DEFAULT_VCG_HEIGHT_FACTOR,
        }
    }

    /// Set a custom VCG height factor
    pub fn with_vcg_height_factor(mut self, height_factor: f64) -> Self {
        self.vcg_height_factor = height_factor;
        self
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.lpp <= 0 {
            return Err(StafError::configuration(format!(
                "lpp must be positive, got {} mm",
                self.lpp
            )));
        }

        if !self.vcg_height_factor.is_finite() || !(0.0..=1.0).contains(&self.vcg_height_factor) {
            return Err(StafError::configuration(format!(
                "VCG height factor must be between 0.0 and 1.0, got {}",
                self.vcg_height_factor
            )));
        }

        Ok(())
    }
}
