//! STAF Converter Library
//!
//! A Rust library for converting STAF vessel profile files into
//! OpenVesselSpec JSON documents.
//!
//! This library provides tools for:
//! - Scanning the tab-separated STAF sections with proper header handling
//! - Parsing ship, bay, stack, tier, slot and lid records into typed data
//! - Building the per-bay hierarchy the output document is organised around
//! - Remapping every CG onto the document reference frames
//! - Consolidating repeated row CGs into vessel-wide master values
//! - Comprehensive error handling and progress logging

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cg_remap;
        pub mod cleanup;
        pub mod converter;
        pub mod hierarchy;
        pub mod labels;
        pub mod lids;
        pub mod master_cgs;
        pub mod record_index;
        pub mod section_parser;
        pub mod section_scanner;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::VesselSpec;
pub use app::services::converter::convert;
pub use config::ConversionConfig;
pub use error::{Result, StafError};
