//! Shared helpers for section parser tests

use crate::app::services::section_scanner::{RawSection, scan_sections};

mod ship_tests;
mod slot_tests;

/// Build a raw section through the scanner, so tests exercise the same
/// field splitting rules as real files.
pub fn make_section(name: &str, header: &str, rows: &[&str]) -> RawSection {
    let mut text = format!("*{name}\n**{header}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    scan_sections(&text).remove(0)
}
