//! STAF section scanner
//!
//! Splits the flat line-oriented STAF text into raw sections. A section
//! starts at a `*NAME` line, takes its column names from the following
//! `**`-prefixed header line, and collects every tab-separated data line
//! until the next section start. The scanner is deliberately lenient:
//! structural noise is skipped with a log line, never an error.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::constants::{FIELD_SEPARATOR, HEADER_PREFIX, MANDATORY_SECTIONS, SECTION_PREFIX};
use crate::error::{Result, StafError};

/// One raw section of a STAF file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub name: String,
    /// Column names from the `**` header line, in file order.
    pub header: Vec<String>,
    /// Data rows, each padded or truncated to the header width.
    pub rows: Vec<Vec<String>>,
}

impl RawSection {
    fn new(name: String) -> Self {
        RawSection {
            name,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Scan STAF text into raw sections, in file order.
pub fn scan_sections(content: &str) -> Vec<RawSection> {
    let mut sections: Vec<RawSection> = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        // `**` must be tested before `*`
        if let Some(header_line) = line.strip_prefix(HEADER_PREFIX) {
            match sections.last_mut() {
                Some(section) if section.header.is_empty() => {
                    section.header = split_fields(header_line);
                }
                Some(section) => {
                    debug!("Duplicate column header in section {}, keeping first", section.name);
                }
                None => {
                    debug!("Column header before any section start, ignored");
                }
            }
            continue;
        }

        if let Some(name) = line.strip_prefix(SECTION_PREFIX) {
            sections.push(RawSection::new(name.trim().to_string()));
            continue;
        }

        match sections.last_mut() {
            Some(section) if !section.header.is_empty() => {
                let mut fields = split_fields(line);
                fields.resize(section.header.len(), String::new());
                section.rows.push(fields);
            }
            Some(section) => {
                debug!("Data row before column header in section {}, ignored", section.name);
            }
            None => {
                debug!("Data row before any section start, ignored");
            }
        }
    }

    sections
}

/// Scanned sections keyed by name, preserving file order.
#[derive(Debug, Default)]
pub struct SectionMap {
    sections: IndexMap<String, RawSection>,
}

impl SectionMap {
    /// Scan `content` and index its sections by name.
    ///
    /// A repeated section name appends its rows to the first occurrence, so
    /// writers that emit a section in several blocks still parse.
    pub fn scan(content: &str) -> Self {
        let mut sections: IndexMap<String, RawSection> = IndexMap::new();

        for section in scan_sections(content) {
            match sections.entry(section.name.clone()) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    if existing.header.is_empty() {
                        existing.header = section.header;
                    }
                    existing.rows.extend(section.rows);
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(section);
                }
            }
        }

        SectionMap { sections }
    }

    pub fn get(&self, name: &str) -> Option<&RawSection> {
        self.sections.get(name)
    }

    /// Section names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawSection> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Mandatory sections that are absent from the file.
    pub fn missing_mandatory(&self) -> Vec<String> {
        MANDATORY_SECTIONS
            .iter()
            .filter(|name| !self.sections.contains_key(**name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Fail unless every mandatory section is present.
    pub fn check_mandatory(&self) -> Result<()> {
        let missing = self.missing_mandatory();
        if missing.is_empty() {
            Ok(())
        } else {
            warn!("Missing mandatory STAF sections: {}", missing.join(", "));
            Err(StafError::not_staf_file(missing))
        }
    }
}
