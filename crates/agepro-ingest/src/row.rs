//! Row parsing for the survey CSV exports.
//!
//! Rows are split on bare commas; the exports never quote fields. Column
//! layout:
//!
//! | Index | Column      | Handling                         |
//! |-------|-------------|----------------------------------|
//! | 0     | Region      | trimmed, required                |
//! | 1     | Disk        | trimmed                          |
//! | 2     | Band        | trimmed                          |
//! | 3     | Molecule    | trimmed, `CO` becomes `12CO`     |
//! | 4     | URL         | trimmed, required                |
//! | 5     | Data type   | whitespace collapsed             |
//! | 6     | Link Imagen | ignored                          |
//! | 7     | Size (MB)   | decimal, `0` when unparsable     |

use agepro_model::{HEADER_TOKEN, MIN_FIELDS, Record, SizeMb};
use csv::StringRecord;

use crate::normalize::{collapse_whitespace, normalize_molecule, parse_size};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Normalized fields of an accepted row, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFields {
    pub region: String,
    pub disk: String,
    pub band: String,
    pub molecule: String,
    pub url: String,
    pub data_type: String,
    pub size_mb: SizeMb,
}

impl RowFields {
    /// Builds the catalog record for this row.
    pub fn into_record(self, id: usize) -> Record {
        Record {
            id,
            region: self.region,
            disk: self.disk,
            band: self.band,
            molecule: self.molecule,
            url: self.url,
            data_type: self.data_type,
            size_mb: self.size_mb,
        }
    }
}

/// Why a row did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// First row of a file starting with `Region`.
    Header,
    /// Nothing but commas and whitespace.
    Blank,
    /// Fewer than eight comma-separated fields.
    TooFewFields { found: usize },
    /// Region empty after trimming.
    MissingRegion,
    /// URL empty after trimming.
    MissingUrl,
}

/// Result of parsing one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(RowFields),
    Skipped(SkipReason),
}

/// Parses one comma-split row; `first_row` marks the first row of its file.
pub fn parse_record(record: &StringRecord, first_row: bool) -> RowOutcome {
    let leading = record.get(0).unwrap_or_default();
    if first_row && leading.trim_start_matches(BYTE_ORDER_MARK).starts_with(HEADER_TOKEN) {
        return RowOutcome::Skipped(SkipReason::Header);
    }

    if record.iter().all(|field| field.trim().is_empty()) {
        return RowOutcome::Skipped(SkipReason::Blank);
    }

    if record.len() < MIN_FIELDS {
        return RowOutcome::Skipped(SkipReason::TooFewFields {
            found: record.len(),
        });
    }

    let region = record[0].trim();
    let url = record[4].trim();
    if region.is_empty() {
        return RowOutcome::Skipped(SkipReason::MissingRegion);
    }
    if url.is_empty() {
        return RowOutcome::Skipped(SkipReason::MissingUrl);
    }

    RowOutcome::Accepted(RowFields {
        region: region.to_string(),
        disk: record[1].trim().to_string(),
        band: record[2].trim().to_string(),
        molecule: normalize_molecule(&record[3]),
        url: url.to_string(),
        data_type: collapse_whitespace(&record[5]),
        size_mb: parse_size(&record[7]),
    })
}

/// Parses a single raw line; `line_index` is zero-based within its file.
pub fn parse_line(raw: &str, line_index: usize) -> RowOutcome {
    let line = raw.trim_end_matches(['\n', '\r']);
    let record: StringRecord = line.split(',').collect();
    parse_record(&record, line_index == 0)
}
