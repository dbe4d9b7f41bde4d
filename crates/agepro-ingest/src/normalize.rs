//! Per-field normalization applied to survey CSV cells.

use agepro_model::{MOLECULE_CO, MOLECULE_CO_ALIAS, SizeMb};

/// Trims a molecule name and maps the bare `CO` alias to `12CO`.
///
/// The comparison is case-sensitive; other names pass through trimmed.
pub fn normalize_molecule(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MOLECULE_CO_ALIAS {
        MOLECULE_CO.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    let mut normalized = String::with_capacity(raw.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Parses an advisory size in megabytes.
///
/// Tabs are removed before trimming. Empty, unparsable, and non-finite values
/// all yield [`SizeMb::Unknown`].
pub fn parse_size(raw: &str) -> SizeMb {
    let cleaned = raw.replace('\t', "");
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => SizeMb::Megabytes(value),
        _ => SizeMb::Unknown,
    }
}
