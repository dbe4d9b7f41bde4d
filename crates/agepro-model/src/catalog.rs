//! Fixed names shared by the catalog builder and the client application.

/// Root directory every `targetDir` is placed under.
pub const DATA_ROOT: &str = "AGEPRO_DATA";

/// Number of comma-separated fields a data row must carry.
pub const MIN_FIELDS: usize = 8;

/// First token of the header row in the survey CSV exports.
pub const HEADER_TOKEN: &str = "Region";

/// Molecule spelling used by the exports for carbon monoxide.
pub const MOLECULE_CO_ALIAS: &str = "CO";

/// Canonical isotopologue name for [`MOLECULE_CO_ALIAS`].
pub const MOLECULE_CO: &str = "12CO";
