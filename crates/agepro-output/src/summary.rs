use std::collections::BTreeSet;

use agepro_model::Record;

/// Distinct categorical values observed in a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSummary {
    pub total: usize,
    pub total_size_mb: f64,
    pub regions: BTreeSet<String>,
    pub disks: BTreeSet<String>,
    pub bands: BTreeSet<String>,
    pub molecules: BTreeSet<String>,
    pub data_types: BTreeSet<String>,
}

impl CatalogSummary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            summary.total_size_mb += record.size_mb.megabytes();
            summary.regions.insert(record.region.clone());
            summary.disks.insert(record.disk.clone());
            summary.bands.insert(record.band.clone());
            summary.molecules.insert(record.molecule.clone());
            summary.data_types.insert(record.data_type.clone());
        }
        summary
    }

    /// Labelled value sets in report order.
    pub fn fields(&self) -> [(&'static str, &BTreeSet<String>); 5] {
        [
            ("Regions", &self.regions),
            ("Disks", &self.disks),
            ("Bands", &self.bands),
            ("Molecules", &self.molecules),
            ("Data Types", &self.data_types),
        ]
    }
}
