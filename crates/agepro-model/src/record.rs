#![deny(unsafe_code)]

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::DATA_ROOT;
use crate::size::SizeMb;

/// One downloadable data product in the AGE-PRO catalog.
///
/// `filename` and `targetDir` are not stored; they are derived from `url` and
/// the classifier fields whenever the record is serialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: usize,
    pub region: String,
    pub disk: String,
    pub band: String,
    pub molecule: String,
    pub url: String,
    pub data_type: String,
    #[serde(rename = "sizeMB")]
    pub size_mb: SizeMb,
}

impl Record {
    /// Final path segment of the product URL.
    pub fn filename(&self) -> &str {
        filename_from_url(&self.url)
    }

    /// Download destination for this product under [`DATA_ROOT`].
    pub fn target_dir(&self) -> String {
        target_dir(&self.region, &self.disk, &self.band, &self.molecule)
    }
}

/// Returns the substring after the last `/` once trailing slashes are removed.
///
/// A URL without any `/` is returned unchanged.
pub fn filename_from_url(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed
        .rsplit_once('/')
        .map_or(trimmed, |(_, filename)| filename)
}

/// Joins the classifier fields under [`DATA_ROOT`].
pub fn target_dir(region: &str, disk: &str, band: &str, molecule: &str) -> String {
    format!("{DATA_ROOT}/{region}/{disk}/{band}/{molecule}")
}

// Wire layout of a record; field order here is the key order in the data module.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordRow<'a> {
    id: usize,
    region: &'a str,
    disk: &'a str,
    band: &'a str,
    molecule: &'a str,
    url: &'a str,
    filename: &'a str,
    data_type: &'a str,
    #[serde(rename = "sizeMB")]
    size_mb: SizeMb,
    target_dir: String,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id,
            region: &record.region,
            disk: &record.disk,
            band: &record.band,
            molecule: &record.molecule,
            url: &record.url,
            filename: record.filename(),
            data_type: &record.data_type,
            size_mb: record.size_mb,
            target_dir: record.target_dir(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRow::from(self).serialize(serializer)
    }
}
