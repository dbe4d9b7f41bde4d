use std::path::PathBuf;

use agepro_ingest::FileStats;
use agepro_output::CatalogSummary;

#[derive(Debug)]
pub struct ConvertResult {
    pub output: PathBuf,
    pub written: bool,
    pub files: Vec<FileStats>,
    pub summary: CatalogSummary,
}
