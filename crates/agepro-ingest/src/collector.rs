//! Record collection across the ordered list of survey files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use agepro_model::Record;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, debug_span};

use crate::error::{IngestError, Result};
use crate::row::{RowFields, RowOutcome, parse_record};

/// Row counts for one ingested file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub path: PathBuf,
    pub rows: usize,
    pub accepted: usize,
    pub skipped: usize,
}

/// Accumulates records in processing order.
///
/// The id counter is shared by every file fed to the same collector, so ids
/// stay contiguous from `0` across the whole run.
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<Record>,
    next_id: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted row under the next id.
    pub fn push(&mut self, fields: RowFields) {
        self.records.push(fields.into_record(self.next_id));
        self.next_id += 1;
    }

    /// Ingests every row of `reader`; `path` is only used for diagnostics.
    ///
    /// Fields are split on bare commas with quoting disabled. `\n`, `\r\n` and
    /// a lone `\r` all end a row; empty lines produce no row.
    pub fn ingest_reader<R: Read>(&mut self, reader: R, path: &Path) -> Result<FileStats> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);
        let mut stats = FileStats {
            path: path.to_path_buf(),
            rows: 0,
            accepted: 0,
            skipped: 0,
        };
        let mut record = StringRecord::new();
        loop {
            let more = reader
                .read_record(&mut record)
                .map_err(|source| IngestError::FileRead {
                    path: path.to_path_buf(),
                    row: stats.rows + 1,
                    source,
                })?;
            if !more {
                break;
            }
            match parse_record(&record, stats.rows == 0) {
                RowOutcome::Accepted(fields) => {
                    self.push(fields);
                    stats.accepted += 1;
                }
                RowOutcome::Skipped(_) => stats.skipped += 1,
            }
            stats.rows += 1;
        }
        Ok(stats)
    }

    /// Opens and ingests one file.
    pub fn ingest_file(&mut self, path: &Path) -> Result<FileStats> {
        let span = debug_span!("ingest_file", path = %path.display());
        let _guard = span.enter();
        let file = File::open(path).map_err(|source| IngestError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let stats = self.ingest_reader(file, path)?;
        debug!(
            rows = stats.rows,
            accepted = stats.accepted,
            skipped = stats.skipped,
            "ingested file"
        );
        Ok(stats)
    }

    /// Ingests files in list order, stopping at the first file error.
    pub fn ingest_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Vec<FileStats>> {
        paths
            .iter()
            .map(|path| self.ingest_file(path.as_ref()))
            .collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Reads all `paths` in order into one contiguous record sequence.
pub fn collect_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut collector = Collector::new();
    collector.ingest_files(paths)?;
    Ok(collector.into_records())
}
