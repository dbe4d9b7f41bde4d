//! Conversion pipeline: ingest the survey exports, write the data module,
//! summarize the catalog.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use agepro_ingest::Collector;
use agepro_output::{CatalogSummary, write_data_module};

use crate::config::RunConfig;
use crate::types::ConvertResult;

pub fn run_convert(config: &RunConfig) -> Result<ConvertResult> {
    let span = info_span!("convert", output = %config.output.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    info!(files = config.inputs.len(), "ingesting survey exports");
    let mut collector = Collector::new();
    let files = collector
        .ingest_files(&config.inputs)
        .context("ingest survey exports")?;
    let records = collector.into_records();
    info!(records = records.len(), "collected records");

    // =========================================================================
    // Stage 2: Write
    // =========================================================================
    if config.dry_run {
        info!("dry run, data module not written");
    } else {
        write_data_module(&config.output, &records)?;
    }

    // =========================================================================
    // Stage 3: Summarize
    // =========================================================================
    let summary = CatalogSummary::from_records(&records);

    Ok(ConvertResult {
        output: config.output.clone(),
        written: !config.dry_run,
        files,
        summary,
    })
}
