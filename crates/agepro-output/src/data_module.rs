//! Embedded data module generation.
//!
//! The client application loads the catalog from a script that binds one
//! constant to the full record array:
//!
//! ```text
//! // Auto-generated from CSV files. Do not edit manually.
//! const AGEPRO_DATA = [ ...records, 2-space indented JSON... ];
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use agepro_model::Record;

/// First line of every generated data module.
pub const GENERATED_HEADER: &str = "// Auto-generated from CSV files. Do not edit manually.";

/// Name of the constant the client application reads.
pub const DATA_CONSTANT: &str = "AGEPRO_DATA";

/// Renders the data module text for `records`, trailing newline included.
pub fn render_data_module(records: &[Record]) -> Result<String> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    Ok(format!("{GENERATED_HEADER}\nconst {DATA_CONSTANT} = {json};\n"))
}

/// Writes the data module to `path`, creating the parent directory if needed.
pub fn write_data_module(path: &Path, records: &[Record]) -> Result<()> {
    let contents = render_data_module(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "wrote data module");
    Ok(())
}

/// Parses the record array back out of a rendered data module.
pub fn parse_data_module(contents: &str) -> Result<Vec<Record>> {
    let body = contents
        .strip_prefix(GENERATED_HEADER)
        .ok_or_else(|| anyhow!("missing generated-file header"))?
        .trim_start();
    let body = body
        .strip_prefix("const ")
        .and_then(|rest| rest.strip_prefix(DATA_CONSTANT))
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(|| anyhow!("missing {DATA_CONSTANT} declaration"))?;
    let json = body
        .trim_end()
        .strip_suffix(';')
        .ok_or_else(|| anyhow!("unterminated {DATA_CONSTANT} declaration"))?;
    serde_json::from_str(json).context("parse record array")
}
