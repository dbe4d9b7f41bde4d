//! Run configuration: which survey exports to read and where to write.

use std::path::{Path, PathBuf};

/// Survey exports read when no inputs are given, relative to the base directory.
pub const DEFAULT_INPUTS: [&str; 3] = [
    "csv_files/BULK_LOAD_LupusTargets.csv",
    "csv_files/BULK_LOAD_UScoTargets_B6.csv",
    "csv_files/BULK_LOAD_UScoTargets_B7.csv",
];

/// Data module path used when no output is given, relative to the base directory.
pub const DEFAULT_OUTPUT: &str = "js/data.js";

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Input files, in processing order.
    pub inputs: Vec<PathBuf>,
    /// Data module destination.
    pub output: PathBuf,
    /// Parse and report without writing `output`.
    pub dry_run: bool,
}

impl RunConfig {
    /// Default inputs and output under `base_dir`.
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(|path| base_dir.join(path)).collect(),
            output: base_dir.join(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }

    /// Replaces the default inputs when `inputs` is non-empty.
    #[must_use]
    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        if !inputs.is_empty() {
            self.inputs = inputs;
        }
        self
    }

    /// Replaces the default output when one is given.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::with_base_dir(Path::new("."))
    }
}
