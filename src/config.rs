use crate::foundation::error::{SduiError, SduiResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Knobs for one [`crate::Pipeline`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct PipelineOptions {
    /// Passed to the host's placeholder hook; hosts typically render a visible marker when set.
    pub development: bool,
    /// Retry unresolved type names with their first character uppercased.
    pub pascal_case_fallback: bool,
    /// Merge `id`, `className`, accessibility and `data-*` attributes into the raw properties.
    pub passthrough_attributes: bool,
    /// Record a diagnostic for every dropped action reference.
    pub report_missing_handlers: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            development: false,
            pascal_case_fallback: true,
            passthrough_attributes: true,
            report_missing_handlers: true,
        }
    }
}

impl PipelineOptions {
    /// Options for development builds: placeholders are marked visibly.
    pub fn development() -> Self {
        Self {
            development: true,
            ..Self::default()
        }
    }

    /// Load options from JSON. Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_reader<R: std::io::Read>(r: R) -> SduiResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SduiError::config(format!("parse pipeline options: {e}")))
    }

    /// Load options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SduiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SduiError::config(format!("open options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/options.rs"]
mod tests;
