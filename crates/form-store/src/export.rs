//! Canonical serialization of the configuration and the export sinks.
//!
//! `serialize_config` is the single producer of the exported document; the
//! summary view, clipboard copy, and file download all consume its output.
//! Sinks only ever read store state, so a failed export never rolls back or
//! mutates anything.

use std::{fs, path::PathBuf};

use sw_types::FormData;
use tracing::info;

use crate::{StoreError, StoreResult};

/// Default file name for downloaded configurations.
pub const DEFAULT_EXPORT_FILENAME: &str = "project-config.json";

/// Serialize the full configuration as pretty-printed JSON.
///
/// Key order is deterministic: top-level sections in declaration order,
/// fields in record order, arrays in insertion order, and the role
/// permission mapping in role insertion order. Serializing, parsing, and
/// serializing again yields byte-identical output.
pub fn serialize_config(data: &FormData) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Destination for an exported configuration document.
///
/// Implementations are external collaborators (filesystem, clipboard);
/// failures are reported to the caller and never affect store state.
pub trait ExportSink {
    fn write(&mut self, contents: &str) -> StoreResult<()>;
}

/// Writes the configuration to a file on the local filesystem.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ExportSink for FileSink {
    fn write(&mut self, contents: &str) -> StoreResult<()> {
        fs::write(&self.path, contents).map_err(|source| StoreError::ExportFailed { path: self.path.clone(), source })?;
        info!(path = %self.path.display(), "configuration exported");
        Ok(())
    }
}

/// Serialize `data` and hand it to `sink`.
pub fn export_config(data: &FormData, sink: &mut dyn ExportSink) -> StoreResult<()> {
    let contents = serialize_config(data)?;
    sink.write(&contents)
}
