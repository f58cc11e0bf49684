//! # Section Files
//!
//! JSON persistence for cross-sections. The property engines never touch the
//! filesystem; this module is the adapter the CLI uses to read and write
//! section definitions.
//!
//! - **Atomic saves**: Write to .tmp, fsync, rename over the target
//! - **Version validation**: Reject files written by an incompatible schema
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "label": "Built-up box",
//!   "section": { "outer": [...], "holes": [[...]] },
//!   "settings": { "max_iterations": 100, "relative_tolerance": 1e-10 }
//! }
//! ```
//!
//! `settings` is optional.
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::file_io::{load_section_file, save_section_file, SectionFile};
//! use section_core::shapes::rectangle;
//! use std::path::Path;
//!
//! let file = SectionFile::new("B-1", rectangle(10.0, 8.0)?);
//! save_section_file(&file, Path::new("b1.section.json"))?;
//!
//! let loaded = load_section_file(Path::new("b1.section.json"))?;
//! assert_eq!(loaded.label, "B-1");
//! # Ok::<(), section_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::CrossSection;
use crate::settings::SolverSettings;

/// Current schema version for section files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A labeled cross-section as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFile {
    /// Schema version the file was written with
    pub version: String,

    /// User label (e.g., "B-1", "Built-up column")
    #[serde(default)]
    pub label: String,

    /// The section geometry
    pub section: CrossSection,

    /// Solver overrides for this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SolverSettings>,
}

impl SectionFile {
    /// Wrap a section for saving under the current schema version
    pub fn new(label: impl Into<String>, section: CrossSection) -> Self {
        SectionFile {
            version: SCHEMA_VERSION.to_string(),
            label: label.into(),
            section,
            settings: None,
        }
    }

    /// Attach solver settings
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Sibling path used for the in-progress write
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Map an I/O failure on `path` to a [`CalcError::FileError`]
fn io_error<'a>(operation: &'a str, path: &'a Path) -> impl FnOnce(std::io::Error) -> CalcError + 'a {
    move |e| CalcError::file_error(operation, path.display().to_string(), e.to_string())
}

fn write_synced(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut out = File::create(path).map_err(io_error("create", path))?;
    out.write_all(bytes).map_err(io_error("write", path))?;
    out.sync_all().map_err(io_error("sync", path))
}

/// Write a section file as pretty JSON.
///
/// The target is replaced only once the full contents are on disk, so a
/// crash mid-write leaves any previous file intact.
pub fn save_section_file(file: &SectionFile, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(file).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let staging = tmp_path_for(path);
    let result = write_synced(&staging, json.as_bytes())
        .and_then(|()| fs::rename(&staging, path).map_err(io_error("replace", path)));
    if result.is_err() && staging.exists() {
        fs::remove_file(&staging).ok();
    }
    result
}

/// Read a section file, rejecting incompatible schema versions.
///
/// Fails with `FileError` on I/O problems, `SerializationError` on malformed
/// JSON and `VersionMismatch` on a newer or foreign schema.
pub fn load_section_file(path: &Path) -> CalcResult<SectionFile> {
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;

    parse_section_file(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("{}: {}", path.display(), reason),
        },
        other => other,
    })
}

/// Parse and version-check a section file from a JSON string
pub fn parse_section_file(json: &str) -> CalcResult<SectionFile> {
    let file: SectionFile = serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    validate_version(&file.version)?;
    Ok(file)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.get(1).copied().unwrap_or(0) > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
