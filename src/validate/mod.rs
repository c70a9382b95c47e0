//! Path validation before any copying starts

use crate::layout::required_folder_names;
use crate::types::HdtpError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base and output directories that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPaths {
    pub base_path: PathBuf,
    pub combined_dir: PathBuf,
}

/// Check that `base_path` and every required pack folder exist, then make
/// sure `combined_dir` exists.
///
/// All missing folders are reported together. With `create_output` unset the
/// output directory is left alone (used by dry runs).
///
/// # Errors
/// * `HdtpError::BaseNotFound` - `base_path` is not a directory
/// * `HdtpError::MissingDirectories` - one or more pack folders are absent
/// * `HdtpError::PermissionDenied` / `HdtpError::Io` - output dir could not be created
pub fn validate_paths(
    base_path: &Path,
    combined_dir: &Path,
    create_output: bool,
) -> Result<ValidatedPaths, HdtpError> {
    if !base_path.is_dir() {
        return Err(HdtpError::BaseNotFound(base_path.to_path_buf()));
    }

    let missing = missing_folders(base_path);
    if !missing.is_empty() {
        return Err(HdtpError::MissingDirectories(missing));
    }
    debug!(base = %base_path.display(), "all required folders present");

    if create_output {
        fs::create_dir_all(combined_dir).map_err(|e| HdtpError::at_path(combined_dir, e))?;
        info!(output = %combined_dir.display(), "output directory ready");
    }

    Ok(ValidatedPaths {
        base_path: base_path.to_path_buf(),
        combined_dir: combined_dir.to_path_buf(),
    })
}

/// Required folder names that are absent (or not directories) under `base_path`
pub fn missing_folders(base_path: &Path) -> Vec<String> {
    required_folder_names()
        .filter(|name| !base_path.join(name).is_dir())
        .map(str::to_string)
        .collect()
}
