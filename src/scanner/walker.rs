//! Sequential source folder walker

use crate::types::{HdtpError, SourceFile, SourceTree};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Scan a source folder and list everything a merge copy has to write
///
/// Every file is included: hidden files, `.gitignore`d files and the like are
/// all part of a texture pack. Symlinks are followed so the destination gets
/// real files.
///
/// Only the root can fail the scan. File sizes come from the walk itself and
/// nothing else is read per file.
///
/// # Errors
/// * The root missing, not being a directory, or not being listable is fatal
/// * Unreadable entries below the root are recorded in `SourceTree::unreadable`
///   and the scan carries on
pub fn scan_source(root_path: &Path) -> Result<SourceTree, HdtpError> {
    let start_time = Instant::now();

    let metadata = fs::metadata(root_path).map_err(|e| HdtpError::at_path(root_path, e))?;
    if !metadata.is_dir() {
        return Err(HdtpError::Io(std::io::Error::other(format!(
            "Source is not a directory: {}",
            root_path.display()
        ))));
    }
    // Surfaces an unreadable root as an error instead of an empty tree.
    fs::read_dir(root_path).map_err(|e| HdtpError::at_path(root_path, e))?;

    let mut tree = SourceTree::new();

    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                let path = error_path(&e).unwrap_or_else(|| root_path.to_path_buf());
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                tree.push_unreadable(path, e.to_string());
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        let relative_path = match entry.path().strip_prefix(root_path) {
            Ok(p) => p.to_path_buf(),
            Err(_) => {
                warn!(path = %entry.path().display(), "entry outside source root, skipped");
                continue;
            }
        };

        if file_type.is_dir() {
            tree.push_dir(relative_path);
            continue;
        }

        // Pipes, sockets and devices are not texture data.
        if !file_type.is_file() {
            debug!(path = %entry.path().display(), "skipping special file");
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "failed to read metadata");
                tree.push_unreadable(entry.path().to_path_buf(), e.to_string());
                continue;
            }
        };

        tree.push_file(SourceFile::new(relative_path, metadata.len()));
    }

    debug!(
        root = %root_path.display(),
        files = tree.len(),
        bytes = tree.total_size,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "scan complete"
    );

    Ok(tree)
}

/// Path attached to a walker error, if it carries one
fn error_path(error: &ignore::Error) -> Option<PathBuf> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
