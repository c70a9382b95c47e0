//! Executor module for file operations
//!
//! Copying is behind the [`TreeCopier`] trait so the run does not care whether
//! files move in-process or through an OS tool like `robocopy`.

pub mod copy;
pub mod delete;
pub mod robocopy;

use crate::config::CopierKind;
use crate::scanner::scan_source;
use crate::types::{CopyOutcome, CopyStats, HdtpError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use copy::copy_file_atomic;
pub use delete::delete_conflicts;
pub use robocopy::RobocopyCopier;

/// A recursive merge-copy facility
///
/// Implementations copy every file under `source` into `dest`, keeping the
/// relative layout. Same-path files in `dest` are overwritten; files that only
/// exist in `dest` are left alone.
pub trait TreeCopier {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Merge `source` into `dest`
    ///
    /// Per-file trouble comes back as `Ok(CopyOutcome::Warning)`. `Err` means
    /// the copy could not run at all.
    fn copy_tree(&self, source: &Path, dest: &Path) -> Result<CopyOutcome, HdtpError>;
}

/// Events emitted while the native copier works through a folder
#[derive(Debug)]
pub enum CopyEvent<'a> {
    /// Scan finished, copying is about to start
    Started {
        source: &'a Path,
        total_files: usize,
    },
    /// One file landed in the destination
    FileCopied { path: &'a Path, bytes: u64 },
    /// One file could not be copied; the copier continues
    FileFailed {
        path: &'a Path,
        error: &'a HdtpError,
    },
    /// Folder done (with or without failures)
    Finished { stats: &'a CopyStats },
}

/// Optional callback used to receive copy events.
pub type CopyCallback = dyn Fn(&CopyEvent<'_>) + Send + Sync;

/// In-process merge copy built on the source scanner and [`copy_file_atomic`]
#[derive(Default)]
pub struct NativeCopier {
    on_event: Option<Box<CopyCallback>>,
}

impl NativeCopier {
    pub fn new() -> Self {
        Self { on_event: None }
    }

    /// Attach an event callback (progress display, tests)
    pub fn with_callback(callback: Box<CopyCallback>) -> Self {
        Self {
            on_event: Some(callback),
        }
    }

    fn emit(&self, event: CopyEvent<'_>) {
        if let Some(callback) = &self.on_event {
            callback(&event);
        }
    }
}

impl TreeCopier for NativeCopier {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy_tree(&self, source: &Path, dest: &Path) -> Result<CopyOutcome, HdtpError> {
        let tree = scan_source(source)?;
        fs::create_dir_all(dest).map_err(|e| HdtpError::at_path(dest, e))?;

        let mut stats = CopyStats::default();
        let mut errors: Vec<(PathBuf, HdtpError)> = Vec::new();

        for (path, reason) in &tree.unreadable {
            stats.files_failed += 1;
            let error = HdtpError::Io(std::io::Error::other(reason.clone()));
            self.emit(CopyEvent::FileFailed { path, error: &error });
            errors.push((path.clone(), error));
        }

        for dir in &tree.dirs {
            let dest_dir = dest.join(dir);
            if let Err(e) = fs::create_dir_all(&dest_dir) {
                let error = HdtpError::at_path(&dest_dir, e);
                warn!(dir = %dest_dir.display(), %error, "could not create directory");
                errors.push((dir.clone(), error));
            }
        }

        self.emit(CopyEvent::Started {
            source,
            total_files: tree.len(),
        });

        for file in &tree.files {
            let src_path = source.join(&file.path);
            let dest_path = dest.join(&file.path);

            match copy_file_atomic(&src_path, &dest_path) {
                Ok(bytes) => {
                    stats.files_copied += 1;
                    stats.bytes_copied += bytes;
                    debug!(file = %file.path.display(), bytes, "copied");
                    self.emit(CopyEvent::FileCopied {
                        path: &file.path,
                        bytes,
                    });
                }
                Err(error) => {
                    stats.files_failed += 1;
                    warn!(file = %src_path.display(), %error, "copy failed");
                    self.emit(CopyEvent::FileFailed {
                        path: &file.path,
                        error: &error,
                    });
                    errors.push((file.path.clone(), error));
                }
            }
        }

        self.emit(CopyEvent::Finished { stats: &stats });
        info!(
            source = %source.display(),
            copied = stats.files_copied,
            failed = stats.files_failed,
            bytes = stats.bytes_copied,
            "folder copied"
        );

        if errors.is_empty() {
            Ok(CopyOutcome::Success(stats))
        } else {
            Ok(CopyOutcome::Warning {
                details: build_error_summary(&errors),
                stats,
            })
        }
    }
}

/// Build the copier selected on the command line
pub fn copier_for(kind: CopierKind, on_event: Option<Box<CopyCallback>>) -> Box<dyn TreeCopier> {
    match kind {
        CopierKind::Native => match on_event {
            Some(callback) => Box::new(NativeCopier::with_callback(callback)),
            None => Box::new(NativeCopier::new()),
        },
        CopierKind::Robocopy => Box::new(RobocopyCopier::default()),
    }
}

fn build_error_summary(errors: &[(PathBuf, HdtpError)]) -> String {
    let preview = errors
        .iter()
        .take(3)
        .map(|(path, err)| format!("{}: {}", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ");

    if errors.len() > 3 {
        format!(
            "{} file(s) could not be copied. {}; ... {} more",
            errors.len(),
            preview,
            errors.len() - 3
        )
    } else {
        format!("{} file(s) could not be copied. {}", errors.len(), preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_build_error_summary_truncates() {
        let errors: Vec<_> = (0..5)
            .map(|i| {
                let path = PathBuf::from(format!("f{i}.dds"));
                let err = HdtpError::PermissionDenied { path: path.clone() };
                (path, err)
            })
            .collect();

        let summary = build_error_summary(&errors);
        assert!(summary.starts_with("5 file(s) could not be copied."));
        assert!(summary.contains("f0.dds"));
        assert!(summary.contains("f2.dds"));
        assert!(!summary.contains("f3.dds: "));
        assert!(summary.contains("... 2 more"));
    }

    #[test]
    fn test_copier_for_selects_implementation() {
        assert_eq!(copier_for(CopierKind::Native, None).name(), "native");
        assert_eq!(copier_for(CopierKind::Robocopy, None).name(), "robocopy");
    }

    #[test]
    fn test_native_copier_emits_events() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        fs::write(src.path().join("a.dds"), b"aaaa").expect("write src file");

        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let events_ref = Arc::clone(&events);
        let copier = NativeCopier::with_callback(Box::new(move |event: &CopyEvent<'_>| {
            let label = match event {
                CopyEvent::Started { .. } => "start",
                CopyEvent::FileCopied { .. } => "copied",
                CopyEvent::FileFailed { .. } => "failed",
                CopyEvent::Finished { .. } => "finished",
            };
            events_ref.lock().expect("lock events").push(label.to_string());
        }));

        let outcome = copier
            .copy_tree(src.path(), dst.path())
            .expect("copy should run");
        assert!(outcome.is_success());
        assert_eq!(outcome.stats().bytes_copied, 4);

        let snapshot = events.lock().expect("lock events snapshot").clone();
        assert_eq!(snapshot, vec!["start", "copied", "finished"]);
    }

    #[test]
    fn test_native_copier_missing_source_is_fatal() {
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let result = NativeCopier::new().copy_tree(&dst.path().join("absent"), dst.path());
        assert!(result.is_err());
    }
}
