//! Best-effort removal of known conflicting files

use crate::types::{DeleteReport, HdtpError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Delete each of `relative_paths` under `base`, in order
///
/// Absent files are skipped: which conflicting files exist depends on which
/// optional parts of a pack were extracted. A file that exists but cannot be
/// removed is recorded in `DeleteReport::failed` and the next path is tried.
///
/// When the exact path is missing the lookup is retried ignoring ASCII case,
/// so the lists also match packs extracted onto case-sensitive filesystems.
pub fn delete_conflicts(base: &Path, relative_paths: &[PathBuf]) -> DeleteReport {
    let mut report = DeleteReport::new();

    for relative in relative_paths {
        let exact = base.join(relative);
        let Some(target) = locate(base, relative) else {
            debug!(path = %exact.display(), "not present, skipped");
            report.skipped.push(exact);
            continue;
        };

        match remove_file(&target) {
            Ok(true) => {
                debug!(path = %target.display(), "deleted");
                report.deleted.push(target);
            }
            Ok(false) => report.skipped.push(target),
            Err(error) => {
                warn!(path = %target.display(), %error, "could not delete conflicting file");
                report.failed.push((target, error));
            }
        }
    }

    report
}

/// Remove a single file. `Ok(false)` if it vanished in the meantime.
fn remove_file(path: &Path) -> Result<bool, HdtpError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(HdtpError::at_path(path, e)),
    };
    if metadata.is_dir() {
        return Err(HdtpError::Io(std::io::Error::other(format!(
            "{} is a directory, expected a file",
            path.display()
        ))));
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(HdtpError::at_path(path, e)),
    }
}

/// Find `base/relative` on disk, falling back to a case-insensitive match per component
pub fn locate(base: &Path, relative: &Path) -> Option<PathBuf> {
    let exact = base.join(relative);
    if fs::symlink_metadata(&exact).is_ok() {
        return Some(exact);
    }

    let mut current = base.to_path_buf();
    for component in relative.components() {
        let wanted = component.as_os_str();
        let direct = current.join(wanted);
        if fs::symlink_metadata(&direct).is_ok() {
            current = direct;
            continue;
        }

        let wanted = wanted.to_str()?;
        let found = fs::read_dir(&current)
            .ok()?
            .filter_map(Result::ok)
            .find(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.eq_ignore_ascii_case(wanted))
            })?;
        current = found.path();
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(base: &Path, relative: &str) -> PathBuf {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, b"dds").expect("write file");
        path
    }

    #[test]
    fn test_deletes_present_and_skips_absent() {
        let base = TempDir::new().expect("create tempdir");
        let present = touch(base.path(), "01_FalconOil/textures/Tires01_d.DDS");

        let report = delete_conflicts(
            base.path(),
            &[
                PathBuf::from("01_FalconOil/textures/Tires01_d.DDS"),
                PathBuf::from("01_FalconOil/textures/Tires01_n.DDS"),
            ],
        );

        assert!(!present.exists());
        assert_eq!(report.deleted, vec![present]);
        assert_eq!(report.skipped.len(), 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let base = TempDir::new().expect("create tempdir");
        touch(base.path(), "02_Langley/textures/Bricks01_d.DDS");
        let paths = vec![PathBuf::from("02_Langley/textures/Bricks01_d.DDS")];

        let first = delete_conflicts(base.path(), &paths);
        let second = delete_conflicts(base.path(), &paths);

        assert_eq!(first.deleted.len(), 1);
        assert!(second.deleted.is_empty());
        assert_eq!(second.skipped.len(), 1);
        assert!(!second.has_failures());
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let base = TempDir::new().expect("create tempdir");
        let actual = touch(base.path(), "01_FalconOil/Textures/SetDressing/tires01_d.dds");

        let report = delete_conflicts(
            base.path(),
            &[PathBuf::from("01_FalconOil/textures/setdressing/Tires01_d.DDS")],
        );

        assert!(!actual.exists());
        assert_eq!(report.deleted.len(), 1);
    }

    #[test]
    fn test_directory_in_place_of_file_is_reported() {
        let base = TempDir::new().expect("create tempdir");
        fs::create_dir_all(base.path().join("02_Langley/odd.dds")).expect("create dir");

        let report = delete_conflicts(base.path(), &[PathBuf::from("02_Langley/odd.dds")]);

        assert_eq!(report.failed.len(), 1);
        assert!(base.path().join("02_Langley/odd.dds").is_dir());
    }

    #[test]
    #[cfg(unix)]
    fn test_permission_failure_does_not_stop_batch() {
        use std::os::unix::fs::PermissionsExt;

        let base = TempDir::new().expect("create tempdir");
        let locked = touch(base.path(), "01_FalconOil/locked/a.dds");
        let free = touch(base.path(), "01_FalconOil/free/b.dds");
        let locked_dir = base.path().join("01_FalconOil/locked");
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o555))
            .expect("lock directory");

        let report = delete_conflicts(
            base.path(),
            &[
                PathBuf::from("01_FalconOil/locked/a.dds"),
                PathBuf::from("01_FalconOil/free/b.dds"),
            ],
        );

        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755))
            .expect("unlock directory");

        assert!(!free.exists());
        assert!(report.deleted.contains(&free));
        // root ignores directory permissions, so only check when we were refused
        if locked.exists() {
            assert_eq!(report.deleted, vec![free]);
            assert_eq!(report.failed.len(), 1);
            assert!(report.failed[0].1.is_permission_error());
        } else {
            assert_eq!(report.deleted.len(), 2);
            assert!(!report.has_failures());
        }
    }
}
