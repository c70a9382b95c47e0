//! Atomic file copy implementation

use crate::types::HdtpError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const BUFFER_SIZE: usize = 128 * 1024;

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Write to a temporary `.hdtp-part` file next to the destination
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Rename over the destination, replacing any older version
///
/// A failed copy leaves the previous destination file untouched and removes
/// the partial file.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(HdtpError)` - IO error or other failure
///
/// # Example
/// ```no_run
/// use hdtp::executor::copy_file_atomic;
/// use std::path::Path;
///
/// let bytes = copy_file_atomic(
///     Path::new("03_Valius/textures/Bricks01_d.DDS"),
///     Path::new("Combined_Files/textures/Bricks01_d.DDS"),
/// )?;
/// # Ok::<(), hdtp::HdtpError>(())
/// ```
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, HdtpError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| HdtpError::at_path(parent, e))?;
    }

    let part_path = part_path_for(dest);
    let result = write_part_file(src, &part_path).and_then(|bytes| {
        fs::rename(&part_path, dest).map_err(|e| HdtpError::at_path(dest, e))?;
        Ok(bytes)
    });

    if result.is_err() {
        if let Err(e) = fs::remove_file(&part_path) {
            debug!(path = %part_path.display(), error = %e, "no partial file to remove");
        }
    }
    result
}

/// Stream `src` into `part_path` and stamp it with the source metadata
fn write_part_file(src: &Path, part_path: &Path) -> Result<u64, HdtpError> {
    let mut src_file = File::open(src).map_err(|e| HdtpError::at_path(src, e))?;
    let mut part_file = File::create(part_path).map_err(|e| HdtpError::at_path(part_path, e))?;

    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total_bytes = 0u64;
    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(|e| HdtpError::at_path(src, e))?;
        if bytes_read == 0 {
            break;
        }
        part_file
            .write_all(&buffer[..bytes_read])
            .map_err(|e| HdtpError::at_path(part_path, e))?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;
    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(|e| HdtpError::at_path(src, e))?;
    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(part_path, mtime)?;
    fs::set_permissions(part_path, src_metadata.permissions())?;

    Ok(total_bytes)
}

/// `dir/name.dds` -> `dir/name.dds.hdtp-part`
fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".hdtp-part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_path_keeps_original_extension() {
        assert_eq!(
            part_path_for(Path::new("out/textures/Tires01_d.DDS")),
            PathBuf::from("out/textures/Tires01_d.DDS.hdtp-part")
        );
        assert_ne!(
            part_path_for(Path::new("a/x.dds")),
            part_path_for(Path::new("a/x.bgsm"))
        );
    }
}
