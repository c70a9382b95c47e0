//! Progress reporting

use crate::executor::{CopyCallback, CopyEvent};
use crate::types::CopyStats;
use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Progress bar for one folder copy
pub struct CopyProgress {
    bar: ProgressBar,
    started_at: Instant,
    copied_bytes: u64,
}

impl CopyProgress {
    /// Create a bar for `total_files` files; hidden unless `visible`
    pub fn new(total_files: u64, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_files),
            if visible {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        if let Ok(style) =
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} files | {msg}")
        {
            bar.set_style(style.progress_chars("=>-"));
        }

        Self {
            bar,
            started_at: Instant::now(),
            copied_bytes: 0,
        }
    }

    /// Mark one file copied and refresh the throughput display
    pub fn complete_file(&mut self, path: &Path, bytes: u64) {
        self.copied_bytes = self.copied_bytes.saturating_add(bytes);
        self.bar.inc(1);
        self.bar.set_message(format!(
            "{} | {}/s | {}",
            HumanBytes(self.copied_bytes),
            HumanBytes(self.throughput_bps()),
            path.display()
        ));
    }

    /// Print a per-file failure above the bar; the failed file still advances it
    pub fn file_error(&self, path: &Path, err: &str) {
        self.bar.inc(1);
        self.bar
            .println(format!("Warning: {}: {}", path.display(), err));
    }

    pub fn finish(&self, stats: &CopyStats) {
        self.bar.finish_and_clear();
        if !self.bar.is_hidden() {
            println!(
                "  {} file(s), {} copied, {} failed",
                stats.files_copied,
                HumanBytes(stats.bytes_copied),
                stats.files_failed
            );
        }
    }

    fn throughput_bps(&self) -> u64 {
        let secs = self.started_at.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.copied_bytes as f64 / secs) as u64
        } else {
            0
        }
    }
}

/// Copy callback that drives a fresh [`CopyProgress`] for every folder
///
/// The bar is only drawn when stdout is a terminal.
pub fn progress_callback() -> Box<CopyCallback> {
    let visible = console::Term::stdout().is_term();
    let current: Arc<Mutex<Option<CopyProgress>>> = Arc::new(Mutex::new(None));

    Box::new(move |event: &CopyEvent<'_>| {
        let Ok(mut guard) = current.lock() else {
            return;
        };
        match event {
            CopyEvent::Started { total_files, .. } => {
                *guard = Some(CopyProgress::new(*total_files as u64, visible));
            }
            CopyEvent::FileCopied { path, bytes } => {
                if let Some(progress) = guard.as_mut() {
                    progress.complete_file(path, *bytes);
                }
            }
            CopyEvent::FileFailed { path, error } => match guard.as_ref() {
                Some(progress) => progress.file_error(path, &error.to_string()),
                None => eprintln!("Warning: {}: {}", path.display(), error),
            },
            CopyEvent::Finished { stats } => {
                if let Some(progress) = guard.take() {
                    progress.finish(stats);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HdtpError;
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_progress_increments_position_and_bytes() {
        let mut progress = CopyProgress::new(3, false);
        progress.complete_file(Path::new("a.dds"), 128);
        progress.complete_file(Path::new("b.dds"), 256);
        progress.file_error(Path::new("c.dds"), "Permission denied");

        assert_eq!(progress.bar.position(), 3);
        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.copied_bytes, 384);
    }

    #[test]
    fn test_message_names_last_file() {
        let mut progress = CopyProgress::new(1, false);
        progress.complete_file(Path::new("textures/Bricks01_d.DDS"), 10);
        assert!(progress.bar.message().contains("Bricks01_d.DDS"));
    }

    #[test]
    fn test_throughput_becomes_non_zero() {
        let mut progress = CopyProgress::new(1, false);
        thread::sleep(Duration::from_millis(30));
        progress.complete_file(Path::new("a.dds"), 1024);
        assert!(progress.throughput_bps() > 0);
    }

    #[test]
    fn test_callback_handles_full_event_sequence() {
        let callback = progress_callback();
        let path = PathBuf::from("a.dds");
        let error = HdtpError::PermissionDenied { path: path.clone() };
        let stats = CopyStats {
            files_copied: 1,
            files_failed: 1,
            bytes_copied: 4,
        };

        callback(&CopyEvent::Started {
            source: Path::new("03_Valius"),
            total_files: 2,
        });
        callback(&CopyEvent::FileCopied {
            path: &path,
            bytes: 4,
        });
        callback(&CopyEvent::FileFailed {
            path: &path,
            error: &error,
        });
        callback(&CopyEvent::Finished { stats: &stats });
    }
}
