//! `robocopy` backed tree copier (Windows)

use super::TreeCopier;
use crate::types::{CopyOutcome, CopyStats, HdtpError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Highest robocopy exit code that still means the copy went through.
///
/// Codes 0-7 are bit flags for "copied", "extra files", "mismatches";
/// 8 and up mean some files or the whole run failed.
pub const ROBOCOPY_MAX_SUCCESS_CODE: i32 = 7;

/// Runs `robocopy <source> <dest> /s` and waits for it
#[derive(Debug, Clone)]
pub struct RobocopyCopier {
    program: PathBuf,
}

impl Default for RobocopyCopier {
    fn default() -> Self {
        Self {
            program: PathBuf::from("robocopy"),
        }
    }
}

impl RobocopyCopier {
    /// Use a specific robocopy binary instead of the one on `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TreeCopier for RobocopyCopier {
    fn name(&self) -> &'static str {
        "robocopy"
    }

    fn copy_tree(&self, source: &Path, dest: &Path) -> Result<CopyOutcome, HdtpError> {
        debug!(
            program = %self.program.display(),
            source = %source.display(),
            dest = %dest.display(),
            "spawning"
        );

        let output = Command::new(&self.program)
            .arg(source)
            .arg(dest)
            .arg("/s")
            .output()
            .map_err(|err| HdtpError::SubprocessLaunch {
                program: self.program.display().to_string(),
                source: err,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let outcome = classify_exit(
            &self.program.display().to_string(),
            output.status.code(),
            &stderr,
            &stdout,
        );
        if let Some(details) = outcome.details() {
            warn!(source = %source.display(), details, "robocopy reported issues");
        }
        Ok(outcome)
    }
}

/// Map a robocopy exit status onto a copy outcome
///
/// `None` (killed by a signal) is treated like a serious error. The tool's
/// stderr is used as detail text, falling back to the tail of stdout since
/// robocopy logs most errors there.
pub fn classify_exit(program: &str, code: Option<i32>, stderr: &str, stdout: &str) -> CopyOutcome {
    match code {
        Some(code) if (0..=ROBOCOPY_MAX_SUCCESS_CODE).contains(&code) => {
            CopyOutcome::Success(CopyStats::default())
        }
        Some(code) => {
            let details = if stderr.trim().is_empty() {
                tail_lines(stdout, 5)
            } else {
                stderr.trim().to_string()
            };
            CopyOutcome::Warning {
                stats: CopyStats::default(),
                details: HdtpError::SubprocessFailed {
                    program: program.to_string(),
                    code,
                    details,
                }
                .to_string(),
            }
        }
        None => CopyOutcome::Warning {
            stats: CopyStats::default(),
            details: format!("{program} was terminated before it finished"),
        },
    }
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
