//! Results reported by the copy and delete phases

use super::HdtpError;
use std::path::PathBuf;

/// Counters for one tree copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Files written into the destination
    pub files_copied: usize,
    /// Files that could not be copied
    pub files_failed: usize,
    /// Aggregate copied bytes
    pub bytes_copied: u64,
}

/// Coarse result of copying one source folder
///
/// A copy that could not start at all is an `Err` from the copier instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Everything copied
    Success(CopyStats),
    /// Copy finished but some of it went wrong
    Warning { stats: CopyStats, details: String },
}

impl CopyOutcome {
    pub fn stats(&self) -> &CopyStats {
        match self {
            CopyOutcome::Success(stats) | CopyOutcome::Warning { stats, .. } => stats,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Success(_))
    }

    /// Warning text, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            CopyOutcome::Success(_) => None,
            CopyOutcome::Warning { details, .. } => Some(details),
        }
    }
}

/// What happened to each path handed to the conflict remover
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Files that existed and were removed
    pub deleted: Vec<PathBuf>,
    /// Files that were not there to begin with
    pub skipped: Vec<PathBuf>,
    /// Files that existed but could not be removed
    pub failed: Vec<(PathBuf, HdtpError)>,
}

impl DeleteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
