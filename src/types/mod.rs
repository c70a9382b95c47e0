//! Core type definitions for hdtp

mod entry;
mod error;
mod outcome;
mod tree;

pub use entry::SourceFile;
pub use error::HdtpError;
pub use outcome::{CopyOutcome, CopyStats, DeleteReport};
pub use tree::SourceTree;
