//! # hdtp - HD texture pack combiner
//!
//! Merges the numbered texture pack folders of an HDTP install into one
//! output folder, removing files known to conflict between packs, ready for
//! archiving into BA2 files.

pub mod commands;
pub mod config;
pub mod executor;
pub mod interrupt;
pub mod layout;
pub mod logging;
pub mod scanner;
pub mod types;
pub mod ui;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use executor::TreeCopier;
pub use types::{CopyOutcome, CopyStats, DeleteReport, HdtpError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
