//! Source folder scanning

mod walker;

pub use walker::scan_source;
