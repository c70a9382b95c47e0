//! SourceFile - a single file found under a texture folder

use std::path::PathBuf;

/// A file scheduled for copying out of a source folder
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Relative path from the source folder root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

impl SourceFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_file() {
        let file = SourceFile::new(PathBuf::from("textures/Tires01_d.DDS"), 4096);

        assert_eq!(file.path, PathBuf::from("textures/Tires01_d.DDS"));
        assert_eq!(file.size, 4096);
    }
}
