//! SourceTree - the scanned contents of one source folder

use super::SourceFile;
use std::path::PathBuf;

/// Files and directories found under a source folder, in walk order
///
/// All paths are relative to the scanned folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTree {
    /// Files to copy
    pub files: Vec<SourceFile>,

    /// Subdirectories (empty ones must still be created)
    pub dirs: Vec<PathBuf>,

    /// Entries the walker could not read, with the reason
    pub unreadable: Vec<(PathBuf, String)>,

    /// Sum of all file sizes
    pub total_size: u64,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, updating the byte total
    pub fn push_file(&mut self, file: SourceFile) {
        self.total_size += file.size;
        self.files.push(file);
    }

    pub fn push_dir(&mut self, dir: PathBuf) {
        self.dirs.push(dir);
    }

    /// Record an entry that could not be read during the walk
    pub fn push_unreadable(&mut self, path: PathBuf, reason: String) {
        self.unreadable.push((path, reason));
    }

    /// Return the number of files in the tree
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_is_empty() {
        let tree = SourceTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.total_size, 0);
    }

    #[test]
    fn test_push_file_tracks_total_size() {
        let mut tree = SourceTree::new();
        tree.push_file(SourceFile::new(PathBuf::from("a.dds"), 100));
        tree.push_file(SourceFile::new(PathBuf::from("b/c.dds"), 250));
        tree.push_dir(PathBuf::from("b"));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_size, 350);
        assert_eq!(tree.dirs, vec![PathBuf::from("b")]);
    }

    #[test]
    fn test_files_keep_walk_order() {
        let mut tree = SourceTree::new();
        for name in ["z.dds", "a.dds", "m.dds"] {
            tree.push_file(SourceFile::new(PathBuf::from(name), 1));
        }

        let names: Vec<_> = tree.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("z.dds"),
                PathBuf::from("a.dds"),
                PathBuf::from("m.dds")
            ]
        );
    }

    #[test]
    fn test_unreadable_entries_are_recorded() {
        let mut tree = SourceTree::new();
        tree.push_unreadable(PathBuf::from("locked"), "permission denied".to_string());
        assert_eq!(tree.unreadable.len(), 1);
        assert!(tree.is_empty());
    }
}
