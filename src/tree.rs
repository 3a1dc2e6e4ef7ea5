//! In-memory directory tree over the data repository listing.
//!
//! Discovery asks the same questions the hosting API answered folder by
//! folder ("which directories are in here", "is there a standings.md"), and
//! the tree answers them in O(depth) from a single listing.

use crate::FileEntry;
use std::collections::HashMap;

/// In-memory representation of the repository directory tree.
///
/// # Examples
///
/// ```
/// use podium::{FileEntry, FileTree};
///
/// let tree = FileTree::from_files(vec![FileEntry::new("group/cup/README.md")]);
/// assert_eq!(tree.subdirs_at("group"), vec!["cup"]);
/// assert!(tree.has_file("group/cup", "README.md"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    root: DirNode,
}

#[derive(Debug, Clone, Default)]
struct DirNode {
    files: Vec<FileEntry>,
    subdirs: HashMap<String, DirNode>,
}

impl FileTree {
    /// Builds tree from flat file list in single pass.
    ///
    /// Entries whose path is not valid UTF8 are skipped.
    pub fn from_files(files: Vec<FileEntry>) -> Self {
        let mut root = DirNode::default();

        for file in files {
            let Some(path_str) = file.path_str() else {
                continue;
            };
            let components: Vec<&str> = path_str.split('/').collect();
            let Some((_, dirs)) = components.split_last() else {
                continue;
            };

            let mut current = &mut root;
            for &component in dirs {
                current = current.subdirs.entry(component.to_string()).or_default();
            }
            current.files.push(file.clone());
        }

        Self { root }
    }

    /// Returns files directly at the given directory level.
    ///
    /// # Arguments
    ///
    /// * `dir_path`: Directory path (empty string for root)
    pub fn files_at(&self, dir_path: &str) -> &[FileEntry] {
        self.get_node(dir_path)
            .map(|node| node.files.as_slice())
            .unwrap_or(&[])
    }

    /// Returns immediate subdirectory names at the given level, sorted alphabetically.
    ///
    /// # Arguments
    ///
    /// * `dir_path`: Directory path (empty string for root)
    pub fn subdirs_at(&self, dir_path: &str) -> Vec<&str> {
        self.get_node(dir_path)
            .map(|node| {
                let mut subdirs: Vec<&str> = node.subdirs.keys().map(|s| s.as_str()).collect();
                subdirs.sort();
                subdirs
            })
            .unwrap_or_default()
    }

    /// Whether a file with `name` sits directly in `dir_path`.
    pub fn has_file(&self, dir_path: &str, name: &str) -> bool {
        self.files_at(dir_path)
            .iter()
            .any(|file| file.file_name() == Some(name))
    }

    fn get_node(&self, dir_path: &str) -> Option<&DirNode> {
        let dir_path = dir_path.trim_matches('/');
        if dir_path.is_empty() {
            return Some(&self.root);
        }

        let mut current = &self.root;
        for component in dir_path.split('/') {
            current = current.subdirs.get(component)?;
        }

        Some(current)
    }
}
