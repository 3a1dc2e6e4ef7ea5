//! Data repository access.

use anyhow::{Context, Result};
use gix::bstr::{BString, ByteSlice};
use std::path::Path;

/// File entry in the data repository tree.
#[derive(Debug, Clone)]
pub struct FileEntry {
    path: BString,
}

impl FileEntry {
    /// Creates entry from a slash separated repository path.
    pub fn new(path: impl Into<BString>) -> Self {
        Self { path: path.into() }
    }

    /// File path relative to repository root.
    ///
    /// Returns None if path contains platform-incompatible characters.
    pub fn path(&self) -> Option<&Path> {
        self.path.to_path().ok()
    }

    /// Path as UTF8 string with `/` separators.
    ///
    /// Returns None if path is not valid UTF8.
    pub fn path_str(&self) -> Option<&str> {
        self.path.to_str().ok()
    }

    /// Final path component.
    pub fn file_name(&self) -> Option<&str> {
        self.path_str()
            .map(|path| path.rsplit('/').next().unwrap_or(path))
    }
}

/// Resolves reference to commit object.
fn resolve_commit<'a>(
    repo: &'a gix::Repository,
    ref_name: Option<&str>,
) -> Result<gix::Commit<'a>> {
    match ref_name {
        Some(ref_str) => repo
            .find_reference(ref_str)
            .with_context(|| format!("Failed to find reference: {}", ref_str))?
            .into_fully_peeled_id()
            .with_context(|| format!("Failed to peel reference '{}'", ref_str))?
            .object()
            .context("Failed to resolve object")?
            .try_into_commit()
            .map_err(|_| anyhow::anyhow!("Reference '{}' does not point to a commit", ref_str)),
        None => repo.head_commit().context("Failed to read HEAD commit"),
    }
}

fn open(repo_path: &Path) -> Result<gix::Repository> {
    gix::open(repo_path)
        .with_context(|| format!("Failed to open repository at {}", repo_path.display()))
}

/// Reads blob content from repository at given reference and path.
///
/// # Arguments
///
/// * `repo_path`: Path to the data repository
/// * `ref_name`: Reference name (branch/tag/commit), defaults to HEAD if None
/// * `file_path`: Path to file within repository tree
///
/// # Returns
///
/// Blob content as bytes
///
/// # Errors
///
/// Returns error if:
/// - Repository cannot be opened
/// - Reference cannot be resolved
/// - File does not exist in tree
/// - Blob cannot be read
pub fn read_blob(
    repo_path: impl AsRef<Path>,
    ref_name: Option<&str>,
    file_path: impl AsRef<Path>,
) -> Result<Vec<u8>> {
    let repo = open(repo_path.as_ref())?;
    let commit = resolve_commit(&repo, ref_name)?;

    let mut tree = commit.tree().context("Failed to read commit tree")?;

    let entry = tree
        .peel_to_entry_by_path(file_path.as_ref())
        .context("Failed to traverse tree to path")?
        .ok_or_else(|| {
            anyhow::anyhow!("File not found in tree: {}", file_path.as_ref().display())
        })?;

    let object = entry.object().context("Failed to read tree entry object")?;

    let blob = object
        .try_into_blob()
        .map_err(|_| anyhow::anyhow!("Path is not a blob: {}", file_path.as_ref().display()))?;

    Ok(blob.data.to_vec())
}

/// Reads a UTF8 text file from the repository.
///
/// # Errors
///
/// Returns error if the blob cannot be read or is not valid UTF8.
pub fn read_text(
    repo_path: impl AsRef<Path>,
    ref_name: Option<&str>,
    file_path: &str,
) -> Result<String> {
    let bytes = read_blob(repo_path, ref_name, file_path)?;
    String::from_utf8(bytes).with_context(|| format!("{} contains invalid UTF8", file_path))
}

/// Lists all files in repository at given reference.
///
/// Traverses the tree breadth-first and returns blob entries only; the
/// traversal also records trees, which are dropped here. The data
/// repository mirrors the folder layout the leaderboard is discovered from,
/// so this listing replaces per-folder lookups.
///
/// # Arguments
///
/// * `repo_path`: Path to the data repository
/// * `ref_name`: Reference name (branch/tag/commit), defaults to HEAD if None
///
/// # Errors
///
/// Returns error if:
/// - Repository cannot be opened
/// - Reference cannot be resolved
/// - Tree cannot be traversed
pub fn list_files(repo_path: impl AsRef<Path>, ref_name: Option<&str>) -> Result<Vec<FileEntry>> {
    let repo = open(repo_path.as_ref())?;
    let commit = resolve_commit(&repo, ref_name)?;

    let tree = commit.tree().context("Failed to read commit tree")?;

    let files = tree
        .traverse()
        .breadthfirst
        .files()
        .context("Failed to traverse tree")?
        .into_iter()
        .filter(|entry| entry.mode.is_blob())
        .map(|entry| FileEntry { path: entry.filepath })
        .collect();

    Ok(files)
}
