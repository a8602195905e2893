//! Asset directory traversal.
//!
//! Walks the asset root and captures every regular file as a
//! [`SourceFile`], named by its `/`-separated path relative to the root.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::resolve::slash_path;

/// One captured asset: its name and exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// Fails unless `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root).map_err(Error::AssetDir)?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Captures every file under `root`, sorted by name.
///
/// Links are not followed during the walk. Each non-directory entry is
/// stat'ed again through any symlink: links to directories are skipped,
/// dangling links are an error. Names that are not valid UTF-8 are
/// rejected, so every captured name is distinct.
pub fn collect(root: &Path) -> Result<Vec<SourceFile>> {
    check_root(root)?;
    debug!("Collecting assets under {}", root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let meta = fs::metadata(path).map_err(|e| Error::read(path, e))?;
        if meta.is_dir() {
            debug!("Skipping link to directory {}", path.display());
            continue;
        }

        let contents = fs::read(path).map_err(|e| Error::read(path, e))?;
        let relative = path.strip_prefix(root).unwrap_or(path);
        let name = slash_path(relative).ok_or_else(|| Error::NonUtf8Name(path.to_path_buf()))?;
        debug!(name = %name, bytes = contents.len(), "captured asset");
        files.push(SourceFile { name, contents });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
