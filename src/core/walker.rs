// src/core/walker.rs
use crate::utils::is_hidden;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively discovers candidate documents under `root`.
///
/// Entries are visited depth-first and sorted by file name at each level,
/// so repeated runs over unchanged input yield an identical order. Any
/// entry whose name begins with a dot is skipped along with its entire
/// subtree; the root itself is exempt so that scanning a dot-named
/// directory still works. Every other non-directory entry is yielded —
/// there is no extension filtering, callers wanting only markdown input
/// must pre-filter.
///
/// # Errors
///
/// Returns an error if `root` or any directory beneath it cannot be read.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("searching {}", root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            if entry.depth() > 0 {
                debug!("found sub directory {}", entry.path().display());
            }
        } else {
            debug!("found file {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
