use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CouponError, Result};

/// Enumerate the absolute paths of every file under `root`, recursively.
///
/// Directories are excluded; everything else (including symlink entries) is
/// kept, so a broken link surfaces later as an open failure rather than being
/// silently skipped. Ordering of the returned paths is unspecified and
/// downstream logic must not rely on it.
pub(crate) fn enumerate_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| CouponError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        paths.push(std::path::absolute(entry.path())?);
    }

    Ok(paths)
}
