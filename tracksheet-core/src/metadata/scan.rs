use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::TracksheetResult;

/// Enumerate files in `dir` (non-recursive) whose extension equals
/// `extension`.
///
/// Entries keep whatever order the filesystem returns them in; no sort is
/// applied and callers must not assume one. An unreadable directory is an
/// error; an empty result is valid.
pub fn scan_music_dir(dir: &Path, extension: &str) -> TracksheetResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read music directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    tracing::debug!(count = files.len(), dir = %dir.display(), "scanned music directory");
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/scan.rs"]
mod tests;
