//! Discovering and reading units from disk.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::config::AnalyzerConfig;
use super::error::LoadError;
use crate::syntax::SourceUnit;

/// Recursively collect files accepted by `config` under `dir`, sorted.
///
/// Hidden entries (a path component starting with `.`) are skipped, and so
/// are entries the walk cannot read.
pub fn collect_file_paths(dir: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("[SCAN] skipping unreadable entry: {}", err);
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        if relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        {
            continue;
        }
        if entry.file_type().is_file() && config.accepts(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read one file into a unit. The unit path is the file path as given.
pub fn load_file(path: &Path) -> Result<SourceUnit, LoadError> {
    let bytes = std::fs::read(path).map_err(|err| LoadError::io(path, err))?;
    Ok(SourceUnit::new(path.to_string_lossy().as_ref(), bytes))
}
