use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
}

/// Lists every regular file below `directory`, sorted by path. Symlinks are
/// not followed; unreadable entries are logged and skipped.
pub fn scan_all_files(directory: &Path) -> Result<Vec<FileInfo>> {
    let mut files: Vec<FileInfo> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| FileInfo {
            path: entry.into_path(),
        })
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
