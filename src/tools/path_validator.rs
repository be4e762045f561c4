use crate::error::{ImportError, ImportResult};
use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}

/// Nothing is created on the destination side until this passes.
pub fn validate_destination(path: &Path) -> ImportResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ImportError::DestinationNotDirectory {
            path: path.to_path_buf(),
        })
    }
}
