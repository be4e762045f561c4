use crate::error::{ImportError, ImportResult};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Creates `root/c0/c1/...` one level at a time and returns the deepest
/// directory. Levels that already exist as directories are accepted; any
/// other failure (permissions, a file in the way) is returned.
pub fn materialize<S: AsRef<str>>(components: &[S], root: &Path) -> ImportResult<PathBuf> {
    components
        .iter()
        .try_fold(root.to_path_buf(), |parent, component| {
            let dir = parent.join(component.as_ref());
            create_one(&dir)?;
            Ok(dir)
        })
}

fn create_one(dir: &Path) -> ImportResult<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            debug!("Created directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(ImportError::DirectoryCreateFailed {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
