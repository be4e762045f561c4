use crate::error::{ImportError, ImportResult};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DIGEST_LEN: usize = 16;

/// 128-bit content digest, only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDigest([u8; DIGEST_LEN]);

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Hashes a file in `chunk_size` reads so memory use does not depend on
/// file size. Chunk sizes that are multiples of 64 (the BLAKE3 block
/// size) are fastest; the digest is the same for any chunk size.
pub fn calculate_file_hash(path: &Path, chunk_size: usize) -> ImportResult<FileDigest> {
    let mut file = File::open(path).map_err(|e| ImportError::io("open for hashing", path, e))?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|e| ImportError::io("read for hashing", path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize().as_bytes()[..DIGEST_LEN]);
    Ok(FileDigest(digest))
}
