pub mod load;
pub mod types;

pub use types::{
    Config, DEFAULT_CHUNK_SIZE, FileCategory, FileTypeTable, ImportOptions, LOG_FILE_NAME,
};
