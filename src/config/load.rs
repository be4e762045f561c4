use crate::config::types::{Config, FileTypeTable};
use anyhow::{Context, Result};

/// Extension table embedded at compile time.
const FILE_TYPE_TABLE_JSON: &str = include_str!("../data/file_type_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        let file_type_table = Self::load_embedded_file_type_table()?;
        Ok(Self { file_type_table })
    }

    fn load_embedded_file_type_table() -> Result<FileTypeTable> {
        serde_json::from_str(FILE_TYPE_TABLE_JSON)
            .context("Failed to parse embedded file type table")
    }
}
