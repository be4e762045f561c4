use crate::config::{DEFAULT_CHUNK_SIZE, ImportOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "import",
    version,
    about = "Import photos and videos into YYYY/MM/DD folders"
)]
pub struct Cli {
    /// Directory to import from
    pub source: PathBuf,

    /// Existing directory to place imported files in
    pub destination: PathBuf,

    /// Print a line for every file
    #[arg(short, long)]
    pub verbose: bool,

    /// Write events to <destination>/import_pics.log (truncated each run)
    #[arg(long)]
    pub log: bool,

    /// Delete each source file once its copy is verified or already present
    #[arg(long)]
    pub delete_on_copy: bool,

    /// Skip files whose destination already exists without comparing content
    #[arg(long)]
    pub fast_skip: bool,

    /// Read size in bytes used when hashing
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Use unpadded YYYY/M/D folders for videos, as older versions did
    #[arg(long)]
    pub legacy_video_dates: bool,
}

impl Cli {
    #[must_use]
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            verbose: self.verbose,
            log: self.log,
            delete_on_copy: self.delete_on_copy,
            fast_skip: self.fast_skip,
            chunk_size: self.chunk_size,
            legacy_video_dates: self.legacy_video_dates,
        }
    }
}

fn parse_chunk_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("chunk size must be greater than zero".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
