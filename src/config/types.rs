use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;
pub const LOG_FILE_NAME: &str = "import_pics.log";

/// How a source file is treated by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Photo,
    Video,
    Ignored,
}

impl FileCategory {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Ignored => "ignored",
        }
    }
}

/// Extension lists, stored with the leading dot (".jpg").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "PHOTO_FILE")]
    pub photo_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    /// Photo wins if an extension is listed under both categories.
    #[must_use]
    pub fn categorize_file(&self, path: &Path) -> FileCategory {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return FileCategory::Ignored;
        };
        let listed = |extensions: &[String]| {
            extensions.iter().any(|listed| {
                listed
                    .strip_prefix('.')
                    .is_some_and(|listed| listed.eq_ignore_ascii_case(ext))
            })
        };

        if listed(&self.photo_file) {
            FileCategory::Photo
        } else if listed(&self.video_file) {
            FileCategory::Video
        } else {
            FileCategory::Ignored
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub verbose: bool,
    pub log: bool,
    pub delete_on_copy: bool,
    pub fast_skip: bool,
    pub chunk_size: usize,
    /// Keep the historical unpadded `YYYY/M/D` layout for videos.
    pub legacy_video_dates: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            log: false,
            delete_on_copy: false,
            fast_skip: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            legacy_video_dates: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
}
