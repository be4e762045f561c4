mod date_classifier;
mod dir_materializer;
mod file_hasher;
mod file_scanner;
mod metadata_reader;
mod path_components;
mod path_validator;
mod reporter;
mod run_log;

pub use date_classifier::{DateTriple, classify_photo, classify_video};
pub use dir_materializer::materialize;
pub use file_hasher::{FileDigest, calculate_file_hash};
pub use file_scanner::{FileInfo, scan_all_files};
pub use metadata_reader::{ExifMetadataReader, MetadataReader, TAG_DATE_TIME_DIGITIZED};
pub use path_components::decompose;
pub use path_validator::{validate_destination, validate_directory_exists};
pub use reporter::Reporter;
pub use run_log::RunLog;
