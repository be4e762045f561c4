use crate::error::{ImportError, ImportResult};
use exif::{In, Tag, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const TAG_DATE_TIME_DIGITIZED: &str = "DateTimeDigitized";

/// Source of embedded photo metadata as a tag name to value map.
pub trait MetadataReader {
    fn read_tags(&self, file: &File, path: &Path) -> ImportResult<HashMap<String, String>>;
}

/// Reads the EXIF digitized date from the primary image. A file without any EXIF
/// block yields an empty map rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifMetadataReader;

const DATE_TAGS: [(Tag, &str); 1] = [(Tag::DateTimeDigitized, TAG_DATE_TIME_DIGITIZED)];

impl MetadataReader for ExifMetadataReader {
    fn read_tags(&self, file: &File, path: &Path) -> ImportResult<HashMap<String, String>> {
        let mut reader = BufReader::new(file);
        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => return Ok(HashMap::new()),
            Err(e) => {
                return Err(ImportError::MetadataUnreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let tags = DATE_TAGS
            .iter()
            .filter_map(|(tag, name)| {
                let field = exif.get_field(*tag, In::PRIMARY)?;
                match &field.value {
                    Value::Ascii(values) => values
                        .first()
                        .map(|raw| ((*name).to_string(), String::from_utf8_lossy(raw).into_owned())),
                    _ => None,
                }
            })
            .collect();

        Ok(tags)
    }
}
