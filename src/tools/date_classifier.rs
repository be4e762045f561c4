//! Works out the `year/month/day` destination subpath for a file.
//!
//! Photos use the EXIF `DateTimeDigitized` tag, which must be exactly
//! `YYYY:MM:DD HH:MM:SS`; other layouts are rejected rather than guessed at.
//! Videos use the filesystem metadata-change time (ctime on Unix). That is
//! not a creation time and is often the copy time for files taken off a
//! memory card.

use super::metadata_reader::TAG_DATE_TIME_DIGITIZED;
use crate::error::{ImportError, ImportResult};
use chrono::{DateTime, Datelike, Local};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static REGEX_EXIF_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}):(\d{2}):(\d{2}) \d{2}:\d{2}:\d{2}$").expect("Invalid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTriple {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateTriple {
    #[must_use]
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// `padded` selects `2014/01/05` over the legacy `2014/1/5`.
    #[must_use]
    pub fn from_date<D: Datelike>(date: &D, padded: bool) -> Self {
        if padded {
            Self::new(
                format!("{:04}", date.year()),
                format!("{:02}", date.month()),
                format!("{:02}", date.day()),
            )
        } else {
            Self::new(
                date.year().to_string(),
                date.month().to_string(),
                date.day().to_string(),
            )
        }
    }

    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        [&self.year, &self.month, &self.day].iter().collect()
    }
}

pub fn classify_photo(tags: &HashMap<String, String>, path: &Path) -> ImportResult<DateTriple> {
    let raw = tags
        .get(TAG_DATE_TIME_DIGITIZED)
        .ok_or_else(|| ImportError::MetadataMissing {
            path: path.to_path_buf(),
            tag: TAG_DATE_TIME_DIGITIZED,
        })?;

    parse_exif_date(raw).ok_or_else(|| ImportError::MetadataMalformed {
        path: path.to_path_buf(),
        tag: TAG_DATE_TIME_DIGITIZED,
        value: raw.clone(),
    })
}

fn parse_exif_date(raw: &str) -> Option<DateTriple> {
    let captures = REGEX_EXIF_DATE_TIME.captures(raw)?;
    Some(DateTriple::new(&captures[1], &captures[2], &captures[3]))
}

pub fn classify_video(path: &Path, padded: bool) -> ImportResult<DateTriple> {
    let changed = metadata_change_time(path)?;
    Ok(DateTriple::from_date(&changed.date_naive(), padded))
}

#[cfg(unix)]
fn metadata_change_time(path: &Path) -> ImportResult<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let metadata = fs::metadata(path).map_err(|e| ImportError::io("stat", path, e))?;
    let changed = DateTime::from_timestamp(metadata.ctime(), 0).ok_or_else(|| {
        ImportError::MetadataUnreadable {
            path: path.to_path_buf(),
            reason: format!("ctime {} out of range", metadata.ctime()),
        }
    })?;
    Ok(changed.with_timezone(&Local))
}

// No ctime outside Unix; the modification time is the closest stand-in.
#[cfg(not(unix))]
fn metadata_change_time(path: &Path) -> ImportResult<DateTime<Local>> {
    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| ImportError::io("stat", path, e))?;
    Ok(DateTime::<Local>::from(modified))
}
