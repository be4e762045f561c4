//! Date-based photo and video import.
//!
//! Walks a source tree, works out a capture date for each photo or video and
//! copies it to `<destination>/<year>/<month>/<day>/`, verifying every copy.

mod copy_engine;
mod import_summary;
mod main;

pub use copy_engine::{CopyEngine, CopyOutcome, CopyReport, DestinationState, probe_destination};
pub use import_summary::ImportSummary;
pub use main::PhotoImporter;
