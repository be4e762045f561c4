use super::copy_engine::{CopyOutcome, CopyReport};

/// Per-outcome counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub copied: usize,
    pub mismatched: usize,
    pub skipped_fast_path: usize,
    pub skipped_duplicate: usize,
    pub failed: usize,
    pub ignored: usize,
    /// Files already under a destination nested in the source tree.
    pub inside_destination: usize,
    pub sources_deleted: usize,
    pub interrupted: bool,
}

impl ImportSummary {
    pub fn record(&mut self, report: &CopyReport) {
        match report.outcome {
            CopyOutcome::CopiedVerified => self.copied += 1,
            CopyOutcome::CopiedMismatch => self.mismatched += 1,
            CopyOutcome::SkippedFastPath => self.skipped_fast_path += 1,
            CopyOutcome::SkippedDuplicateContent => self.skipped_duplicate += 1,
        }
        if report.source_deleted {
            self.sources_deleted += 1;
        }
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.copied
            + self.mismatched
            + self.skipped_fast_path
            + self.skipped_duplicate
            + self.failed
            + self.ignored
            + self.inside_destination
    }

    /// True when any file failed or did not verify.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0 || self.mismatched > 0
    }

    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "files: {}, copied: {}, skipped (existing): {}, skipped (identical): {}, mismatched: {}, failed: {}, ignored: {}, inside destination: {}, sources deleted: {}",
            self.total_files(),
            self.copied,
            self.skipped_fast_path,
            self.skipped_duplicate,
            self.mismatched,
            self.failed,
            self.ignored,
            self.inside_destination,
            self.sources_deleted
        )
    }
}
