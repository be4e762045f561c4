use crate::config::ImportOptions;
use crate::error::{ImportError, ImportResult};
use crate::tools::{FileDigest, Reporter, RunLog, calculate_file_hash};
use console::style;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Byte copy from source to destination, `fs::copy` outside tests.
type Copier = fn(&Path, &Path) -> io::Result<u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    CopiedVerified,
    CopiedMismatch,
    SkippedFastPath,
    SkippedDuplicateContent,
}

impl CopyOutcome {
    /// A mismatched copy never releases the source.
    #[must_use]
    pub const fn allows_source_deletion(self) -> bool {
        !matches!(self, Self::CopiedMismatch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    Absent,
    ExistsIdentical,
    ExistsDifferent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub outcome: CopyOutcome,
    pub source_deleted: bool,
}

/// Compares an existing destination against an already computed source digest.
pub fn probe_destination(
    source_digest: &FileDigest,
    destination: &Path,
    chunk_size: usize,
) -> ImportResult<DestinationState> {
    match fs::metadata(destination) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(DestinationState::Absent),
        Err(e) => Err(ImportError::io("stat destination", destination, e)),
        Ok(metadata) if !metadata.is_file() => Ok(DestinationState::ExistsDifferent),
        Ok(_) => {
            let destination_digest = calculate_file_hash(destination, chunk_size)?;
            if destination_digest == *source_digest {
                Ok(DestinationState::ExistsIdentical)
            } else {
                Ok(DestinationState::ExistsDifferent)
            }
        }
    }
}

/// Copies one file and checks the copy by hashing both sides.
///
/// With `fast_skip`, an existing destination is taken as done without
/// looking at its content, so a different file with the same name is never
/// noticed. Without it, an identical destination is skipped and anything
/// else is overwritten. The source is only deleted (when `delete_on_copy`
/// is set) after a skip or a verified copy.
pub struct CopyEngine<'a> {
    options: &'a ImportOptions,
    copier: Copier,
}

impl<'a> CopyEngine<'a> {
    #[must_use]
    pub fn new(options: &'a ImportOptions) -> Self {
        Self {
            options,
            copier: copy_bytes,
        }
    }

    #[cfg(test)]
    fn with_copier(mut self, copier: Copier) -> Self {
        self.copier = copier;
        self
    }

    pub fn copy_with_policy(
        &self,
        source: &Path,
        destination: &Path,
        run_log: &mut RunLog,
        reporter: &Reporter,
    ) -> ImportResult<CopyReport> {
        if self.options.fast_skip && destination.exists() {
            let message = format!(
                "Skipping {}: {} already exists",
                source.display(),
                destination.display()
            );
            reporter.detail(style(&message).dim());
            run_log.info(&message);
            return Ok(self.finish(CopyOutcome::SkippedFastPath, source, run_log, reporter));
        }

        let chunk_size = self.options.chunk_size;
        let before = calculate_file_hash(source, chunk_size)?;

        if probe_destination(&before, destination, chunk_size)? == DestinationState::ExistsIdentical
        {
            let message = format!(
                "Skipping {}: identical copy at {}",
                source.display(),
                destination.display()
            );
            reporter.detail(style(&message).dim());
            run_log.info(&message);
            return Ok(self.finish(
                CopyOutcome::SkippedDuplicateContent,
                source,
                run_log,
                reporter,
            ));
        }

        reporter.detail(format!(
            "Copying {} to {}...",
            source.display(),
            destination.display()
        ));
        (self.copier)(source, destination).map_err(|e| ImportError::io("copy", source, e))?;
        let after = calculate_file_hash(destination, chunk_size)?;

        if before == after {
            reporter.detail(style("Done!").green());
            run_log.info(&format!(
                "Copied {} to {} ({before})",
                source.display(),
                destination.display()
            ));
            Ok(self.finish(CopyOutcome::CopiedVerified, source, run_log, reporter))
        } else {
            let message = format!(
                "Hash mismatch copying {} to {} (source {before}, copy {after}); source kept",
                source.display(),
                destination.display()
            );
            reporter.warn(&message);
            run_log.warn(&message);
            Ok(self.finish(CopyOutcome::CopiedMismatch, source, run_log, reporter))
        }
    }

    fn finish(
        &self,
        outcome: CopyOutcome,
        source: &Path,
        run_log: &mut RunLog,
        reporter: &Reporter,
    ) -> CopyReport {
        let source_deleted = self.options.delete_on_copy
            && outcome.allows_source_deletion()
            && remove_source(source, run_log, reporter);

        CopyReport {
            outcome,
            source_deleted,
        }
    }
}

fn copy_bytes(source: &Path, destination: &Path) -> io::Result<u64> {
    fs::copy(source, destination)
}

fn remove_source(source: &Path, run_log: &mut RunLog, reporter: &Reporter) -> bool {
    match fs::remove_file(source) {
        Ok(()) => {
            reporter.detail(format!("Deleted {}", source.display()));
            run_log.info(&format!("Deleted {}", source.display()));
            true
        }
        Err(e) => {
            let message = format!("Could not delete {}: {e}", source.display());
            reporter.warn(&message);
            run_log.warn(&message);
            false
        }
    }
}
