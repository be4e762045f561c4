use super::copy_engine::{CopyEngine, CopyReport};
use super::import_summary::ImportSummary;
use crate::config::{Config, FileCategory, ImportOptions, LOG_FILE_NAME};
use crate::error::{ImportError, ImportResult};
use crate::tools::{
    DateTriple, ExifMetadataReader, FileInfo, MetadataReader, Reporter, RunLog, classify_photo,
    classify_video, decompose, materialize, scan_all_files, validate_destination,
    validate_directory_exists,
};
use anyhow::{Context, Result};
use console::style;
use log::{info, warn};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Imports photos and videos from a source tree into
/// `<destination>/<year>/<month>/<day>/<original name>`, one file at a time.
pub struct PhotoImporter {
    config: Config,
    options: ImportOptions,
    metadata_reader: Box<dyn MetadataReader>,
    shutdown_signal: Arc<AtomicBool>,
}

impl PhotoImporter {
    #[must_use]
    pub fn new(config: Config, options: ImportOptions, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            options,
            metadata_reader: Box::new(ExifMetadataReader),
            shutdown_signal,
        }
    }

    #[must_use]
    pub fn with_metadata_reader(mut self, metadata_reader: Box<dyn MetadataReader>) -> Self {
        self.metadata_reader = metadata_reader;
        self
    }

    /// Errors only for preflight problems; per-file failures are counted in
    /// the summary and the run moves on to the next file.
    pub fn run(&self, source: &Path, destination: &Path) -> Result<ImportSummary> {
        validate_destination(destination)?;
        validate_directory_exists(source)?;

        let source_root = source
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", source.display()))?;
        let destination_root = destination
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", destination.display()))?;

        let mut run_log = self.open_run_log(&destination_root);
        run_log.info(&format!(
            "Import started: {} -> {}",
            source_root.display(),
            destination_root.display()
        ));

        let files = scan_all_files(&source_root)?;
        info!("Found {} files under {}", files.len(), source_root.display());

        let reporter = Reporter::new(self.options.verbose, files.len() as u64);
        let mut summary = ImportSummary::default();

        let skipped_subtree = nested_destination(&source_root, &destination_root);
        if let Some(nested) = skipped_subtree {
            let message = format!(
                "Destination {} is inside the source; files already under it are skipped",
                nested.display()
            );
            reporter.warn(&message);
            run_log.warn(&message);
        }

        for file in &files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("Interrupted, stopping before {}", file.path.display());
                run_log.warn("Import interrupted");
                summary.interrupted = true;
                break;
            }

            if skipped_subtree.is_some_and(|nested| file.path.starts_with(nested)) {
                summary.inside_destination += 1;
                reporter.advance(file_label(&file.path));
                continue;
            }

            self.process_file(file, &destination_root, &mut summary, &mut run_log, &reporter);
            reporter.advance(file_label(&file.path));
        }

        reporter.finish();
        run_log.info(&format!("Import finished: {}", summary.describe()));
        run_log.finish();

        self.print_result(&summary);
        Ok(summary)
    }

    fn open_run_log(&self, destination_root: &Path) -> RunLog {
        if !self.options.log {
            return RunLog::disabled();
        }
        let log_path = destination_root.join(LOG_FILE_NAME);
        match RunLog::create(&log_path) {
            Ok(run_log) => run_log,
            Err(e) => {
                eprintln!(
                    "{} {e}, continuing without a run log",
                    style("warning:").yellow().bold()
                );
                RunLog::disabled()
            }
        }
    }

    fn process_file(
        &self,
        file: &FileInfo,
        destination_root: &Path,
        summary: &mut ImportSummary,
        run_log: &mut RunLog,
        reporter: &Reporter,
    ) {
        let category = self.config.file_type_table.categorize_file(&file.path);
        if category == FileCategory::Ignored {
            summary.ignored += 1;
            return;
        }
        reporter.detail(format!(
            "[{}] {}",
            category.display_name(),
            file.path.display()
        ));

        match self.import_file(&file.path, category, destination_root, run_log, reporter) {
            Ok(report) => summary.record(&report),
            Err(e) => {
                let message = format!("Failed to import {}: {e}", file.path.display());
                reporter.error(&message);
                run_log.error(&message);
                summary.failed += 1;
            }
        }
    }

    /// Classifies, materializes the date directory and copies one file.
    pub fn import_file(
        &self,
        path: &Path,
        category: FileCategory,
        destination_root: &Path,
        run_log: &mut RunLog,
        reporter: &Reporter,
    ) -> ImportResult<CopyReport> {
        let date = self.date_for(path, category)?;
        let target = self.destination_for(path, &date, destination_root)?;

        CopyEngine::new(&self.options).copy_with_policy(path, &target, run_log, reporter)
    }

    fn date_for(&self, path: &Path, category: FileCategory) -> ImportResult<DateTriple> {
        match category {
            FileCategory::Photo => {
                let tags = {
                    let file = File::open(path).map_err(|e| ImportError::io("open", path, e))?;
                    self.metadata_reader.read_tags(&file, path)?
                };
                classify_photo(&tags, path)
            }
            FileCategory::Video => classify_video(path, !self.options.legacy_video_dates),
            FileCategory::Ignored => Err(ImportError::io(
                "classify",
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "unsupported file type"),
            )),
        }
    }

    fn destination_for(
        &self,
        path: &Path,
        date: &DateTriple,
        destination_root: &Path,
    ) -> ImportResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            ImportError::io(
                "read file name",
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        let components = decompose(&date.relative_path());
        let directory = materialize(&components, destination_root)?;
        Ok(directory.join(file_name))
    }

    fn print_result(&self, summary: &ImportSummary) {
        println!();
        println!("{}", style("=== Import summary ===").cyan().bold());
        println!("  Copied: {}", style(summary.copied).green());

        let skipped = summary.skipped_fast_path + summary.skipped_duplicate;
        if skipped > 0 {
            println!("  Already imported: {}", style(skipped).yellow());
        }
        if summary.sources_deleted > 0 {
            println!("  Sources deleted: {}", summary.sources_deleted);
        }
        if summary.mismatched > 0 {
            println!("  Hash mismatches: {}", style(summary.mismatched).red());
        }
        if summary.failed > 0 {
            println!("  Failed: {}", style(summary.failed).red());
        }
        if summary.inside_destination > 0 {
            println!("  Inside destination: {}", summary.inside_destination);
        }
        if summary.interrupted {
            println!("  {}", style("Interrupted before all files were processed").yellow());
        }

        info!("Import finished - {}", summary.describe());
    }
}

/// The destination subtree to leave alone, when it sits strictly inside the
/// source. A source inside the destination imports normally.
fn nested_destination<'a>(source_root: &Path, destination_root: &'a Path) -> Option<&'a Path> {
    (destination_root != source_root && destination_root.starts_with(source_root))
        .then_some(destination_root)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileTypeTable;
    use crate::tools::TAG_DATE_TIME_DIGITIZED;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    /// Returns the same tags for every file.
    struct FixedTags(HashMap<String, String>);

    impl MetadataReader for FixedTags {
        fn read_tags(&self, _file: &File, _path: &Path) -> ImportResult<HashMap<String, String>> {
            Ok(self.0.clone())
        }
    }

    /// Reads the date straight from the file's content.
    struct DateInContent;

    impl MetadataReader for DateInContent {
        fn read_tags(&self, _file: &File, path: &Path) -> ImportResult<HashMap<String, String>> {
            let content = fs::read_to_string(path).map_err(|e| ImportError::io("read", path, e))?;
            Ok(HashMap::from([(
                TAG_DATE_TIME_DIGITIZED.to_string(),
                content.trim().to_string(),
            )]))
        }
    }

    fn config() -> Config {
        Config {
            file_type_table: FileTypeTable {
                photo_file: vec![".jpg".to_string(), ".cr2".to_string()],
                video_file: vec![".mov".to_string()],
            },
        }
    }

    fn importer(options: ImportOptions, reader: Box<dyn MetadataReader>) -> PhotoImporter {
        PhotoImporter::new(config(), options, Arc::new(AtomicBool::new(false)))
            .with_metadata_reader(reader)
    }

    fn digitized(value: &str) -> Box<dyn MetadataReader> {
        Box::new(FixedTags(HashMap::from([(
            TAG_DATE_TIME_DIGITIZED.to_string(),
            value.to_string(),
        )])))
    }

    #[test]
    fn test_photo_lands_in_date_directory() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("IMG_0028.CR2"), "raw").unwrap();

        let summary = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"))
            .run(source.path(), destination.path())
            .unwrap();

        assert_eq!(summary.copied, 1);
        assert!(destination.path().join("2014/01/01/IMG_0028.CR2").exists());
        assert!(source.path().join("IMG_0028.CR2").exists());
    }

    #[test]
    fn test_bad_metadata_does_not_stop_the_run() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("a_broken.jpg"), "not a date").unwrap();
        fs::write(source.path().join("b_good.jpg"), "2015:06:30 08:00:00").unwrap();

        let summary = importer(ImportOptions::default(), Box::new(DateInContent))
            .run(source.path(), destination.path())
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.copied, 1);
        assert!(summary.has_failures());
        assert!(destination.path().join("2015/06/30/b_good.jpg").exists());
    }

    #[test]
    fn test_unknown_extensions_are_ignored() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("MVI_0001.THM"), "sidecar").unwrap();
        fs::write(source.path().join("notes.txt"), "hello").unwrap();

        let summary = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"))
            .run(source.path(), destination.path())
            .unwrap();

        assert_eq!(summary.ignored, 2);
        assert_eq!(summary.copied, 0);
        assert_eq!(fs::read_dir(destination.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("IMG_0001.JPG"), "pixels").unwrap();
        let importer = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"));

        let first = importer.run(source.path(), destination.path()).unwrap();
        let second = importer.run(source.path(), destination.path()).unwrap();

        assert_eq!(first.copied, 1);
        assert_eq!(second.copied, 0);
        assert_eq!(second.skipped_duplicate, 1);
    }

    #[test]
    fn test_video_uses_change_time_directory() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("MVI_0001.MOV"), "frames").unwrap();

        let summary = importer(ImportOptions::default(), digitized("ignored"))
            .run(source.path(), destination.path())
            .unwrap();

        assert_eq!(summary.copied, 1);
        let today = DateTriple::from_date(&chrono::Local::now().date_naive(), true);
        let expected = destination
            .path()
            .join(today.relative_path())
            .join("MVI_0001.MOV");
        assert!(expected.exists(), "missing {}", expected.display());
    }

    #[test]
    fn test_log_file_is_written_to_destination() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("IMG_0001.JPG"), "pixels").unwrap();
        let options = ImportOptions {
            log: true,
            ..ImportOptions::default()
        };

        importer(options, digitized("2014:01:01 10:30:00"))
            .run(source.path(), destination.path())
            .unwrap();

        let log = fs::read_to_string(destination.path().join(LOG_FILE_NAME)).unwrap();
        assert!(log.contains("Copied"));
        assert!(log.contains("Import finished"));
    }

    #[test]
    fn test_destination_must_be_a_directory() {
        let source = TempDir::new().unwrap();
        let missing = source.path().join("missing");

        let err = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"))
            .run(source.path(), &missing)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ImportError>(),
            Some(ImportError::DestinationNotDirectory { .. })
        ));
    }

    #[test]
    fn test_interrupted_run_touches_nothing() {
        let source = TempDir::new().unwrap();
        let destination = TempDir::new().unwrap();
        fs::write(source.path().join("IMG_0001.JPG"), "pixels").unwrap();
        let importer = PhotoImporter::new(
            config(),
            ImportOptions::default(),
            Arc::new(AtomicBool::new(true)),
        )
        .with_metadata_reader(digitized("2014:01:01 10:30:00"));

        let summary = importer.run(source.path(), destination.path()).unwrap();

        assert!(summary.interrupted);
        assert_eq!(summary.total_files(), 0);
    }

    #[test]
    fn test_nested_destination_is_not_reimported() {
        let source = TempDir::new().unwrap();
        let destination = source.path().join("library");
        fs::create_dir(&destination).unwrap();
        fs::write(source.path().join("IMG_0001.JPG"), "pixels").unwrap();
        let importer = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"));

        importer.run(source.path(), &destination).unwrap();
        let second = importer.run(source.path(), &destination).unwrap();

        assert_eq!(second.skipped_duplicate, 1);
        assert_eq!(second.inside_destination, 1);
        assert_eq!(second.ignored, 0);
    }

    #[test]
    fn test_source_inside_destination_is_imported() {
        let library = TempDir::new().unwrap();
        let incoming = library.path().join("incoming");
        fs::create_dir(&incoming).unwrap();
        fs::write(incoming.join("IMG_0028.CR2"), "raw").unwrap();

        let summary = importer(ImportOptions::default(), digitized("2014:01:01 10:30:00"))
            .run(&incoming, library.path())
            .unwrap();

        assert_eq!(summary.copied, 1);
        assert_eq!(summary.inside_destination, 0);
        assert_eq!(summary.ignored, 0);
        assert!(library.path().join("2014/01/01/IMG_0028.CR2").exists());
        assert!(incoming.join("IMG_0028.CR2").exists());
    }

    #[test]
    fn test_nested_destination_only_for_strict_subdirectory() {
        let root = Path::new("/photos");
        assert_eq!(
            nested_destination(root, Path::new("/photos/library")),
            Some(Path::new("/photos/library"))
        );
        assert_eq!(nested_destination(root, root), None);
        assert_eq!(nested_destination(Path::new("/photos/incoming"), root), None);
        assert_eq!(nested_destination(root, Path::new("/photos-old")), None);
    }
}
