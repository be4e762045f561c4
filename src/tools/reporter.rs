use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;

/// Console output for a run. Verbose runs print one line per step;
/// quiet runs show a progress bar instead. Warnings and errors are
/// always printed.
pub struct Reporter {
    verbose: bool,
    progress_bar: ProgressBar,
}

impl Reporter {
    #[must_use]
    pub fn new(verbose: bool, total: u64) -> Self {
        let progress_bar = if verbose {
            ProgressBar::hidden()
        } else {
            let progress_bar = ProgressBar::new(total);
            progress_bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .map(|s| s.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            progress_bar
        };

        Self {
            verbose,
            progress_bar,
        }
    }

    /// No console output apart from warnings and errors.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            verbose: false,
            progress_bar: ProgressBar::hidden(),
        }
    }

    pub fn detail(&self, message: impl Display) {
        if self.verbose {
            println!("{message}");
        }
    }

    pub fn warn(&self, message: impl Display) {
        self.progress_bar
            .suspend(|| eprintln!("{} {}", style("warning:").yellow().bold(), message));
    }

    pub fn error(&self, message: impl Display) {
        self.progress_bar
            .suspend(|| eprintln!("{} {}", style("error:").red().bold(), message));
    }

    pub fn advance(&self, message: impl Display) {
        self.progress_bar.set_message(message.to_string());
        self.progress_bar.inc(1);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}
