use anyhow::Result;
use clap::Parser;
use console::style;
use import_pics::cli::Cli;
use import_pics::component::PhotoImporter;
use import_pics::component::photo_importer::ImportSummary;
use import_pics::config::Config;
use import_pics::init;
use import_pics::signal::setup_shutdown_signal;
use std::process::ExitCode;

/// Some files failed or did not verify. 2 is taken by clap usage errors.
const EXIT_FILE_FAILURES: u8 = 3;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) if summary.has_failures() => ExitCode::from(EXIT_FILE_FAILURES),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ImportSummary> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;

    PhotoImporter::new(config, cli.import_options(), shutdown_signal)
        .run(&cli.source, &cli.destination)
}
