use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mapscore_core::errors::error_code::MapscoreErrorCode;
use mapscore_core::tracing::init_tracing;
use mapscore_rescore::cli::Cli;
use mapscore_rescore::{BatchRescorer, OppaiOracle, RescoreError, RunReport};
use mapscore_storage::MapStorageEngine;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            report.log_summary();
            for line in report.skipped_lines() {
                eprintln!("{line}");
            }
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            eprintln!("error: [{}] {e}", e.error_code());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport, RescoreError> {
    let config = cli.resolve_config()?;
    let mut store = MapStorageEngine::open(Path::new(&config.store.path), config.store.durability)?;
    let oracle = OppaiOracle::new(&config.oracle.command);

    let stdout = std::io::stdout();
    let mut rescorer = BatchRescorer::from_config(oracle, stdout.lock(), &config);
    rescorer.run(&mut store)
}
