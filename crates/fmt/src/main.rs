//! fhir-fmt: canonical property order for FHIR JSON resources.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use meridian_fhir_cli::{FmtConfig, Mode, init_logging, run};
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let config = FmtConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        return Ok(ExitCode::from(2));
    }

    info!(
        fhir_version = %config.fhir_version,
        mode = ?config.mode(),
        inputs = config.files.len(),
        "Starting fhir-fmt"
    );

    let report = run(&config, &mut io::stdin().lock(), &mut io::stdout().lock())?;

    if config.mode() == Mode::Check && !report.changed.is_empty() {
        for input in &report.changed {
            eprintln!("{} is not in canonical form", input);
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
