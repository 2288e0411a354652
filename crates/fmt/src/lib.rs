//! # fhir-fmt
//!
//! Reads FHIR JSON resources and writes them back with every property in
//! canonical order: base levels first, then each level's own properties in
//! the order FHIR declares them. Properties the chosen version does not
//! declare are dropped.

pub mod config;

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use meridian_fhir::FhirVersion;
use tracing::{debug, info};

pub use config::{FmtConfig, Mode};

/// Initializes the tracing subscriber on stderr; stdout carries the output.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "meridian_fhir_cli={level},meridian_serde={level},meridian_fhir={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// One input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    fn read(&self, stdin: &mut impl Read) -> anyhow::Result<String> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
            Input::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    pub processed: usize,
    /// Inputs whose text differed from their canonical form.
    pub changed: Vec<Input>,
}

/// Canonical text of one document, newline terminated.
pub fn format_document(version: FhirVersion, text: &str, pretty: bool) -> anyhow::Result<String> {
    let mut canonical = meridian_serde::canonicalize(version, text, pretty)?;
    canonical.push('\n');
    Ok(canonical)
}

/// Whether `text` already is its canonical form. Key order and whitespace
/// both count; only a missing final newline is tolerated.
pub fn is_canonical(text: &str, canonical: &str) -> bool {
    text.trim_end_matches(['\r', '\n']) == canonical.trim_end_matches('\n')
}

/// Runs the formatter over every configured input.
pub fn run(config: &FmtConfig, stdin: &mut impl Read, stdout: &mut impl Write) -> anyhow::Result<Report> {
    let inputs: Vec<Input> = if config.files.is_empty() {
        vec![Input::Stdin]
    } else {
        config.files.iter().map(|path| Input::from_path(path)).collect()
    };

    let mode = config.mode();
    let mut report = Report::default();

    for input in inputs {
        let text = input.read(stdin)?;
        let canonical = format_document(config.fhir_version, &text, config.pretty)
            .with_context(|| format!("{input} is not a valid {} resource", config.fhir_version))?;
        report.processed += 1;

        let unchanged = is_canonical(&text, &canonical);
        debug!(input = %input, unchanged, "formatted");

        match mode {
            Mode::Print => {
                stdout
                    .write_all(canonical.as_bytes())
                    .context("failed to write to stdout")?;
            }
            Mode::Check => {
                if !unchanged {
                    info!(input = %input, "not in canonical form");
                }
            }
            Mode::Write => {
                if let (false, Input::File(path)) = (unchanged, &input) {
                    fs::write(path, &canonical)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(input = %input, "rewritten");
                }
            }
        }

        if !unchanged {
            report.changed.push(input);
        }
    }

    Ok(report)
}
