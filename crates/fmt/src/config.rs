//! Command line configuration for `fhir-fmt`.
//!
//! Every option can also be set through the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FHIR_FMT_VERSION` | R4 | FHIR version of the input (`R4`, `R4B`, `R5` or a release number) |
//! | `FHIR_FMT_LOG_LEVEL` | warn | Log level |
//! | `FHIR_FMT_PRETTY` | true | Indent the output |
//!
//! `RUST_LOG`, when set, takes precedence over the log level.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use meridian_fhir::FhirVersion;

/// What to do with each input once it has been canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the canonical form to stdout.
    Print,
    /// Report inputs that are not canonical without touching them.
    Check,
    /// Rewrite files that are not canonical in place.
    Write,
}

/// Configuration for the formatter.
#[derive(Debug, Clone, Parser)]
#[command(name = "fhir-fmt", version)]
#[command(about = "Rewrite FHIR JSON resources in canonical property order")]
pub struct FmtConfig {
    /// FHIR version of the input resources.
    #[arg(long = "fhir-version", env = "FHIR_FMT_VERSION", value_enum, default_value_t = FhirVersion::default())]
    pub fhir_version: FhirVersion,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FHIR_FMT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Indent the output.
    #[arg(long, env = "FHIR_FMT_PRETTY", default_value = "true", action = ArgAction::Set)]
    pub pretty: bool,

    /// Exit with a non-zero status if any input is not canonical.
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite files in place instead of printing them.
    #[arg(short, long)]
    pub write: bool,

    /// Input files. Reads stdin when none are given.
    pub files: Vec<PathBuf>,
}

impl Default for FmtConfig {
    fn default() -> Self {
        Self {
            fhir_version: FhirVersion::default(),
            log_level: "warn".to_string(),
            pretty: true,
            check: false,
            write: false,
            files: Vec::new(),
        }
    }
}

impl FmtConfig {
    pub fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.write {
            Mode::Write
        } else {
            Mode::Print
        }
    }

    /// Validates the configuration and returns any errors.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.write && self.files.is_empty() {
            errors.push("--write needs at least one file; stdin cannot be rewritten".to_string());
        }

        let stdin_count = self.files.iter().filter(|path| path.as_os_str() == "-").count();
        if stdin_count > 0 && self.write {
            errors.push("--write cannot rewrite stdin (`-`)".to_string());
        }
        if stdin_count > 1 {
            errors.push("stdin (`-`) can only be read once".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FmtConfig::try_parse_from(["fhir-fmt"]).unwrap();
        assert_eq!(config.fhir_version, FhirVersion::R4);
        assert!(config.pretty);
        assert_eq!(config.mode(), Mode::Print);
        assert!(config.files.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_version_accepts_release_numbers() {
        let config = FmtConfig::try_parse_from(["fhir-fmt", "--fhir-version", "5.0.0"]).unwrap();
        assert_eq!(config.fhir_version, FhirVersion::R5);

        let config = FmtConfig::try_parse_from(["fhir-fmt", "--fhir-version", "R4B"]).unwrap();
        assert_eq!(config.fhir_version, FhirVersion::R4B);

        assert!(FmtConfig::try_parse_from(["fhir-fmt", "--fhir-version", "R6"]).is_err());
    }

    #[test]
    fn test_pretty_can_be_turned_off() {
        let config = FmtConfig::try_parse_from(["fhir-fmt", "--pretty", "false"]).unwrap();
        assert!(!config.pretty);
    }

    #[test]
    fn test_check_conflicts_with_write() {
        assert!(FmtConfig::try_parse_from(["fhir-fmt", "--check", "--write", "a.json"]).is_err());

        let config = FmtConfig::try_parse_from(["fhir-fmt", "--check", "a.json", "b.json"]).unwrap();
        assert_eq!(config.mode(), Mode::Check);
        assert_eq!(config.files.len(), 2);
    }

    #[test]
    fn test_validate_write_without_files() {
        let config = FmtConfig {
            write: true,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("--write")));
    }

    #[test]
    fn test_validate_stdin_given_twice() {
        let config = FmtConfig::try_parse_from(["fhir-fmt", "-", "a.json", "-"]).unwrap();
        let errors = config.validate().unwrap_err();
        assert_eq!(errors, ["stdin (`-`) can only be read once"]);

        let config = FmtConfig::try_parse_from(["fhir-fmt", "-", "a.json"]).unwrap();
        assert!(config.validate().is_ok());
    }
}
