//! Error conversion utilities for CLI.
//!
//! Converts arinspect-core's typed errors (thiserror) into one-line
//! contextual errors (anyhow) naming the archive.

use anyhow::anyhow;
use arinspect_core::InspectionError;
use console::style;
use std::path::Path;

/// Prints `err` to stderr behind an `Error:` prefix, colored when stderr is
/// a terminal.
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{}", error_line(err));
}

fn error_line(err: &anyhow::Error) -> String {
    format!("{} {err:#}", style("Error:").for_stderr().red().bold())
}

/// Converts `InspectionError` to a user-facing anyhow error with context
pub fn convert_inspection_error(err: InspectionError, archive: &Path) -> anyhow::Error {
    match err {
        InspectionError::Open { source, .. } => {
            anyhow!("cannot open '{}': {}", archive.display(), source)
        }
        InspectionError::UnsupportedInput { .. } => {
            anyhow!(
                "symlinks are not supported, please specify the path to the archive \
                 instead of '{}'",
                archive.display()
            )
        }
        InspectionError::InvalidMagic => {
            anyhow!(
                "cannot read magic number: '{}' is not an ar archive",
                archive.display()
            )
        }
        InspectionError::InvalidHeader(reason) => {
            anyhow!(
                "invalid member header in '{}': {}",
                archive.display(),
                reason
            )
        }
        InspectionError::Truncated { expected, actual } => {
            anyhow!(
                "truncated archive '{}': member declares {} bytes but only {} remain",
                archive.display(),
                expected,
                actual
            )
        }
        InspectionError::Resource(reason) => {
            anyhow!(
                "resource error while reading '{}': {}",
                archive.display(),
                reason
            )
        }
        InspectionError::Io(io_err) => {
            anyhow!(
                "I/O error while reading '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}
