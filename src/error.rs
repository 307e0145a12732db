//! Error handling for connector-sdk.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::PROGRAM_NAME;

/// Errors that can occur while generating a connector package.
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved output directory is already present on disk.
    #[error("'{}' already exists. Add --reload flag to regenerate it", .path.display())]
    PackageAlreadyExists { path: PathBuf },

    /// The requested package name cannot be used as a Python package.
    #[error("'{name}' is not a valid package name")]
    InvalidPackageName { name: String },

    #[error("'{0}' is not a known connector type (expected one of: CAR, UDI)")]
    UnknownConnectorType(String),

    /// The file mapping tree is malformed.
    #[error("Mapping error: {0}.")]
    MappingError(String),

    /// Template lookup or rendering failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Pattern error: {0}.")]
    RegexError(#[from] regex::Error),

    #[error("Serialization error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error prefixed with the command that produced it and exits.
///
/// # Arguments
/// * `command` - The command line that was running, e.g. `codegen --package | -p`
/// * `err` - The error to report
pub fn default_error_handler(command: &str, err: Error) -> ! {
    log::debug!("{:?}", err);
    eprintln!("{}", format_error(command, &err));
    std::process::exit(1);
}

/// Formats an error the way [`default_error_handler`] reports it.
pub fn format_error(command: &str, err: &Error) -> String {
    if command.is_empty() {
        format!("{}: {}", PROGRAM_NAME, err)
    } else {
        format!("{} {}: {}", PROGRAM_NAME, command, err)
    }
}
