//! Error handling for plugsmith.
//! Defines the error type and result alias shared by both generators.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a configuration class or scaffolding a plugin.
///
/// Implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// File system failures that are not directory conflicts
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The schema input file does not exist
    #[error("Cannot load file {path}")]
    InputNotFoundError { path: String },

    /// A YAML answers document could not be parsed
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// The YAML configuration document is malformed
    #[error("YAML error: {0}.")]
    YamlScanError(#[from] yaml_rust2::scanner::ScanError),

    /// A JSON answers document could not be parsed
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// The document parsed but has a shape the generator cannot declare
    #[error("Schema error: {0}.")]
    SchemaError(String),

    /// Template compilation or rendering failed
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The terminal interaction failed (closed stdin, not a TTY, ...)
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Scaffold answers are incomplete
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Error: please select another directory as {output_dir} already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Cannot create folder {folder}: a non-folder file already exists.")]
    FolderConflictError { folder: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
