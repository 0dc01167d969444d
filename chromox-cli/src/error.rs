//! Error handling for the ChromoX CLI

use chromox_core::IdeogramError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ChromoX CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parsing error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Rendering error: {0}")]
    Rendering(#[from] IdeogramError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn parse<S: Into<String>>(file: S, message: S) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Parse { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Annotations are JSON objects: {\"length\": N, \"regions\": {\"PAR\": [{\"start\": 0, \"end\": 10}]}}\n\
                 • Variants are a JSON array: [{\"position\": N, \"status\": \"CONFIRMED\"}]\n\
                 • Status values are CONFIRMED, NOVEL, CONFLICT or PENDING",
            );
        }

        CliError::Rendering(IdeogramError::InvalidLength { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Set \"length\" in the annotation file to the chromosome length in bases\n\
                 • Check that the annotation was exported after the reference was loaded",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your chromox.toml configuration file\n\
                 • Use 'chromox config --example' to generate a sample configuration",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
