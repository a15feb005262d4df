//! Error types for the command-line front end
//!
//! User-input mistakes (bad flags, unknown commands) are kept apart from
//! operational failures so callers can decide whether usage is relevant.

use thiserror::Error;

/// Main error type for argument resolution and dispatch
#[derive(Error, Debug)]
pub enum CliError {
    /// A global flag that may only appear once was repeated
    #[error("Invalid usage: cannot specify global '{flag}' flag more than once.")]
    DuplicateFlag { flag: &'static str },

    /// Unknown global flag or malformed flag syntax
    #[error("{message}")]
    FlagSyntax {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Command token that is not in the registry
    #[error("Unrecognized command '{command}'")]
    UnrecognizedCommand { command: String },

    /// The current working directory could not be determined
    #[error("{source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    /// A resolved command failed while executing
    #[error("{name}: {source}")]
    Command {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CliError {
    /// Create a new unrecognized command error
    pub fn unrecognized_command(command: impl Into<String>) -> Self {
        Self::UnrecognizedCommand {
            command: command.into(),
        }
    }

    /// Create a new working directory error
    pub fn working_directory(source: std::io::Error) -> Self {
        Self::WorkingDirectory { source }
    }

    /// Create a new command execution error
    pub fn command(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Command {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Whether the error stems from what the user typed
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateFlag { .. } | Self::FlagSyntax { .. } | Self::UnrecognizedCommand { .. }
        )
    }

    /// Process exit status: 2 for usage errors, as clap uses, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_usage_error() { 2 } else { 1 }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();

        Self::FlagSyntax {
            message,
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
