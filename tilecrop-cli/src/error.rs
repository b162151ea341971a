//! CLI error types.

use std::fmt;

use tilecrop::{JobError, MalformedName};

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// Loading or inspecting the source image failed.
    Image(String),

    /// The slice job failed.
    Job(JobError),

    /// A tile name could not be decoded.
    Name(MalformedName),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Image(msg) => write!(f, "Failed to load image: {}", msg),
            CliError::Job(e) => write!(f, "{}", e),
            CliError::Name(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Image(_) => None,
            CliError::Job(e) => Some(e),
            CliError::Name(e) => Some(e),
        }
    }
}

impl From<JobError> for CliError {
    fn from(e: JobError) -> Self {
        CliError::Job(e)
    }
}

impl From<MalformedName> for CliError {
    fn from(e: MalformedName) -> Self {
        CliError::Name(e)
    }
}
