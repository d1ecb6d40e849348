// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::OutOfRangeError;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CheckpointsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CheckpointsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, CheckpointsError>;

/// Domain-layer specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    #[error("Invalid bounds: lower bound {lower} exceeds upper bound {upper}")]
    InvalidBounds { lower: i64, upper: i64 },

    #[error("Invalid amount for {operation}: {amount} (must not be negative)")]
    InvalidAmount { operation: &'static str, amount: i64 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("{value} does not have an integer square root")]
    NoIntegerRoot { value: i64 },

    #[error("Unknown animal '{name}'")]
    UnknownAnimal { name: String },
}

impl DomainError {
    /// Returns the range violation when this error is one.
    pub fn as_out_of_range(&self) -> Option<&OutOfRangeError> {
        match self {
            Self::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to construct subject for scenario '{scenario}': {source}")]
    SubjectConstruction {
        scenario: String,
        #[source]
        source: DomainError,
    },

    #[error("Step {index} ({step}) does not apply to a {subject}")]
    StepNotApplicable {
        index: usize,
        step: String,
        subject: String,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported scenario format for '{path}': {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for CheckpointsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CheckpointsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for CheckpointsError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<OutOfRangeError> for CheckpointsError {
    fn from(err: OutOfRangeError) -> Self {
        DomainError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CheckpointsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CheckpointsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CheckpointsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
