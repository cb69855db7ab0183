// crates/shared-kernel/src/error.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a guard failure, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required argument was absent.
    NullReference,
    /// The argument violates a structural precondition (too short, useless range, ...).
    InvalidArgument,
    /// The argument fails an ordinal boundary check.
    OutOfRange,
    /// The argument has the right shape but wrong content.
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NullReference => "null reference",
            Self::InvalidArgument => "invalid argument",
            Self::OutOfRange => "out of range",
            Self::Format => "format",
        };
        f.write_str(name)
    }
}

/// Root error type shared across the workspace.
///
/// Every variant is attributed to the parameter that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GuardError>,
    },

    #[error("Value cannot be null. (Parameter '{param}')")]
    NullReference { param: String },

    #[error("{reason} (Parameter '{param}')")]
    InvalidArgument { param: String, reason: String },

    #[error("{message} (Parameter '{param}'; actual value was {actual})")]
    OutOfRange {
        param: String,
        actual: String,
        message: String,
    },

    #[error("{message} (Parameter '{param}')")]
    Format { param: String, message: String },
}

pub type GuardResult<T> = std::result::Result<T, GuardError>;

impl GuardError {
    pub fn null_reference(param: impl Into<String>) -> Self {
        Self::NullReference { param: param.into() }
    }

    pub fn invalid_argument(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// The offending value is rendered eagerly so the error stays independent of its type.
    pub fn out_of_range(
        param: impl Into<String>,
        actual: impl fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            param: param.into(),
            actual: actual.to_string(),
            message: message.into(),
        }
    }

    pub fn format(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Kind of the innermost failure; context layers are transparent.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::NullReference { .. } => ErrorKind::NullReference,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Format { .. } => ErrorKind::Format,
        }
    }

    pub fn param(&self) -> &str {
        match self {
            Self::Context { source, .. } => source.param(),
            Self::NullReference { param }
            | Self::InvalidArgument { param, .. }
            | Self::OutOfRange { param, .. }
            | Self::Format { param, .. } => param,
        }
    }

    /// The offending value, for `OutOfRange` failures only.
    pub fn actual(&self) -> Option<&str> {
        match self {
            Self::Context { source, .. } => source.actual(),
            Self::OutOfRange { actual, .. } => Some(actual),
            _ => None,
        }
    }

    /// Human message without the parameter suffix.
    pub fn message(&self) -> &str {
        match self {
            Self::Context { source, .. } => source.message(),
            Self::NullReference { .. } => "Value cannot be null.",
            Self::InvalidArgument { reason, .. } => reason,
            Self::OutOfRange { message, .. } | Self::Format { message, .. } => message,
        }
    }

    /// Re-attributes the failure to another parameter, keeping kind and message.
    #[must_use]
    pub fn with_param(self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self {
            Self::Context { context, source } => Self::Context {
                context,
                source: Box::new(source.with_param(name)),
            },
            Self::NullReference { .. } => Self::NullReference { param: name },
            Self::InvalidArgument { reason, .. } => Self::InvalidArgument { param: name, reason },
            Self::OutOfRange { actual, message, .. } => Self::OutOfRange {
                param: name,
                actual,
                message,
            },
            Self::Format { message, .. } => Self::Format { param: name, message },
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> GuardResult<T>;
    fn with_context<F>(self, f: F) -> GuardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GuardError>,
{
    fn context(self, context: impl Into<String>) -> GuardResult<T> {
        self.map_err(|e| GuardError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> GuardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GuardError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
