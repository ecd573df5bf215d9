//! Error types for gradient conversion.

use thiserror::Error;

/// Errors raised while converting one gradient expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Not a supported linear-gradient expression: {input:?}")]
    NotRecognized { input: String },

    #[error("Could not extract a color from color stop {token:?}")]
    MalformedStop { token: String },

    #[error("The direction {direction} can't be converted to legacy syntax")]
    UnsupportedDirection { direction: String },

    #[error("The position of the {color} color stop is not a percentage: {position}")]
    NonPercentagePosition { color: String, position: String },

    #[error("A gradient needs at least {required} color stops, found {found}")]
    TooFewStops { found: usize, required: usize },
}

/// Fieldless discriminant of [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotRecognized,
    MalformedStop,
    UnsupportedDirection,
    NonPercentagePosition,
    TooFewStops,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotRecognized => "not-recognized",
            ErrorKind::MalformedStop => "malformed-stop",
            ErrorKind::UnsupportedDirection => "unsupported-direction",
            ErrorKind::NonPercentagePosition => "non-percentage-position",
            ErrorKind::TooFewStops => "too-few-stops",
        }
    }
}

impl ConversionError {
    pub fn not_recognized(input: impl Into<String>) -> Self {
        Self::NotRecognized { input: input.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::NotRecognized { .. } => ErrorKind::NotRecognized,
            ConversionError::MalformedStop { .. } => ErrorKind::MalformedStop,
            ConversionError::UnsupportedDirection { .. } => ErrorKind::UnsupportedDirection,
            ConversionError::NonPercentagePosition { .. } => ErrorKind::NonPercentagePosition,
            ConversionError::TooFewStops { .. } => ErrorKind::TooFewStops,
        }
    }
}
