//! Structured failure type for formula evaluation.
//!
//! Every way a calculation can fail is classified by [`ErrorKind`]; the
//! message carried alongside it is the exact human-readable string the API
//! returns to callers, so formulas construct errors with their own wording
//! rather than relying on a generated one.

use thiserror::Error;

/// Result type alias for formula evaluation.
pub type CalcResult<T> = Result<T, CalcError>;

/// Classification of a calculation failure.
///
/// All kinds except [`ErrorKind::Internal`] describe problems with the
/// caller's input and map to HTTP 400 at the API boundary; `Internal` maps
/// to HTTP 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required parameter was absent (or present but empty).
    MissingParameter,
    /// A parameter was present but did not parse as a finite number.
    InvalidNumber,
    /// An alternative-input formula received the wrong number of parameters.
    WrongParameterCount,
    /// Inputs parsed but violate the formula's domain (zero denominator,
    /// negative resistance, non-quadratic coefficient, short list).
    DomainViolation,
    /// The computation has no defined value (tangent asymptote).
    UndefinedResult,
    /// An unexpected fault inside the engine itself.
    Internal,
}

impl ErrorKind {
    /// Short code for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "MISSING_PARAMETER",
            ErrorKind::InvalidNumber => "INVALID_NUMBER",
            ErrorKind::WrongParameterCount => "WRONG_PARAMETER_COUNT",
            ErrorKind::DomainViolation => "DOMAIN_VIOLATION",
            ErrorKind::UndefinedResult => "UNDEFINED_RESULT",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// Whether this failure was caused by the request rather than the engine.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// A calculation failure: a kind plus the message sent back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct CalcError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CalcError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// A required parameter was not supplied.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingParameter, message)
    }

    /// A supplied parameter was not a usable number.
    pub fn invalid_number(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber, message)
    }

    /// The wrong subset of alternative parameters was supplied.
    pub fn wrong_parameter_count(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WrongParameterCount, message)
    }

    /// Inputs parsed but fall outside the formula's domain.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DomainViolation, message)
    }

    /// The formula has no defined value for these inputs.
    pub fn undefined(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedResult, message)
    }

    /// Unexpected engine fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::internal(format!("result serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_wire_message() {
        let err = CalcError::domain("Run cannot be zero (division by zero)");
        assert_eq!(err.to_string(), "Run cannot be zero (division by zero)");
        assert_eq!(err.kind, ErrorKind::DomainViolation);
    }

    #[test]
    fn only_internal_is_a_server_error() {
        assert!(CalcError::missing("x").kind.is_client_error());
        assert!(CalcError::invalid_number("x").kind.is_client_error());
        assert!(CalcError::wrong_parameter_count("x").kind.is_client_error());
        assert!(CalcError::domain("x").kind.is_client_error());
        assert!(CalcError::undefined("x").kind.is_client_error());
        assert!(!CalcError::internal("x").kind.is_client_error());
    }

    #[test]
    fn kind_codes_for_logging() {
        assert_eq!(ErrorKind::MissingParameter.as_str(), "MISSING_PARAMETER");
        assert_eq!(ErrorKind::UndefinedResult.as_str(), "UNDEFINED_RESULT");
    }
}
