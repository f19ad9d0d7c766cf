//! Unified error types for the calculator API.

use thiserror::Error;

/// Unified error type for the calculator service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request validation errors, raised before any arithmetic runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An operand is absent or null, or the operation is absent or empty.
    #[error("Missing required fields: operand1, operand2, operation")]
    MissingFields,

    /// An operand is present but not a finite number.
    #[error("operand1 and operand2 must be valid numbers")]
    InvalidNumber,
}

/// Errors raised while evaluating a validated request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Operation name is not one of the four supported kinds.
    #[error("Invalid operation. Use: add, subtract, multiply, divide")]
    InvalidOperation {
        /// The operation as received.
        operation: String,
    },

    /// Divisor is zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Any failure of the validate-then-evaluate pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Rejected by the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Rejected by the evaluator.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl CalcError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            CalcError::Validation(ValidationError::MissingFields) => "missing_fields",
            CalcError::Validation(ValidationError::InvalidNumber) => "invalid_number",
            CalcError::Evaluation(EvaluationError::InvalidOperation { .. }) => "invalid_operation",
            CalcError::Evaluation(EvaluationError::DivisionByZero) => "division_by_zero",
        }
    }
}

/// History source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Backing store could not be read.
    #[error("history unavailable: {0}")]
    Unavailable(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
