//! Calculation request and result types.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::operation::OperationKind;
use crate::error::CalcError;

/// Raw calculation request as received from a client.
///
/// Operands may be numbers or numeric strings. `null` and absent are both
/// treated as missing. `num1`/`num2` are accepted as legacy field names;
/// when both spellings are sent, the non-null `operand1`/`operand2` wins.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CalculationRequest {
    /// First operand.
    #[schema(value_type = Object, example = 10)]
    pub operand1: Option<Value>,
    /// Second operand.
    #[schema(value_type = Object, example = 5)]
    pub operand2: Option<Value>,
    /// Operation name: add, subtract, multiply or divide (any case).
    #[schema(value_type = String, example = "add")]
    pub operation: Option<Value>,
}

impl CalculationRequest {
    /// Build a request from already-typed values.
    pub fn new(operand1: impl Into<Value>, operand2: impl Into<Value>, operation: &str) -> Self {
        Self {
            operand1: Some(operand1.into()),
            operand2: Some(operand2.into()),
            operation: Some(Value::String(operation.to_string())),
        }
    }

    /// Read a request out of a JSON object. Unknown keys are ignored.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let operand1 = take_field(&mut object, "operand1", "num1");
        let operand2 = take_field(&mut object, "operand2", "num2");
        Self {
            operand1,
            operand2,
            operation: object.remove("operation"),
        }
    }
}

fn take_field(object: &mut Map<String, Value>, name: &str, legacy: &str) -> Option<Value> {
    let legacy = object.remove(legacy);
    object
        .remove(name)
        .filter(|v| !v.is_null())
        .or(legacy)
}

/// Request that passed validation: operands are coerced to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// First operand.
    pub operand1: f64,
    /// Second operand.
    pub operand2: f64,
    /// Operation exactly as sent. Non-string operations are rendered as JSON.
    pub operation: String,
}

/// Successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// First operand after coercion.
    pub operand1: f64,
    /// Second operand after coercion.
    pub operand2: f64,
    /// Operation as sent by the caller (not normalized).
    pub operation: String,
    /// Matched operation kind.
    pub kind: OperationKind,
    /// Computed value.
    pub value: f64,
}

/// Outcome of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResult {
    /// The calculation succeeded.
    Success(Calculation),
    /// The request was rejected.
    Failure {
        /// Human-readable reason, sent to the client verbatim.
        message: String,
        /// Typed cause.
        error: CalcError,
    },
}

impl CalculationResult {
    /// Whether the calculation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResult::Success(_))
    }

    /// Computed value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            CalculationResult::Success(calc) => Some(calc.value),
            CalculationResult::Failure { .. } => None,
        }
    }

    /// Failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            CalculationResult::Success(_) => None,
            CalculationResult::Failure { message, .. } => Some(message),
        }
    }
}

impl From<std::result::Result<Calculation, CalcError>> for CalculationResult {
    fn from(result: std::result::Result<Calculation, CalcError>) -> Self {
        match result {
            Ok(calc) => CalculationResult::Success(calc),
            Err(error) => CalculationResult::Failure {
                message: error.to_string(),
                error,
            },
        }
    }
}

/// Wire shape of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalculationResponse {
    /// Always `true`.
    pub success: bool,
    /// First operand after coercion.
    #[schema(example = 10.0)]
    pub operand1: f64,
    /// Second operand after coercion.
    #[schema(example = 5.0)]
    pub operand2: f64,
    /// Operation as sent.
    #[schema(example = "add")]
    pub operation: String,
    /// Computed value.
    #[schema(example = 15.0)]
    pub result: f64,
}

impl From<Calculation> for CalculationResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            success: true,
            operand1: calc.operand1,
            operand2: calc.operand2,
            operation: calc.operation,
            result: calc.value,
        }
    }
}
