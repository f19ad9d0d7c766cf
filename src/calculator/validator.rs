//! Request validation.

use serde_json::Value;

use super::operand::parse_operand;
use super::types::{CalculationRequest, ValidatedRequest};
use crate::error::ValidationError;

/// Validate the three request fields and coerce the operands.
///
/// Presence is checked for all three fields before either operand is
/// parsed, so a request that is both incomplete and malformed reports
/// [`ValidationError::MissingFields`].
pub fn validate(
    operand1: Option<&Value>,
    operand2: Option<&Value>,
    operation: Option<&Value>,
) -> Result<ValidatedRequest, ValidationError> {
    let (Some(raw1), Some(raw2), Some(op)) =
        (present(operand1), present(operand2), present(operation))
    else {
        return Err(ValidationError::MissingFields);
    };

    // Falsy operations (`""`, `false`, `0`) count as absent.
    let operation = match op {
        Value::String(s) if s.is_empty() => return Err(ValidationError::MissingFields),
        Value::Bool(false) => return Err(ValidationError::MissingFields),
        Value::Number(n) if n.as_f64() == Some(0.0) => {
            return Err(ValidationError::MissingFields)
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match (parse_operand(raw1), parse_operand(raw2)) {
        (Some(operand1), Some(operand2)) => Ok(ValidatedRequest {
            operand1,
            operand2,
            operation,
        }),
        _ => Err(ValidationError::InvalidNumber),
    }
}

/// Validate a deserialized request.
pub fn validate_request(request: &CalculationRequest) -> Result<ValidatedRequest, ValidationError> {
    validate(
        request.operand1.as_ref(),
        request.operand2.as_ref(),
        request.operation.as_ref(),
    )
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
