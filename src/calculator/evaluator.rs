//! Operation dispatch.

use std::str::FromStr;

use tracing::debug;

use super::operation::OperationKind;
use super::types::{Calculation, CalculationRequest, CalculationResult};
use super::validator::validate_request;
use crate::error::{CalcError, EvaluationError};

/// Evaluate `operation` over two already-coerced operands.
///
/// The operation name is matched case-insensitively; the returned
/// [`Calculation`] keeps the name exactly as given.
pub fn evaluate(
    operand1: f64,
    operand2: f64,
    operation: &str,
) -> Result<Calculation, EvaluationError> {
    let kind = OperationKind::from_str(operation).map_err(|_| EvaluationError::InvalidOperation {
        operation: operation.to_string(),
    })?;

    // -0.0 == 0.0, so both zeros are rejected.
    if kind == OperationKind::Divide && operand2 == 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }

    let value = kind.apply(operand1, operand2);
    debug!(%kind, operand1, operand2, value, "evaluated");

    Ok(Calculation {
        operand1,
        operand2,
        operation: operation.to_string(),
        kind,
        value,
    })
}

/// Validate then evaluate a raw request.
pub fn calculate(request: &CalculationRequest) -> Result<Calculation, CalcError> {
    let validated = validate_request(request)?;
    Ok(evaluate(
        validated.operand1,
        validated.operand2,
        &validated.operation,
    )?)
}

/// Same as [`calculate`], folded into a [`CalculationResult`].
pub fn perform_calculation(request: &CalculationRequest) -> CalculationResult {
    calculate(request).into()
}
