//! End-to-end checks of the calculator core through the public API.

use calculator_api::calculator::{
    calculate, evaluate, perform_calculation, CalculationRequest, OperationKind,
};
use calculator_api::error::{CalcError, EvaluationError, ValidationError};
use calculator_api::history::{HistorySource, StaticHistory};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn request(body: Value) -> CalculationRequest {
    match body {
        Value::Object(object) => CalculationRequest::from_object(object),
        other => panic!("request body must be an object, got {other}"),
    }
}

#[test]
fn concrete_scenarios() {
    let add = perform_calculation(&CalculationRequest::new(10, 5, "add"));
    assert_eq!(add.value(), Some(15.0));

    let multiply = perform_calculation(&CalculationRequest::new(20, 4, "multiply"));
    assert_eq!(multiply.value(), Some(80.0));

    let divide = perform_calculation(&CalculationRequest::new(10, 0, "divide"));
    assert_eq!(divide.message(), Some("Cannot divide by zero"));

    assert_eq!(StaticHistory::new().history().unwrap().len(), 2);
}

#[test]
fn success_keeps_original_operation_spelling() {
    let calc = evaluate(1.0, 2.0, "MuLtIpLy").unwrap();
    assert_eq!(calc.operation, "MuLtIpLy");
    assert_eq!(calc.kind, OperationKind::Multiply);
    assert_eq!(calc.value, 2.0);
}

#[test]
fn numeric_strings_are_coerced() {
    let result = perform_calculation(&request(json!({
        "operand1": "7.5",
        "operand2": "2.5",
        "operation": "subtract"
    })));
    assert_eq!(result.value(), Some(5.0));
}

#[test]
fn null_operand_is_missing() {
    let result = perform_calculation(&request(json!({
        "operand1": null,
        "operand2": 3,
        "operation": "add"
    })));
    assert_eq!(
        result.message(),
        Some("Missing required fields: operand1, operand2, operation")
    );
}

#[test]
fn error_kinds_are_distinguishable() {
    let cases = [
        (
            json!({"operand2": 1, "operation": "add"}),
            CalcError::Validation(ValidationError::MissingFields),
        ),
        (
            json!({"operand1": "abc", "operand2": 1, "operation": "add"}),
            CalcError::Validation(ValidationError::InvalidNumber),
        ),
        (
            json!({"operand1": 1, "operand2": 1, "operation": 0}),
            CalcError::Validation(ValidationError::MissingFields),
        ),
        (
            json!({"operand1": 1, "operand2": 1, "operation": "modulo"}),
            CalcError::Evaluation(EvaluationError::InvalidOperation {
                operation: "modulo".to_string(),
            }),
        ),
        (
            json!({"operand1": 1, "operand2": 0, "operation": "Divide"}),
            CalcError::Evaluation(EvaluationError::DivisionByZero),
        ),
    ];

    for (body, expected) in cases {
        let result = calculate(&request(body));
        assert_eq!(result, Err(expected));
    }
}
