//! Calculator core: request validation and operation dispatch.
//!
//! This module handles:
//! - Operand coercion from loosely typed JSON
//! - Presence and numeric validation
//! - Case-insensitive dispatch over the four operations

pub mod evaluator;
pub mod operand;
pub mod operation;
pub mod types;
pub mod validator;

pub use evaluator::{calculate, evaluate, perform_calculation};
pub use operand::parse_operand;
pub use operation::OperationKind;
pub use types::{
    Calculation, CalculationRequest, CalculationResponse, CalculationResult, ValidatedRequest,
};
pub use validator::{validate, validate_request};
