//! Supported arithmetic operations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// One of the four supported arithmetic operations.
///
/// Parsing is ASCII case-insensitive, so `"ADD"`, `"Add"` and `"add"` all
/// map to [`OperationKind::Add`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OperationKind {
    /// operand1 + operand2.
    Add,
    /// operand1 - operand2.
    Subtract,
    /// operand1 * operand2.
    Multiply,
    /// operand1 / operand2, rejected when operand2 is zero.
    Divide,
}

impl OperationKind {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Apply the operation. Division by zero is not checked here.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            OperationKind::Add => a + b,
            OperationKind::Subtract => a - b,
            OperationKind::Multiply => a * b,
            OperationKind::Divide => a / b,
        }
    }
}
