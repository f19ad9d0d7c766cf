//! History record types.

use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::calculator::OperationKind;

/// A past calculation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoryRecord {
    /// First operand.
    pub operand1: f64,
    /// Second operand.
    pub operand2: f64,
    /// Operation applied.
    pub operation: OperationKind,
    /// Computed value.
    pub result: f64,
    /// When the record was produced.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: OffsetDateTime,
}

impl HistoryRecord {
    /// Build a record by applying `operation`, stamped with `timestamp`.
    pub fn computed(
        operand1: f64,
        operand2: f64,
        operation: OperationKind,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            operand1,
            operand2,
            operation,
            result: operation.apply(operand1, operand2),
            timestamp,
        }
    }
}

/// Wire shape of the history endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of records.
    pub count: usize,
    /// The records, oldest first.
    pub history: Vec<HistoryRecord>,
}

impl From<Vec<HistoryRecord>> for HistoryResponse {
    fn from(history: Vec<HistoryRecord>) -> Self {
        Self {
            success: true,
            count: history.len(),
            history,
        }
    }
}
