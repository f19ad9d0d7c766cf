//! History sources.

use time::OffsetDateTime;

use super::types::HistoryRecord;
use crate::calculator::OperationKind;
use crate::error::HistoryError;

/// Read-only source of past calculations.
///
/// Handlers only see this trait, so a storage-backed implementation can be
/// swapped in without touching the calculator.
pub trait HistorySource: Send + Sync {
    /// Return all known records.
    fn history(&self) -> Result<Vec<HistoryRecord>, HistoryError>;
}

/// Fixed two-record sample history, restamped on every read.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHistory;

impl StaticHistory {
    /// Create the sample source.
    pub fn new() -> Self {
        Self
    }
}

impl HistorySource for StaticHistory {
    fn history(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let now = OffsetDateTime::now_utc();
        Ok(vec![
            HistoryRecord::computed(10.0, 5.0, OperationKind::Add, now),
            HistoryRecord::computed(20.0, 4.0, OperationKind::Multiply, now),
        ])
    }
}
