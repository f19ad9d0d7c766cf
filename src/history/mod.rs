//! Calculation history.
//!
//! The service only reads history; nothing is persisted.

pub mod source;
pub mod types;

pub use source::{HistorySource, StaticHistory};
pub use types::{HistoryRecord, HistoryResponse};
