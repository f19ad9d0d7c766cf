//! Four-function calculator HTTP API.
//!
//! The service validates two operands and an operation name, then applies
//! one of add, subtract, multiply or divide:
//!
//! ```text
//! POST /api/calculator/calculate
//! {"operand1": 10, "operand2": 5, "operation": "add"}
//! ─────────────────────────────────────────────────────
//! {"success": true, "operand1": 10, "operand2": 5, "operation": "add", "result": 15}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`calculator`]: Request validation and operation dispatch
//! - [`history`]: Read-only calculation history sources
//! - [`api`]: HTTP API routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
