//! Integration tests for the calculator API.
//!
//! Run with: cargo test --test integration

mod api;
mod calculator;
