//! Soil health scoring and fertilizer advisory for the Kisan Mitra assistant.
//!
//! The [`soil`] module holds the rule engine and its service seams; the
//! remaining modules carry the configuration, telemetry, and error plumbing
//! shared with the API service.

pub mod config;
pub mod error;
pub mod soil;
pub mod telemetry;
