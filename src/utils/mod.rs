//! Shared utilities: configuration validation.

pub mod validation;

pub use validation::{validate_delay, validate_network_name, validate_regular_params};
