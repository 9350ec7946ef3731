//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend integration tests:
//! unique test data generation, problem+json assertions and unified logging
//! initialization.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
