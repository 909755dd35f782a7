//! Shared helpers for the user store service: logging setup and runtime
//! environment checks.

pub mod env;
pub mod utils;
