//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling and the use-case error boundary
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{classify, AppError, AppResult, Failure, FailureResult, OptionExt};
