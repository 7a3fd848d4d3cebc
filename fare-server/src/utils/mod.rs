//! Utilities - shared error types, logging and input validation
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - text and price checks for admin writes

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
