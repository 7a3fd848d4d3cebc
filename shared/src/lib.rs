//! Shared types for the fare service
//!
//! Models, request/response shapes and the error system used by the
//! fare server and by anything that talks to its HTTP API.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
