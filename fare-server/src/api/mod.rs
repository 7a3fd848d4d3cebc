//! API route modules
//!
//! # Layout
//!
//! - [`health`] - liveness check
//! - [`config`] - `GET /config`
//! - [`fares`] - `GET /fare`, `POST /fares/daily`
//! - [`admin`] - zone and fare management, HTML overview
//! - [`extract`] - extractors whose rejections use the error body

pub mod extract;

pub mod admin;
pub mod config;
pub mod fares;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
