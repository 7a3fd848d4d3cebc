//! PearlCard fare server - zone fare lookups over HTTP
//!
//! # Layout
//!
//! ```text
//! fare-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── db/            # SQLite pool, schema, seed, repositories
//! ├── pricing/       # zone pair canonicalization and fare resolution
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly and middleware
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod routes;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use pricing::{ZonePair, resolve_fare};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_format};
