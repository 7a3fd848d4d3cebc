//! Fare resolution
//!
//! - [`ZonePair`] - direction-independent zone pair
//! - [`resolver`] - single-journey and daily fare lookups
//! - [`money`] - cents <-> decimal conversion

pub mod money;
pub mod resolver;

pub use resolver::{FareError, daily_total, resolve_fare};

/// A zone pair in canonical order (`source <= destination`)
///
/// Each unordered pair is stored exactly once, so every lookup and every
/// write goes through [`ZonePair::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonePair {
    pub source: i64,
    pub destination: i64,
}

impl ZonePair {
    pub fn canonical(a: i64, b: i64) -> Self {
        Self {
            source: a.min(b),
            destination: a.max(b),
        }
    }
}
