//! Fare Model
//!
//! A fare is stored once per unordered zone pair, with the smaller zone id
//! as `source_id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fare entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fare {
    pub id: i64,
    pub source_id: i64,
    pub destination_id: i64,
    /// Price with two fractional digits
    pub price: Decimal,
}

/// Fare with both zone names resolved, for admin list and detail screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareView {
    pub id: i64,
    pub source_id: i64,
    pub source_zone: String,
    pub destination_id: i64,
    pub destination_zone: String,
    pub price: Decimal,
}

/// Create fare payload
///
/// The pair may be given in either order; it is canonicalized before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareCreate {
    pub source_id: i64,
    pub destination_id: i64,
    pub price: Decimal,
}

/// Update fare payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FareUpdate {
    pub source_id: Option<i64>,
    pub destination_id: Option<i64>,
    pub price: Option<Decimal>,
}
