//! Read API request and response shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound on journeys accepted by one daily fare request
pub const MAX_DAILY_JOURNEYS: usize = 20;

/// `GET /config` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub available_zones: Vec<i64>,
}

/// `GET /fare` query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub from_zone: i64,
    pub to_zone: i64,
}

/// `GET /fare` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareResponse {
    pub fare: Decimal,
}

/// `POST /fares/daily` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyJourneysRequest {
    pub journeys: Vec<Journey>,
}

/// One priced journey of a daily request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripResult {
    pub from_zone: i64,
    pub to_zone: i64,
    pub fare: Decimal,
}

/// `POST /fares/daily` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFareResponse {
    pub trip_results: Vec<TripResult>,
    pub total_daily_fare: Decimal,
}
