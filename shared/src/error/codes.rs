//! Unified error codes for the fare service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Zone errors
//! - 2xxx: Fare errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on a
/// stable number instead of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 1xxx: Zone ====================
    /// Zone not found
    ZoneNotFound = 1001,
    /// Zone name already exists
    ZoneNameExists = 1002,
    /// Zone is still referenced by fares
    ZoneInUse = 1003,

    // ==================== 2xxx: Fare ====================
    /// No fare for the requested zone pair
    FareNotFound = 2001,
    /// A fare for this zone pair already exists
    FareAlreadyExists = 2002,
    /// Price is negative, too large or has more than two decimals
    InvalidPrice = 2003,
    /// Too many journeys in a single daily request
    BatchLimitExceeded = 2004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",

            // Zone
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::ZoneNameExists => "Zone name already exists",
            ErrorCode::ZoneInUse => "Zone is referenced by existing fares",

            // Fare
            ErrorCode::FareNotFound => "Fare not found for the specified journey.",
            ErrorCode::FareAlreadyExists => "A fare for this zone pair already exists",
            ErrorCode::InvalidPrice => "Invalid fare price",
            ErrorCode::BatchLimitExceeded => "Too many journeys in one request",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),

            // Zone
            1001 => Ok(ErrorCode::ZoneNotFound),
            1002 => Ok(ErrorCode::ZoneNameExists),
            1003 => Ok(ErrorCode::ZoneInUse),

            // Fare
            2001 => Ok(ErrorCode::FareNotFound),
            2002 => Ok(ErrorCode::FareAlreadyExists),
            2003 => Ok(ErrorCode::InvalidPrice),
            2004 => Ok(ErrorCode::BatchLimitExceeded),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
