//! Zone Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone entity (a named fare region)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Zone {
    pub id: i64,
    pub name: String,
}

/// Admin screens and dropdowns show a zone by its name, never its raw id
impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneUpdate {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_displays_name() {
        let zone = Zone {
            id: 7,
            name: "Zone 7".into(),
        };
        assert_eq!(zone.to_string(), "Zone 7");
    }
}
