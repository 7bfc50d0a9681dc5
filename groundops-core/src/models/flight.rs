use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Keyed;

/// Operational status shared by the operations board and the schedule screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    Active,
    Delayed,
    #[serde(alias = "Canceled")]
    Cancelled,
    Scheduled,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 4] = [
        FlightStatus::Active,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
        FlightStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Active => "Active",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row on the operations flight board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_no: String,
    /// Origin and destination codes joined by a dash, e.g. `DEL-BOM`
    pub route: String,
    pub aircraft: String,
    pub arrival: String,
    pub departure: String,
    /// Operating date, `YYYY-MM-DD`
    pub date: String,
    // The two service flags are independent; a flight may carry both or neither.
    pub scheduled: bool,
    pub non_scheduled: bool,
    pub status: FlightStatus,
}

impl FlightRecord {
    pub fn origin(&self) -> Option<&str> {
        route_segments(&self.route).next()
    }

    pub fn destination(&self) -> Option<&str> {
        route_segments(&self.route).nth(1)
    }
}

impl Keyed for FlightRecord {
    type Key = str;

    fn key(&self) -> &str {
        &self.flight_no
    }
}

/// Station codes making up a route. Accepts both `-` and `–` separators.
pub fn route_segments(route: &str) -> impl Iterator<Item = &str> {
    route
        .split(['-', '–'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canceled_spelling_is_accepted() {
        let status: FlightStatus = serde_json::from_str("\"Canceled\"").unwrap();
        assert_eq!(status, FlightStatus::Cancelled);

        let rendered = serde_json::to_string(&FlightStatus::Cancelled).unwrap();
        assert_eq!(rendered, "\"Cancelled\"");
    }

    #[test]
    fn test_route_segments_mixed_dashes() {
        let segments: Vec<&str> = route_segments("DEL–BOM-DEL").collect();
        assert_eq!(segments, vec!["DEL", "BOM", "DEL"]);
    }

    #[test]
    fn test_origin_and_destination() {
        let flight = FlightRecord {
            flight_no: "AF101".to_string(),
            route: "DEL-BOM".to_string(),
            aircraft: "A320".to_string(),
            arrival: "10:30".to_string(),
            departure: "08:45".to_string(),
            date: "2024-01-15".to_string(),
            scheduled: true,
            non_scheduled: false,
            status: FlightStatus::Active,
        };
        assert_eq!(flight.origin(), Some("DEL"));
        assert_eq!(flight.destination(), Some("BOM"));
    }
}
