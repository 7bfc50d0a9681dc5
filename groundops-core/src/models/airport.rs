use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::Keyed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub id: u32,
    pub name: String,
    /// IATA location code, e.g. `DEL`
    pub code: String,
    pub city: String,
    pub coordinates: Coordinate,
}

impl Keyed for AirportRecord {
    type Key = str;

    fn key(&self) -> &str {
        &self.code
    }
}
