use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;
use crate::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus {
    Available,
    InUse,
    Maintenance,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Available,
        EquipmentStatus::InUse,
        EquipmentStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::InUse => "in-use",
            EquipmentStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ground-support-equipment unit shown on the apron map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: u32,
    pub name: String,
    pub equipment_type: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub coordinates: Coordinate,
    // Display strings only, never validated as dates.
    pub last_maintenance: String,
    pub next_maintenance: String,
}

impl Keyed for EquipmentRecord {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }
}
