use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Keyed;

/// Generated ticket reference such as `TKT-004217`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    Hardware,
    Software,
    #[serde(rename = "Access and Permission")]
    AccessAndPermission,
    #[serde(rename = "Network & Connectivity")]
    NetworkAndConnectivity,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "other")]
    Other,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Hardware => "Hardware",
            TicketCategory::Software => "Software",
            TicketCategory::AccessAndPermission => "Access and Permission",
            TicketCategory::NetworkAndConnectivity => "Network & Connectivity",
            TicketCategory::TechnicalSupport => "Technical Support",
            TicketCategory::Other => "other",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

/// An IT-support ticket raised from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: TicketId,
    pub category: TicketCategory,
    pub priority: Priority,
    pub subject: String,
    pub description: String,
    pub equipment_id: Option<u32>,
    pub flight_no: Option<String>,
    /// File name of the optional attachment
    pub attachment: Option<String>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl Keyed for TicketRecord {
    type Key = TicketId;

    fn key(&self) -> &TicketId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let category: TicketCategory = serde_json::from_str("\"Network & Connectivity\"").unwrap();
        assert_eq!(category, TicketCategory::NetworkAndConnectivity);
        assert_eq!(TicketCategory::Other.to_string(), "other");
    }

    #[test]
    fn test_ticket_id_is_transparent() {
        let id = TicketId::new("TKT-000042");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"TKT-000042\"");
    }

    #[test]
    fn test_default_priority_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
