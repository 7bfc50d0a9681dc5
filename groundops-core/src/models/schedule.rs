use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::FlightStatus;
use crate::Keyed;

/// Placeholder shown for blank remarks and signatures.
pub const BLANK_MARK: &str = "-";

/// Arrival progress tracked on the schedule screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrivalStatus {
    Scheduled,
    Arrived,
    Delayed,
    #[serde(rename = "On Time")]
    OnTime,
    #[serde(alias = "Canceled")]
    Cancelled,
}

impl ArrivalStatus {
    pub const ALL: [ArrivalStatus; 5] = [
        ArrivalStatus::Scheduled,
        ArrivalStatus::Arrived,
        ArrivalStatus::Delayed,
        ArrivalStatus::OnTime,
        ArrivalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArrivalStatus::Scheduled => "Scheduled",
            ArrivalStatus::Arrived => "Arrived",
            ArrivalStatus::Delayed => "Delayed",
            ArrivalStatus::OnTime => "On Time",
            ArrivalStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Document,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else {
            MediaKind::Document
        }
    }
}

/// Evidence uploaded alongside a schedule change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: u64,
    pub name: String,
    pub kind: MediaKind,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A row on the MIS flight-schedule screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u32,
    pub flight_no: String,
    pub airline: String,
    pub route: String,
    /// Display date, e.g. `Nov 11, 2025`
    pub date: String,
    pub time: String,
    pub status: FlightStatus,
    pub arrival: ArrivalStatus,
    pub remarks: String,
    pub signature: String,
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
}

impl ScheduleEntry {
    pub fn is_cancelled(&self) -> bool {
        self.status == FlightStatus::Cancelled
    }

    /// Remarks with the blank placeholder mapped back to an empty string.
    pub fn remarks_text(&self) -> &str {
        strip_blank_mark(&self.remarks)
    }

    pub fn signature_text(&self) -> &str {
        strip_blank_mark(&self.signature)
    }
}

impl Keyed for ScheduleEntry {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }
}

/// Render an optional free-text field, substituting the blank placeholder.
pub fn or_blank_mark(text: &str) -> String {
    if text.trim().is_empty() {
        BLANK_MARK.to_string()
    } else {
        text.to_string()
    }
}

fn strip_blank_mark(text: &str) -> &str {
    if text == BLANK_MARK {
        ""
    } else {
        text
    }
}
