use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use groundops_core::models::schedule::or_blank_mark;
use groundops_core::CoreError;
use groundops_core::models::{ArrivalStatus, FlightStatus, MediaAttachment, MediaKind, ScheduleEntry};

use crate::modal::DraftAction;

/// Form fields that can block a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DraftField {
    FlightNo,
    Airline,
    Route,
    Date,
    Time,
    Description,
    PersonName,
    Category,
    Subject,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::FlightNo => "Flight No.",
            DraftField::Airline => "Airline",
            DraftField::Route => "Route",
            DraftField::Date => "Date",
            DraftField::Time => "Time",
            DraftField::Description => "Description",
            DraftField::PersonName => "Person Name",
            DraftField::Category => "Category",
            DraftField::Subject => "Subject",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required fields: {}", list_fields(.0))]
    MissingFields(Vec<DraftField>),

    #[error("No record dialog is open")]
    NotEditing,

    #[error("Record not found: {0}")]
    UnknownRecord(String),

    #[error("No schedule id left after {0}")]
    IdSpaceExhausted(u32),

    #[error(transparent)]
    Catalog(#[from] CoreError),
}

impl DraftError {
    /// Fields the form should highlight, empty for non-validation errors.
    pub fn missing_fields(&self) -> &[DraftField] {
        match self {
            DraftError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

fn list_fields(fields: &[DraftField]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Collect every blank field in declaration order.
pub(crate) fn require(fields: &[(DraftField, &str)]) -> Result<(), DraftError> {
    let missing: Vec<DraftField> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DraftError::MissingFields(missing))
    }
}

/// In-progress form state of the schedule dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDraft {
    pub flight_no: String,
    pub airline: String,
    pub route: String,
    pub date: String,
    pub time: String,
    pub status: FlightStatus,
    pub arrival: ArrivalStatus,
    /// Remarks, or the cancellation reason
    pub description: String,
    /// Signer of the change
    pub person_name: String,
    pub media: Vec<MediaAttachment>,
    #[serde(skip)]
    next_media_id: u64,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            flight_no: String::new(),
            airline: String::new(),
            route: String::new(),
            date: String::new(),
            time: String::new(),
            status: FlightStatus::Scheduled,
            arrival: ArrivalStatus::Scheduled,
            description: String::new(),
            person_name: String::new(),
            media: Vec::new(),
            next_media_id: 1,
        }
    }
}

impl ScheduleDraft {
    /// Prefill from an existing entry. Uploaded media is carried only when
    /// `carry_media` is set; a cancellation starts with an empty upload list.
    pub fn from_entry(entry: &ScheduleEntry, carry_media: bool) -> Self {
        let media = if carry_media { entry.media.clone() } else { Vec::new() };
        let next_media_id = entry.media.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        Self {
            flight_no: entry.flight_no.clone(),
            airline: entry.airline.clone(),
            route: entry.route.clone(),
            date: entry.date.clone(),
            time: entry.time.clone(),
            status: entry.status,
            arrival: entry.arrival,
            description: entry.remarks_text().to_string(),
            person_name: entry.signature_text().to_string(),
            media,
            next_media_id,
        }
    }

    pub fn validate(&self, action: DraftAction) -> Result<(), DraftError> {
        match action {
            DraftAction::Add => require(&[
                (DraftField::FlightNo, self.flight_no.as_str()),
                (DraftField::Airline, self.airline.as_str()),
                (DraftField::Route, self.route.as_str()),
                (DraftField::Date, self.date.as_str()),
                (DraftField::Time, self.time.as_str()),
                (DraftField::PersonName, self.person_name.as_str()),
            ]),
            DraftAction::Edit => require(&[
                (DraftField::FlightNo, self.flight_no.as_str()),
                (DraftField::Airline, self.airline.as_str()),
                (DraftField::Route, self.route.as_str()),
                (DraftField::Date, self.date.as_str()),
                (DraftField::Time, self.time.as_str()),
            ]),
            DraftAction::Cancel => require(&[
                (DraftField::Description, self.description.as_str()),
                (DraftField::PersonName, self.person_name.as_str()),
            ]),
        }
    }

    /// Record an uploaded file and return its attachment id.
    pub fn attach(&mut self, name: &str, mime: &str, url: &str, uploaded_at: DateTime<Utc>) -> u64 {
        let id = self.next_media_id;
        self.next_media_id += 1;
        self.media.push(MediaAttachment {
            id,
            name: name.to_string(),
            kind: MediaKind::from_mime(mime),
            url: url.to_string(),
            uploaded_at,
        });
        id
    }

    pub fn remove_media(&mut self, index: usize) -> Option<MediaAttachment> {
        if index < self.media.len() {
            Some(self.media.remove(index))
        } else {
            None
        }
    }

    /// Materialize the draft as a schedule row under `id`.
    pub fn to_entry(&self, id: u32) -> ScheduleEntry {
        ScheduleEntry {
            id,
            flight_no: self.flight_no.trim().to_string(),
            airline: self.airline.trim().to_string(),
            route: self.route.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            status: self.status,
            arrival: self.arrival,
            remarks: or_blank_mark(&self.description),
            signature: or_blank_mark(&self.person_name),
            media: self.media.clone(),
        }
    }
}
