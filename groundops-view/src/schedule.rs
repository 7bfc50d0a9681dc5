use chrono::NaiveDate;
use serde::Serialize;

use groundops_catalog::export::{schedule_export_file_name, to_csv};
use groundops_catalog::stats::ScheduleSummary;
use groundops_catalog::{filter, ScheduleCriteria};
use groundops_core::models::schedule::or_blank_mark;
use groundops_core::models::{ArrivalStatus, FlightStatus, ScheduleEntry};
use groundops_core::Catalog;

use crate::draft::{DraftError, ScheduleDraft};
use crate::modal::{DraftAction, RecordModal};

/// Outcome of an accepted schedule dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum Submission {
    Added(u32),
    Updated(u32),
    Cancelled(u32),
}

/// View state of the MIS flight-schedule screen.
#[derive(Debug, Clone)]
pub struct ScheduleScreen {
    catalog: Catalog<ScheduleEntry>,
    criteria: ScheduleCriteria,
    modal: RecordModal<ScheduleEntry>,
    draft: ScheduleDraft,
}

impl ScheduleScreen {
    pub fn new(catalog: Catalog<ScheduleEntry>) -> Self {
        Self {
            catalog,
            criteria: ScheduleCriteria::default(),
            modal: RecordModal::Closed,
            draft: ScheduleDraft::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog<ScheduleEntry> {
        &self.catalog
    }

    pub fn criteria(&self) -> &ScheduleCriteria {
        &self.criteria
    }

    /// Bound filter fields; every read of `visible` reflects the latest edit.
    pub fn criteria_mut(&mut self) -> &mut ScheduleCriteria {
        &mut self.criteria
    }

    pub fn reset_filters(&mut self) {
        self.criteria = ScheduleCriteria::default();
    }

    pub fn visible(&self) -> Vec<ScheduleEntry> {
        filter(self.catalog.as_slice(), &self.criteria)
    }

    /// Tiles are computed from the whole schedule, not the filtered table.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_entries(self.catalog.as_slice())
    }

    pub fn export_csv(&self) -> String {
        to_csv(&self.visible())
    }

    pub fn export_file_name(&self, today: NaiveDate) -> String {
        schedule_export_file_name(today)
    }

    pub fn modal(&self) -> &RecordModal<ScheduleEntry> {
        &self.modal
    }

    pub fn draft(&self) -> &ScheduleDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ScheduleDraft {
        &mut self.draft
    }

    pub fn open_add(&mut self) {
        self.draft = ScheduleDraft::default();
        self.modal = RecordModal::Add;
        tracing::debug!("Schedule dialog opened for add");
    }

    pub fn open_edit(&mut self, id: u32) -> Result<(), DraftError> {
        let entry = self.lookup(id)?;
        self.draft = ScheduleDraft::from_entry(&entry, true);
        self.modal = RecordModal::Edit(entry);
        tracing::debug!("Schedule dialog opened to edit entry {}", id);
        Ok(())
    }

    pub fn open_cancel(&mut self, id: u32) -> Result<(), DraftError> {
        let entry = self.lookup(id)?;
        self.draft = ScheduleDraft::from_entry(&entry, false);
        self.modal = RecordModal::Cancel(entry);
        tracing::debug!("Schedule dialog opened to cancel entry {}", id);
        Ok(())
    }

    /// Close the dialog and discard the draft.
    pub fn close(&mut self) {
        self.modal = RecordModal::Closed;
        self.draft = ScheduleDraft::default();
    }

    /// Validate the draft for the open action and apply it to the catalog.
    ///
    /// On failure nothing changes: the dialog stays open with its draft.
    pub fn submit(&mut self) -> Result<Submission, DraftError> {
        let action = self.modal.action().ok_or(DraftError::NotEditing)?;

        if let Err(err) = self.draft.validate(action) {
            tracing::info!("Schedule {:?} rejected: {}", action, err);
            return Err(err);
        }

        let (catalog, submission) = match &self.modal {
            RecordModal::Add => {
                let id = self.next_id()?;
                (self.catalog.appended(self.draft.to_entry(id))?, Submission::Added(id))
            }
            RecordModal::Edit(target) => {
                let updated = self.draft.to_entry(target.id);
                (self.catalog.replaced(&target.id, updated)?, Submission::Updated(target.id))
            }
            RecordModal::Cancel(target) => {
                let mut updated = self.lookup(target.id)?;
                updated.status = FlightStatus::Cancelled;
                updated.arrival = ArrivalStatus::Cancelled;
                updated.remarks = or_blank_mark(&self.draft.description);
                updated.signature = or_blank_mark(&self.draft.person_name);
                updated.media.extend(self.draft.media.iter().cloned());
                (self.catalog.replaced(&target.id, updated)?, Submission::Cancelled(target.id))
            }
            RecordModal::Closed => return Err(DraftError::NotEditing),
        };

        self.catalog = catalog;
        self.close();
        tracing::info!("Schedule submission accepted: {:?}", submission);
        Ok(submission)
    }

    fn lookup(&self, id: u32) -> Result<ScheduleEntry, DraftError> {
        self.catalog
            .get(&id)
            .cloned()
            .ok_or_else(|| DraftError::UnknownRecord(id.to_string()))
    }

    fn next_id(&self) -> Result<u32, DraftError> {
        let highest = self.catalog.iter().map(|entry| entry.id).max().unwrap_or(0);
        highest.checked_add(1).ok_or(DraftError::IdSpaceExhausted(highest))
    }
}

impl DraftAction {
    pub fn confirmation(&self) -> &'static str {
        match self {
            DraftAction::Add => "Flight added successfully!",
            DraftAction::Edit => "Flight details updated successfully!",
            DraftAction::Cancel => "Flight cancelled successfully!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use groundops_core::Choice;

    use crate::draft::DraftField;

    fn entry(id: u32, flight_no: &str, airline: &str, route: &str) -> ScheduleEntry {
        ScheduleEntry {
            id,
            flight_no: flight_no.to_string(),
            airline: airline.to_string(),
            route: route.to_string(),
            date: "Nov 11, 2025".to_string(),
            time: "06:00".to_string(),
            status: FlightStatus::Scheduled,
            arrival: ArrivalStatus::Arrived,
            remarks: "-".to_string(),
            signature: "-".to_string(),
            media: Vec::new(),
        }
    }

    fn screen() -> ScheduleScreen {
        ScheduleScreen::new(Catalog::from(vec![
            entry(1, "AI 101", "Air India", "DEL–BOM-DEL"),
            entry(2, "6E 2345", "IndiGo", "BLR–DEL-BLR"),
        ]))
    }

    #[test]
    fn test_close_after_edit_leaves_blank_add_form() {
        let mut screen = screen();

        screen.open_edit(1).unwrap();
        assert_eq!(screen.draft().flight_no, "AI 101");
        screen.draft_mut().description = "Gate change".to_string();
        screen.close();

        screen.open_add();
        assert_eq!(screen.draft(), &ScheduleDraft::default());
        assert_eq!(screen.modal(), &RecordModal::Add);
    }

    #[test]
    fn test_cancel_without_reason_is_rejected() {
        let mut screen = screen();
        screen.open_cancel(2).unwrap();
        screen.draft_mut().person_name = "John Doe".to_string();

        let err = screen.submit().unwrap_err();

        assert!(matches!(err, DraftError::MissingFields(_)));
        assert!(screen.modal().is_open());
        assert_eq!(screen.draft().person_name, "John Doe");
        assert_eq!(screen.catalog().get(&2).unwrap().status, FlightStatus::Scheduled);
    }

    #[test]
    fn test_cancel_replaces_entry_functionally() {
        let mut screen = screen();
        let before = screen.catalog().clone();

        screen.open_cancel(2).unwrap();
        screen.draft_mut().description = "Aircraft maintenance required".to_string();
        screen.draft_mut().person_name = "John Doe".to_string();
        let outcome = screen.submit().unwrap();

        assert_eq!(outcome, Submission::Cancelled(2));
        let cancelled = screen.catalog().get(&2).unwrap();
        assert_eq!(cancelled.status, FlightStatus::Cancelled);
        assert_eq!(cancelled.arrival, ArrivalStatus::Cancelled);
        assert_eq!(cancelled.remarks, "Aircraft maintenance required");
        assert_eq!(cancelled.signature, "John Doe");

        assert_eq!(before.get(&2).unwrap().status, FlightStatus::Scheduled);
        assert!(!screen.modal().is_open());
        assert_eq!(screen.draft(), &ScheduleDraft::default());
    }

    #[test]
    fn test_cancel_ignores_edits_to_core_fields() {
        let mut screen = screen();
        screen.open_cancel(1).unwrap();
        {
            let draft = screen.draft_mut();
            draft.flight_no = String::new();
            draft.date = "garbage".to_string();
            draft.time = String::new();
            draft.description = "Crew unavailable".to_string();
            draft.person_name = "Duty Manager".to_string();
        }
        screen.submit().unwrap();

        let cancelled = screen.catalog().get(&1).unwrap();
        assert_eq!(cancelled.flight_no, "AI 101");
        assert_eq!(cancelled.airline, "Air India");
        assert_eq!(cancelled.route, "DEL–BOM-DEL");
        assert_eq!(cancelled.date, "Nov 11, 2025");
        assert_eq!(cancelled.time, "06:00");
        assert_eq!(cancelled.status, FlightStatus::Cancelled);
        assert_eq!(cancelled.remarks, "Crew unavailable");
    }

    #[test]
    fn test_cancel_keeps_existing_media() {
        let mut with_media = entry(1, "SG 567", "SpiceJet", "MAA–HYD-MAA");
        let mut seed = ScheduleDraft::default();
        seed.attach("maintenance_report.pdf", "application/pdf", "#", Utc::now());
        with_media.media = seed.media.clone();
        let mut screen = ScheduleScreen::new(Catalog::from(vec![with_media]));

        screen.open_cancel(1).unwrap();
        assert!(screen.draft().media.is_empty());
        screen.draft_mut().attach("apron.jpg", "image/jpeg", "blob:apron", Utc::now());
        screen.draft_mut().description = "Bird strike".to_string();
        screen.draft_mut().person_name = "Duty Manager".to_string();
        screen.submit().unwrap();

        let names: Vec<&str> = screen.catalog().get(&1).unwrap().media.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["maintenance_report.pdf", "apron.jpg"]);
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut screen = screen();
        screen.open_add();
        {
            let draft = screen.draft_mut();
            draft.flight_no = "G8 123".to_string();
            draft.airline = "Go First".to_string();
            draft.route = "DEL–GOI-DEL".to_string();
            draft.date = "Nov 12, 2025".to_string();
            draft.time = "13:45".to_string();
            draft.person_name = "Ops Desk".to_string();
        }

        assert_eq!(screen.submit().unwrap(), Submission::Added(3));
        let added = screen.catalog().as_slice().last().unwrap();
        assert_eq!(added.flight_no, "G8 123");
        assert_eq!(added.remarks, "-");
        assert_eq!(added.signature, "Ops Desk");
    }

    #[test]
    fn test_add_without_signer_is_rejected() {
        let mut screen = screen();
        screen.open_add();
        {
            let draft = screen.draft_mut();
            draft.flight_no = "G8 123".to_string();
            draft.airline = "Go First".to_string();
            draft.route = "DEL–GOI-DEL".to_string();
            draft.date = "Nov 12, 2025".to_string();
            draft.time = "13:45".to_string();
        }

        let err = screen.submit().unwrap_err();
        assert_eq!(err.missing_fields(), &[DraftField::PersonName]);
        assert_eq!(screen.catalog().len(), 2);
        assert_eq!(screen.modal(), &RecordModal::Add);
    }

    #[test]
    fn test_add_after_highest_possible_id_fails() {
        let mut screen = ScheduleScreen::new(Catalog::from(vec![entry(u32::MAX, "AI 101", "Air India", "DEL–BOM-DEL")]));
        screen.open_add();
        {
            let draft = screen.draft_mut();
            draft.flight_no = "G8 123".to_string();
            draft.airline = "Go First".to_string();
            draft.route = "DEL–GOI-DEL".to_string();
            draft.date = "Nov 12, 2025".to_string();
            draft.time = "13:45".to_string();
            draft.person_name = "Ops Desk".to_string();
        }

        assert_eq!(screen.submit(), Err(DraftError::IdSpaceExhausted(u32::MAX)));
        assert_eq!(screen.catalog().len(), 1);
        assert!(screen.modal().is_open());
    }

    #[test]
    fn test_edit_updates_fields_in_place() {
        let mut screen = screen();
        screen.open_edit(1).unwrap();
        screen.draft_mut().time = "06:30".to_string();
        screen.draft_mut().arrival = ArrivalStatus::Delayed;

        assert_eq!(screen.submit().unwrap(), Submission::Updated(1));
        let edited = &screen.catalog().as_slice()[0];
        assert_eq!(edited.time, "06:30");
        assert_eq!(edited.arrival, ArrivalStatus::Delayed);
        assert_eq!(screen.summary().additional, 1);
    }

    #[test]
    fn test_submit_with_closed_modal() {
        let mut screen = screen();
        assert_eq!(screen.submit(), Err(DraftError::NotEditing));
        assert!(matches!(screen.open_edit(99), Err(DraftError::UnknownRecord(_))));
    }

    #[test]
    fn test_filters_and_export_follow_bound_fields() {
        let mut screen = screen();
        screen.criteria_mut().airline = Choice::Only("IndiGo".to_string());

        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(screen.export_csv().lines().count(), 2);
        assert_eq!(screen.summary().total, 2);

        screen.reset_filters();
        assert_eq!(screen.visible().len(), 2);
    }
}
