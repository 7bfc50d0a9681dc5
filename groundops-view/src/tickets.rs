use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use groundops_catalog::{aggregate, filter, StatsRecord, TicketCriteria};
use groundops_core::models::{Priority, TicketCategory, TicketId, TicketRecord, TicketStatus};
use groundops_core::Catalog;

use crate::draft::{require, DraftError, DraftField};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TicketError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("No free ticket id after {0} attempts")]
    IdSpaceExhausted(usize),
}

/// Source of candidate ticket references.
pub trait TicketIdGenerator {
    fn next_id(&mut self) -> TicketId;
}

/// `{prefix}{n}` with `n` drawn uniformly and zero-padded to `digits`.
#[derive(Debug, Clone)]
pub struct RandomTicketIds {
    rng: StdRng,
    prefix: String,
    digits: u32,
}

impl RandomTicketIds {
    pub fn from_entropy(prefix: impl Into<String>, digits: u32) -> Self {
        Self::with_rng(StdRng::from_entropy(), prefix, digits)
    }

    /// Reproducible sequence, for tests and demos.
    pub fn seeded(seed: u64, prefix: impl Into<String>, digits: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), prefix, digits)
    }

    fn with_rng(rng: StdRng, prefix: impl Into<String>, digits: u32) -> Self {
        Self {
            rng,
            prefix: prefix.into(),
            digits: digits.clamp(1, 18),
        }
    }
}

impl TicketIdGenerator for RandomTicketIds {
    fn next_id(&mut self) -> TicketId {
        let n = self.rng.gen_range(0..10u64.pow(self.digits));
        TicketId::new(format!("{}{:0width$}", self.prefix, n, width = self.digits as usize))
    }
}

/// In-progress state of the raise-ticket form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketDraft {
    pub category: Option<TicketCategory>,
    pub priority: Priority,
    pub subject: String,
    pub description: String,
    pub equipment_id: Option<u32>,
    pub flight_no: Option<String>,
    pub attachment: Option<String>,
}

impl TicketDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        let category = self.category.map_or("", |category| category.as_str());
        require(&[
            (DraftField::Category, category),
            (DraftField::Subject, self.subject.as_str()),
            (DraftField::Description, self.description.as_str()),
        ])
    }
}

/// View state of the IT-support ticket desk.
#[derive(Debug)]
pub struct TicketDesk<G = RandomTicketIds> {
    ids: G,
    max_id_attempts: usize,
    history: Catalog<TicketRecord>,
    criteria: TicketCriteria,
    draft: TicketDraft,
    form_open: bool,
    confirmation: Option<TicketId>,
}

impl<G: TicketIdGenerator> TicketDesk<G> {
    pub fn new(ids: G, max_id_attempts: usize) -> Self {
        Self {
            ids,
            max_id_attempts: max_id_attempts.max(1),
            history: Catalog::empty(),
            criteria: TicketCriteria::default(),
            draft: TicketDraft::default(),
            form_open: false,
            confirmation: None,
        }
    }

    pub fn history(&self) -> &Catalog<TicketRecord> {
        &self.history
    }

    pub fn criteria_mut(&mut self) -> &mut TicketCriteria {
        &mut self.criteria
    }

    pub fn visible(&self) -> Vec<TicketRecord> {
        filter(self.history.as_slice(), &self.criteria)
    }

    pub fn stats(&self) -> StatsRecord<Priority> {
        aggregate(self.history.as_slice())
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TicketDraft {
        &mut self.draft
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn confirmation(&self) -> Option<&TicketId> {
        self.confirmation.as_ref()
    }

    pub fn open_form(&mut self) {
        self.draft = TicketDraft::default();
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.draft = TicketDraft::default();
    }

    /// Raise a ticket from the draft. On success the form closes and the
    /// confirmation popup shows the new id.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<TicketRecord, TicketError> {
        if let Err(err) = self.draft.validate() {
            tracing::info!("Ticket rejected: {}", err);
            return Err(err.into());
        }
        let category = self.draft.category.ok_or(DraftError::MissingFields(vec![DraftField::Category]))?;

        let id = self.fresh_id()?;
        let ticket = TicketRecord {
            id: id.clone(),
            category,
            priority: self.draft.priority,
            subject: self.draft.subject.trim().to_string(),
            description: self.draft.description.trim().to_string(),
            equipment_id: self.draft.equipment_id,
            flight_no: self.draft.flight_no.clone().filter(|flight_no| !flight_no.trim().is_empty()),
            attachment: self.draft.attachment.clone(),
            status: TicketStatus::Open,
            created_at: now,
        };

        self.history = self.history.appended(ticket.clone()).map_err(DraftError::from)?;
        self.close_form();
        self.confirmation = Some(id);
        tracing::info!("Ticket {} raised ({}, {})", ticket.id, ticket.category, ticket.priority);
        Ok(ticket)
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// "Raise another" on the confirmation popup.
    pub fn raise_another(&mut self) {
        self.dismiss_confirmation();
        self.open_form();
    }

    fn fresh_id(&mut self) -> Result<TicketId, TicketError> {
        for _ in 0..self.max_id_attempts {
            let candidate = self.ids.next_id();
            if !self.history.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!("Ticket id {} already issued, drawing again", candidate);
        }
        Err(TicketError::IdSpaceExhausted(self.max_id_attempts))
    }
}
