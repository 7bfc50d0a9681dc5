use serde::Serialize;

use groundops_catalog::export::{to_csv, FLIGHT_EXPORT_FILE};
use groundops_catalog::{aggregate, filter, FlightCriteria, StatsRecord};
use groundops_core::models::{FlightRecord, FlightStatus};
use groundops_core::{Catalog, DateRange};

use crate::calendar::CalendarSelection;
use crate::modal::{InfoModal, InfoTopic};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusChartKind {
    #[default]
    Pie,
    Doughnut,
    Bar,
}

impl StatusChartKind {
    /// Next kind in the toolbar cycle.
    pub fn next(self) -> Self {
        match self {
            StatusChartKind::Pie => StatusChartKind::Doughnut,
            StatusChartKind::Doughnut => StatusChartKind::Bar,
            StatusChartKind::Bar => StatusChartKind::Pie,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendChartKind {
    #[default]
    Line,
    Bar,
}

impl TrendChartKind {
    pub fn toggled(self) -> Self {
        match self {
            TrendChartKind::Line => TrendChartKind::Bar,
            TrendChartKind::Bar => TrendChartKind::Line,
        }
    }
}

/// View state of the operations (home) screen.
#[derive(Debug, Clone)]
pub struct OperationsScreen {
    flights: Catalog<FlightRecord>,
    criteria: FlightCriteria,
    calendar: CalendarSelection,
    status_chart: StatusChartKind,
    trend_chart: TrendChartKind,
    info: InfoModal,
    selected: Option<String>,
}

impl OperationsScreen {
    pub fn new(flights: Catalog<FlightRecord>) -> Self {
        Self {
            flights,
            criteria: FlightCriteria::default(),
            calendar: CalendarSelection::default(),
            status_chart: StatusChartKind::default(),
            trend_chart: TrendChartKind::default(),
            info: InfoModal::default(),
            selected: None,
        }
    }

    pub fn flights(&self) -> &Catalog<FlightRecord> {
        &self.flights
    }

    pub fn criteria(&self) -> &FlightCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FlightCriteria {
        &mut self.criteria
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FlightCriteria::default();
        self.calendar.clear();
    }

    pub fn visible(&self) -> Vec<FlightRecord> {
        filter(self.flights.as_slice(), &self.criteria)
    }

    /// Status breakdown of the whole board, independent of the table filters.
    pub fn status_stats(&self) -> StatsRecord<FlightStatus> {
        aggregate(self.flights.as_slice())
    }

    pub fn export_csv(&self) -> String {
        to_csv(&self.visible())
    }

    pub fn export_file_name(&self) -> &'static str {
        FLIGHT_EXPORT_FILE
    }

    pub fn calendar(&self) -> &CalendarSelection {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarSelection {
        &mut self.calendar
    }

    /// Copy a complete calendar selection into the date filter.
    /// Returns false while only the start has been picked.
    pub fn apply_calendar(&mut self) -> bool {
        if !self.calendar.is_complete() {
            return false;
        }
        self.criteria.date_range = self.calendar.range();
        tracing::debug!(
            "Flight date range applied: {:?}..={:?}",
            self.criteria.date_range.start,
            self.criteria.date_range.end
        );
        true
    }

    pub fn clear_calendar(&mut self) {
        self.calendar.clear();
        self.criteria.date_range = DateRange::unbounded();
    }

    pub fn status_chart(&self) -> StatusChartKind {
        self.status_chart
    }

    pub fn set_status_chart(&mut self, kind: StatusChartKind) {
        self.status_chart = kind;
    }

    pub fn trend_chart(&self) -> TrendChartKind {
        self.trend_chart
    }

    pub fn toggle_trend_chart(&mut self) {
        self.trend_chart = self.trend_chart.toggled();
    }

    pub fn info(&self) -> InfoModal {
        self.info
    }

    pub fn open_info(&mut self, topic: InfoTopic) {
        self.info = InfoModal::Open(topic);
    }

    pub fn open_info_label(&mut self, label: &str) {
        self.open_info(InfoTopic::from_label(label));
    }

    pub fn close_info(&mut self) {
        self.info = InfoModal::Closed;
    }

    /// Select a flight for the detail panel. Unknown flight numbers are ignored.
    pub fn view_flight(&mut self, flight_no: &str) -> Option<&FlightRecord> {
        if self.flights.contains(flight_no) {
            self.selected = Some(flight_no.to_string());
        }
        self.selected_flight()
    }

    pub fn selected_flight(&self) -> Option<&FlightRecord> {
        self.selected.as_deref().and_then(|flight_no| self.flights.get(flight_no))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
