use serde::Serialize;

use groundops_catalog::stats::ScheduleSummary;
use groundops_catalog::StatsRecord;
use groundops_core::models::{
    EquipmentRecord, EquipmentStatus, FlightRecord, FlightStatus, Priority, ScheduleEntry, TicketId,
};
use groundops_view::{
    CalendarSelection, InfoModal, KpiTiles, MisTiles, RecordModal, StatusChartKind, TrendChartKind,
};

use crate::charts::{HeadlessChart, HeadlessMap, PerformanceChart};
use crate::state::Dashboard;

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub kpi: KpiTiles,
    pub mis: MisTiles,
    pub operations: OperationsView,
    pub schedule: ScheduleView,
    pub gse: GseView,
    pub tickets: TicketView,
}

#[derive(Debug, Serialize)]
pub struct OperationsView {
    pub flights: Vec<FlightRecord>,
    pub status: StatsRecord<FlightStatus>,
    pub status_chart: StatusChartKind,
    pub trend_chart: TrendChartKind,
    pub chart: Option<HeadlessChart>,
    pub performance_chart: Option<PerformanceChart>,
    pub calendar: CalendarSelection,
    pub info: InfoModal,
    pub selected_flight: Option<FlightRecord>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleView {
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
    pub modal: RecordModal<ScheduleEntry>,
}

#[derive(Debug, Serialize)]
pub struct GseView {
    pub equipment: Vec<EquipmentRecord>,
    pub availability: StatsRecord<EquipmentStatus>,
    pub map: Option<HeadlessMap>,
}

#[derive(Debug, Serialize)]
pub struct TicketView {
    pub form_open: bool,
    pub confirmation: Option<TicketId>,
    pub history_len: usize,
    pub by_priority: StatsRecord<Priority>,
}

impl DashboardSnapshot {
    pub fn capture(dashboard: &Dashboard) -> Self {
        let operations = &dashboard.operations;
        let schedule = &dashboard.schedule;
        let gse = &dashboard.gse;
        let tickets = &dashboard.tickets;

        Self {
            kpi: dashboard.kpi.kpi(),
            mis: dashboard.kpi.mis(),
            operations: OperationsView {
                flights: operations.visible(),
                status: operations.status_stats(),
                status_chart: operations.status_chart(),
                trend_chart: operations.trend_chart(),
                chart: dashboard.charts.status_chart().cloned(),
                performance_chart: dashboard.charts.performance_chart().cloned(),
                calendar: *operations.calendar(),
                info: operations.info(),
                selected_flight: operations.selected_flight().cloned(),
            },
            schedule: ScheduleView {
                entries: schedule.visible(),
                summary: schedule.summary(),
                modal: schedule.modal().clone(),
            },
            gse: GseView {
                equipment: gse.visible(),
                availability: gse.availability(),
                map: dashboard.charts.map().cloned(),
            },
            tickets: TicketView {
                form_open: tickets.is_form_open(),
                confirmation: tickets.confirmation().cloned(),
                history_len: tickets.history().len(),
                by_priority: tickets.stats(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
