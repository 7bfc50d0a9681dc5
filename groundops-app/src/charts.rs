//! Headless stand-ins for the chart canvases and the equipment map.
//!
//! They own no real resources but follow the same lifecycle as the browser
//! widgets: created once per mount, destroyed before re-creation and on
//! teardown.

use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

use groundops_catalog::StatsRecord;
use groundops_core::models::{EquipmentRecord, FlightStatus, MonthlyPerformance};
use groundops_view::{Disposable, InstanceSlot, MapFocus, StatusChartKind, TrendChartKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Nothing to plot for {0}")]
    EmptySeries(&'static str),
}

/// Number of widget instances created and not yet destroyed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveCount(Rc<Cell<usize>>);

impl LiveCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn created(&self) {
        self.0.set(self.0.get() + 1);
    }

    fn destroyed(&self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessChart {
    pub kind: StatusChartKind,
    pub points: Vec<ChartPoint>,
    #[serde(skip)]
    live: LiveCount,
    #[serde(skip)]
    destroyed: bool,
}

impl HeadlessChart {
    pub fn status(kind: StatusChartKind, stats: &StatsRecord<FlightStatus>, live: &LiveCount) -> Result<Self, ChartError> {
        if stats.total == 0 {
            return Err(ChartError::EmptySeries("flight status"));
        }

        let points = stats
            .buckets
            .iter()
            .map(|bucket| ChartPoint {
                label: bucket.category.to_string(),
                value: bucket.count,
            })
            .collect();

        live.created();
        Ok(Self {
            kind,
            points,
            live: live.clone(),
            destroyed: false,
        })
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Disposable for HeadlessChart {
    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.live.destroyed();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub label: &'static str,
    pub values: Vec<u32>,
}

/// Monthly on-time / delayed / cancelled trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceChart {
    pub kind: TrendChartKind,
    pub months: Vec<String>,
    pub series: Vec<TrendSeries>,
    #[serde(skip)]
    live: LiveCount,
    #[serde(skip)]
    destroyed: bool,
}

impl PerformanceChart {
    pub fn new(kind: TrendChartKind, trend: &[MonthlyPerformance], live: &LiveCount) -> Result<Self, ChartError> {
        if trend.is_empty() {
            return Err(ChartError::EmptySeries("flight performance"));
        }

        let series = |label, pick: fn(&MonthlyPerformance) -> u32| TrendSeries {
            label,
            values: trend.iter().map(pick).collect(),
        };

        live.created();
        Ok(Self {
            kind,
            months: trend.iter().map(|month| month.month.clone()).collect(),
            series: vec![
                series("On Time", |m| m.on_time),
                series("Delayed", |m| m.delayed),
                series("Cancelled", |m| m.cancelled),
            ],
            live: live.clone(),
            destroyed: false,
        })
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Disposable for PerformanceChart {
    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.live.destroyed();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub equipment_id: u32,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessMap {
    pub markers: Vec<MapMarker>,
    pub focus: Option<MapFocus>,
    #[serde(skip)]
    live: Option<LiveCount>,
}

impl HeadlessMap {
    pub fn new(fleet: &[EquipmentRecord], live: &LiveCount) -> Result<Self, ChartError> {
        if fleet.is_empty() {
            return Err(ChartError::EmptySeries("equipment map"));
        }

        let markers = fleet
            .iter()
            .map(|unit| MapMarker {
                equipment_id: unit.id,
                label: format!("{} ({})", unit.name, unit.status),
                latitude: unit.coordinates.latitude,
                longitude: unit.coordinates.longitude,
            })
            .collect();

        live.created();
        Ok(Self {
            markers,
            focus: None,
            live: Some(live.clone()),
        })
    }
}

impl Disposable for HeadlessMap {
    fn destroy(&mut self) {
        self.markers.clear();
        self.focus = None;
        if let Some(live) = self.live.take() {
            live.destroyed();
        }
    }
}

/// Every external widget of the dashboard, one slot each.
#[derive(Debug)]
pub struct ChartBoard {
    status: InstanceSlot<HeadlessChart>,
    performance: InstanceSlot<PerformanceChart>,
    map: InstanceSlot<HeadlessMap>,
    live: LiveCount,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self {
            status: InstanceSlot::new("flight status chart"),
            performance: InstanceSlot::new("flight performance chart"),
            map: InstanceSlot::new("equipment map"),
            live: LiveCount::default(),
        }
    }

    /// Bring the status chart in line with the selected kind, rebuilding it
    /// only when the kind changed.
    pub fn sync_status(&mut self, kind: StatusChartKind, stats: &StatsRecord<FlightStatus>) {
        let live = &self.live;
        let create = || HeadlessChart::status(kind, stats, live);
        if self.status.get().is_some_and(|chart| chart.kind != kind) {
            self.status.recreate(create);
        } else {
            self.status.ensure(create);
        }
    }

    pub fn sync_performance(&mut self, kind: TrendChartKind, trend: &[MonthlyPerformance]) {
        let live = &self.live;
        let create = || PerformanceChart::new(kind, trend, live);
        if self.performance.get().is_some_and(|chart| chart.kind != kind) {
            self.performance.recreate(create);
        } else {
            self.performance.ensure(create);
        }
    }

    pub fn mount_map(&mut self, fleet: &[EquipmentRecord]) {
        let live = &self.live;
        self.map.ensure(|| HeadlessMap::new(fleet, live));
    }

    pub fn focus_map(&mut self, focus: Option<MapFocus>) {
        if let Some(map) = self.map.get_mut() {
            map.focus = focus;
        }
    }

    pub fn status_chart(&self) -> Option<&HeadlessChart> {
        self.status.get()
    }

    pub fn performance_chart(&self) -> Option<&PerformanceChart> {
        self.performance.get()
    }

    pub fn map(&self) -> Option<&HeadlessMap> {
        self.map.get()
    }

    /// Widget instances currently alive across all slots.
    pub fn live_instances(&self) -> usize {
        self.live.get()
    }

    pub fn teardown(&mut self) {
        self.status.destroy();
        self.performance.destroy();
        self.map.destroy();
    }
}

impl Default for ChartBoard {
    fn default() -> Self {
        Self::new()
    }
}
