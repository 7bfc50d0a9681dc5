use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use groundops_catalog::format::{format_percent, format_rupees};
use groundops_catalog::stats::gauge_percent;
use groundops_core::models::{KpiFigures, MisFigures};

use crate::animation::{AnimationHandle, Animator};

/// Text currently shown on the operations KPI tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KpiTiles {
    pub total_flights: String,
    pub active_passengers: String,
    pub fuel_efficiency: String,
    pub on_time_performance: String,
}

/// Text currently shown on the MIS tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MisTiles {
    pub total_revenue: String,
    pub operating_cost: String,
    pub profit_margin: String,
    pub load_factor: String,
    pub utilization: String,
    pub market_share: String,
    /// Fill of the utilization gauge, whole percent
    pub utilization_gauge: u32,
}

type Setter<T> = fn(&mut T, f64);

/// Count-up tiles for both dashboards. Tearing the board down cancels every
/// counter so nothing writes to the tiles afterwards.
#[derive(Debug)]
pub struct KpiBoard {
    kpi: Rc<RefCell<KpiTiles>>,
    mis: Rc<RefCell<MisTiles>>,
    handles: Vec<AnimationHandle>,
    duration: Duration,
}

impl KpiBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            kpi: Rc::default(),
            mis: Rc::default(),
            handles: Vec::new(),
            duration,
        }
    }

    pub fn kpi(&self) -> KpiTiles {
        self.kpi.borrow().clone()
    }

    pub fn mis(&self) -> MisTiles {
        self.mis.borrow().clone()
    }

    /// Start counting every tile up from zero to its figure.
    pub fn start(&mut self, animator: &mut Animator, kpi: KpiFigures, mis: MisFigures, now: Instant) {
        self.teardown();

        let kpi_counters: [(f64, Setter<KpiTiles>); 4] = [
            (f64::from(kpi.total_flights), |t, v| t.total_flights = whole(v)),
            (f64::from(kpi.active_passengers), |t, v| t.active_passengers = whole(v)),
            (kpi.fuel_efficiency, |t, v| t.fuel_efficiency = format!("{:.1}", v)),
            (kpi.on_time_performance, |t, v| t.on_time_performance = format!("{:.1}", v)),
        ];
        for (target, set) in kpi_counters {
            let handle = counter(animator, &self.kpi, target, self.duration, now, set);
            self.handles.push(handle);
        }

        let mis_counters: [(f64, Setter<MisTiles>); 6] = [
            (mis.total_revenue, |t, v| t.total_revenue = format_rupees(v)),
            (mis.operating_cost, |t, v| t.operating_cost = format_rupees(v)),
            (mis.profit_margin, |t, v| t.profit_margin = format_percent(v)),
            (mis.load_factor, |t, v| t.load_factor = format_percent(v)),
            (mis.utilization, |t, v| {
                t.utilization = format_percent(v);
                t.utilization_gauge = gauge_percent(v);
            }),
            (mis.market_share, |t, v| t.market_share = format_percent(v)),
        ];
        for (target, set) in mis_counters {
            let handle = counter(animator, &self.mis, target, self.duration, now, set);
            self.handles.push(handle);
        }

        tracing::debug!("Started {} dashboard counters", self.handles.len());
    }

    pub fn is_settled(&self) -> bool {
        self.handles.iter().all(|handle| !handle.is_cancelled() && handle.is_finished())
    }

    pub fn teardown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }
}

impl Drop for KpiBoard {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn whole(value: f64) -> String {
    (value.floor() as i64).to_string()
}

fn counter<T: 'static>(
    animator: &mut Animator,
    tiles: &Rc<RefCell<T>>,
    target: f64,
    duration: Duration,
    now: Instant,
    set: Setter<T>,
) -> AnimationHandle {
    let tiles = Rc::clone(tiles);
    animator.animate(0.0, target, duration, now, move |value| set(&mut tiles.borrow_mut(), value))
}
