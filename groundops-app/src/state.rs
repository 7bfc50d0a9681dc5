use std::time::Instant;

use groundops_store::{Config, SeedStore};
use groundops_view::{
    Animator, GseScreen, KpiBoard, OperationsScreen, RandomTicketIds, ScheduleScreen, TicketDesk,
};

use crate::charts::ChartBoard;

/// Every screen of the dashboard plus the resources they drive.
///
/// Catalogs are handed to the screens once at construction; from then on only
/// the screens' own update operations replace them.
pub struct Dashboard {
    pub operations: OperationsScreen,
    pub schedule: ScheduleScreen,
    pub gse: GseScreen,
    pub tickets: TicketDesk<RandomTicketIds>,
    pub kpi: KpiBoard,
    pub charts: ChartBoard,
    animator: Animator,
    seed: SeedStore,
    mounted: bool,
}

impl Dashboard {
    pub fn new(config: &Config, seed: SeedStore) -> Self {
        let ids = RandomTicketIds::from_entropy(config.tickets.id_prefix.clone(), config.tickets.id_digits);
        Self::with_ticket_ids(config, seed, ids)
    }

    pub fn with_ticket_ids(config: &Config, seed: SeedStore, ids: RandomTicketIds) -> Self {
        Self {
            operations: OperationsScreen::new(seed.flights()),
            schedule: ScheduleScreen::new(seed.schedule()),
            gse: GseScreen::new(seed.equipment()),
            tickets: TicketDesk::new(ids, config.tickets.max_id_attempts),
            kpi: KpiBoard::new(config.dashboard.animation()),
            charts: ChartBoard::new(),
            animator: Animator::new(),
            seed,
            mounted: false,
        }
    }

    pub fn seed(&self) -> &SeedStore {
        &self.seed
    }

    /// Start the counters and create the chart and map instances.
    pub fn mount(&mut self, now: Instant) {
        self.kpi.start(&mut self.animator, self.seed.kpi(), self.seed.mis(), now);
        self.sync_widgets();
        self.mounted = true;
        tracing::info!("Dashboard mounted");
    }

    /// Re-apply widget state after a view change (chart kind, map focus).
    pub fn sync_widgets(&mut self) {
        self.charts
            .sync_status(self.operations.status_chart(), &self.operations.status_stats());
        self.charts
            .sync_performance(self.operations.trend_chart(), self.seed.performance());
        self.charts.mount_map(self.gse.fleet().as_slice());
        self.charts.focus_map(self.gse.map_focus());
    }

    /// Advance every running counter. Returns the number still running.
    pub fn frame(&mut self, now: Instant) -> usize {
        self.animator.frame(now)
    }

    pub fn is_settled(&self) -> bool {
        self.animator.is_idle()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.kpi.teardown();
        self.animator.cancel_all();
        self.charts.teardown();
        tracing::info!("Dashboard unmounted");
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.unmount();
    }
}
