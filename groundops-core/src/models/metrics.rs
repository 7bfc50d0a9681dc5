use serde::{Deserialize, Serialize};

/// Target values for the operations KPI tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiFigures {
    pub total_flights: u32,
    pub active_passengers: u32,
    pub fuel_efficiency: f64,
    pub on_time_performance: f64,
}

/// Target values for the management-information tiles. Money is in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MisFigures {
    pub total_revenue: f64,
    pub operating_cost: f64,
    pub profit_margin: f64,
    pub load_factor: f64,
    pub utilization: f64,
    pub market_share: f64,
}

/// One month of the flight-performance trend, as a share of flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub on_time: u32,
    pub delayed: u32,
    pub cancelled: u32,
}
