pub mod airport;
pub mod equipment;
pub mod flight;
pub mod metrics;
pub mod schedule;
pub mod ticket;

pub use airport::AirportRecord;
pub use equipment::{EquipmentRecord, EquipmentStatus};
pub use flight::{FlightRecord, FlightStatus};
pub use metrics::{KpiFigures, MisFigures, MonthlyPerformance};
pub use schedule::{ArrivalStatus, MediaAttachment, MediaKind, ScheduleEntry};
pub use ticket::{Priority, TicketCategory, TicketId, TicketRecord, TicketStatus};

use serde::{Deserialize, Serialize};

/// WGS84 position used for map markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}
