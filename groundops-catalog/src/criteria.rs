use serde::{Deserialize, Serialize};

use groundops_core::models::flight::route_segments;
use groundops_core::models::{
    EquipmentRecord, EquipmentStatus, FlightRecord, FlightStatus, Priority, ScheduleEntry,
    TicketCategory, TicketRecord, TicketStatus,
};
use groundops_core::{Choice, DateRange};

use crate::filter::{text_matches, Criteria};

/// Filters bound to the operations flight board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCriteria {
    pub search: String,
    pub route: Choice<String>,
    pub aircraft: Choice<String>,
    pub status: Choice<FlightStatus>,
    pub date_range: DateRange,
}

impl Criteria<FlightRecord> for FlightCriteria {
    fn admits(&self, flight: &FlightRecord) -> bool {
        text_matches(flight, &self.search)
            && self.route.admits(flight.route.as_str())
            && self.aircraft.admits(flight.aircraft.as_str())
            && self.status.admits(&flight.status)
            && self.date_range.admits(&flight.date)
    }
}

/// Filters bound to the MIS schedule screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCriteria {
    pub search: String,
    /// Station code that must appear as one of the route's stops
    pub station: Choice<String>,
    pub airline: Choice<String>,
    pub status: Choice<FlightStatus>,
    pub date_range: DateRange,
}

impl Criteria<ScheduleEntry> for ScheduleCriteria {
    fn admits(&self, entry: &ScheduleEntry) -> bool {
        let serves_station = match self.station.selected() {
            None => true,
            Some(station) => route_segments(&entry.route).any(|stop| stop == station),
        };

        text_matches(entry, &self.search)
            && serves_station
            && self.airline.admits(entry.airline.as_str())
            && self.status.admits(&entry.status)
            && self.date_range.admits(&entry.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCriteria {
    pub search: String,
    pub equipment_type: Choice<String>,
    pub status: Choice<EquipmentStatus>,
}

impl Criteria<EquipmentRecord> for EquipmentCriteria {
    fn admits(&self, unit: &EquipmentRecord) -> bool {
        text_matches(unit, &self.search)
            && self.equipment_type.admits(unit.equipment_type.as_str())
            && self.status.admits(&unit.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCriteria {
    pub search: String,
    pub category: Choice<TicketCategory>,
    pub priority: Choice<Priority>,
    pub status: Choice<TicketStatus>,
}

impl Criteria<TicketRecord> for TicketCriteria {
    fn admits(&self, ticket: &TicketRecord) -> bool {
        text_matches(ticket, &self.search)
            && self.category.admits(&ticket.category)
            && self.priority.admits(&ticket.priority)
            && self.status.admits(&ticket.status)
    }
}
