//! In-memory demo catalogs the dashboard boots with.

use chrono::{DateTime, Utc};

use groundops_core::models::{
    AirportRecord, ArrivalStatus, Coordinate, EquipmentRecord, EquipmentStatus, FlightRecord, FlightStatus,
    KpiFigures, MediaAttachment, MediaKind, MisFigures, MonthlyPerformance, ScheduleEntry,
};
use groundops_core::Catalog;

/// Read-only source of every catalog and headline figure.
#[derive(Debug, Clone)]
pub struct SeedStore {
    flights: Catalog<FlightRecord>,
    schedule: Catalog<ScheduleEntry>,
    equipment: Catalog<EquipmentRecord>,
    airports: Catalog<AirportRecord>,
    kpi: KpiFigures,
    mis: MisFigures,
    performance: Vec<MonthlyPerformance>,
}

impl SeedStore {
    pub fn demo() -> Self {
        let store = Self {
            flights: demo_flights().into(),
            schedule: demo_schedule().into(),
            equipment: demo_equipment().into(),
            airports: demo_airports().into(),
            kpi: KpiFigures {
                total_flights: 156,
                active_passengers: 23450,
                fuel_efficiency: 87.5,
                on_time_performance: 94.2,
            },
            mis: MisFigures {
                total_revenue: 45_600_000.0,
                operating_cost: 32_100_000.0,
                profit_margin: 29.6,
                load_factor: 82.3,
                utilization: 91.7,
                market_share: 15.8,
            },
            performance: demo_performance(),
        };

        tracing::debug!(
            "Seeded {} flights, {} schedule entries, {} equipment units, {} airports",
            store.flights.len(),
            store.schedule.len(),
            store.equipment.len(),
            store.airports.len()
        );
        store
    }

    pub fn flights(&self) -> Catalog<FlightRecord> {
        self.flights.clone()
    }

    pub fn schedule(&self) -> Catalog<ScheduleEntry> {
        self.schedule.clone()
    }

    pub fn equipment(&self) -> Catalog<EquipmentRecord> {
        self.equipment.clone()
    }

    pub fn airports(&self) -> Catalog<AirportRecord> {
        self.airports.clone()
    }

    pub fn airport(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.get(code)
    }

    pub fn kpi(&self) -> KpiFigures {
        self.kpi
    }

    pub fn mis(&self) -> MisFigures {
        self.mis
    }

    pub fn performance(&self) -> &[MonthlyPerformance] {
        &self.performance
    }
}

impl Default for SeedStore {
    fn default() -> Self {
        Self::demo()
    }
}

fn flight(
    flight_no: &str,
    route: &str,
    aircraft: &str,
    (departure, arrival): (&str, &str),
    date: &str,
    scheduled: bool,
    status: FlightStatus,
) -> FlightRecord {
    FlightRecord {
        flight_no: flight_no.to_string(),
        route: route.to_string(),
        aircraft: aircraft.to_string(),
        arrival: arrival.to_string(),
        departure: departure.to_string(),
        date: date.to_string(),
        scheduled,
        non_scheduled: !scheduled,
        status,
    }
}

fn demo_flights() -> Vec<FlightRecord> {
    vec![
        flight("AF101", "DEL-BOM", "A320", ("08:45", "10:30"), "2024-01-15", true, FlightStatus::Active),
        flight("AF202", "BOM-BLR", "B737", ("12:30", "14:15"), "2024-01-16", true, FlightStatus::Delayed),
        flight("AF303", "BLR-HYD", "A321", ("15:00", "16:45"), "2024-01-17", false, FlightStatus::Active),
        flight("AF404", "DEL-GOA", "A320", ("16:15", "18:30"), "2024-01-18", true, FlightStatus::Cancelled),
        flight("AF505", "BOM-BLR", "B737", ("18:45", "20:00"), "2024-01-19", true, FlightStatus::Active),
    ]
}

fn schedule_entry(
    id: u32,
    flight_no: &str,
    airline: &str,
    route: &str,
    time: &str,
    arrival: ArrivalStatus,
) -> ScheduleEntry {
    ScheduleEntry {
        id,
        flight_no: flight_no.to_string(),
        airline: airline.to_string(),
        route: route.to_string(),
        date: "Nov 11, 2025".to_string(),
        time: time.to_string(),
        status: FlightStatus::Scheduled,
        arrival,
        remarks: "-".to_string(),
        signature: "-".to_string(),
        media: Vec::new(),
    }
}

fn demo_schedule() -> Vec<ScheduleEntry> {
    let maintenance_report: Vec<MediaAttachment> = DateTime::<Utc>::from_timestamp(1_762_848_000, 0)
        .into_iter()
        .map(|uploaded_at| MediaAttachment {
            id: 1,
            name: "maintenance_report.pdf".to_string(),
            kind: MediaKind::Document,
            url: "#".to_string(),
            uploaded_at,
        })
        .collect();

    let cancelled = ScheduleEntry {
        status: FlightStatus::Cancelled,
        remarks: "Aircraft maintenance required".to_string(),
        signature: "John Doe".to_string(),
        media: maintenance_report,
        ..schedule_entry(3, "SG 567", "SpiceJet", "MAA–HYD-MAA", "09:15", ArrivalStatus::Cancelled)
    };

    vec![
        schedule_entry(1, "AI 101", "Air India", "DEL–BOM-DEL", "06:00", ArrivalStatus::Arrived),
        schedule_entry(2, "6E 2345", "IndiGo", "BLR–DEL-BLR", "07:30", ArrivalStatus::Delayed),
        cancelled,
        schedule_entry(4, "UK 890", "Vistara", "CCU–BLR-CCU", "11:00", ArrivalStatus::Arrived),
        schedule_entry(5, "G8 123", "Go First", "DEL–GOI-DEL", "13:45", ArrivalStatus::OnTime),
    ]
}

#[allow(clippy::too_many_arguments)]
fn unit(
    id: u32,
    name: &str,
    equipment_type: &str,
    status: EquipmentStatus,
    location: &str,
    (latitude, longitude): (f64, f64),
    last_maintenance: &str,
    next_maintenance: &str,
) -> EquipmentRecord {
    EquipmentRecord {
        id,
        name: name.to_string(),
        equipment_type: equipment_type.to_string(),
        status,
        location: location.to_string(),
        coordinates: Coordinate::new(latitude, longitude),
        last_maintenance: last_maintenance.to_string(),
        next_maintenance: next_maintenance.to_string(),
    }
}

fn demo_equipment() -> Vec<EquipmentRecord> {
    use EquipmentStatus::{Available, InUse, Maintenance};

    vec![
        unit(1, "Baggage Cart B-101", "Baggage Cart", Available, "Terminal A, Bay 12", (28.5562, 77.1), "2023-10-15", "2024-01-15"),
        unit(2, "Fuel Truck F-205", "Fuel Truck", InUse, "Runway 3, Gate 7", (28.555, 77.099), "2023-11-20", "2024-02-20"),
        unit(3, "Catering Truck C-308", "Catering Truck", Maintenance, "Maintenance Hangar", (28.5575, 77.098), "2023-09-10", "2023-12-10"),
        unit(4, "Pushback Tractor P-412", "Pushback Tractor", Available, "Terminal B, Bay 5", (28.5545, 77.1015), "2023-10-30", "2024-01-30"),
        unit(5, "De-icing Truck D-516", "De-icing Truck", InUse, "De-icing Pad 2", (28.558, 77.0975), "2023-11-05", "2024-02-05"),
        unit(6, "Passenger Bus PB-621", "Passenger Bus", Available, "Terminal C, Gate 3", (28.5538, 77.102), "2023-10-22", "2024-01-22"),
    ]
}

fn demo_performance() -> Vec<MonthlyPerformance> {
    [("Aug", 85, 10, 5), ("Sep", 78, 15, 7), ("Oct", 92, 5, 3), ("Nov", 88, 8, 4)]
        .into_iter()
        .map(|(month, on_time, delayed, cancelled)| MonthlyPerformance {
            month: month.to_string(),
            on_time,
            delayed,
            cancelled,
        })
        .collect()
}

fn demo_airports() -> Vec<AirportRecord> {
    [
        ("Indira Gandhi International Airport", "DEL", "Delhi", 28.5562, 77.1000),
        ("Chhatrapati Shivaji Maharaj International Airport", "BOM", "Mumbai", 19.0887, 72.8679),
        ("Kempegowda International Airport", "BLR", "Bengaluru", 13.1986, 77.7066),
        ("Chennai International Airport", "MAA", "Chennai", 12.9941, 80.1709),
        ("Netaji Subhas Chandra Bose International Airport", "CCU", "Kolkata", 22.6547, 88.4467),
        ("Rajiv Gandhi International Airport", "HYD", "Hyderabad", 17.2403, 78.4294),
        ("Cochin International Airport", "COK", "Kochi", 10.1520, 76.4015),
        ("Sardar Vallabhbhai Patel International Airport", "AMD", "Ahmedabad", 23.0732, 72.6258),
        ("Pune Airport", "PNQ", "Pune", 18.5793, 73.9089),
        ("Goa International Airport", "GOI", "Goa", 15.3806, 73.8353),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, code, city, latitude, longitude), id)| AirportRecord {
        id,
        name: name.to_string(),
        code: code.to_string(),
        city: city.to_string(),
        coordinates: Coordinate::new(latitude, longitude),
    })
    .collect()
}
