use serde::Serialize;

use groundops_core::models::{
    ArrivalStatus, EquipmentRecord, EquipmentStatus, FlightRecord, FlightStatus, Priority,
    ScheduleEntry, TicketRecord,
};

/// Records that fall into exactly one bucket of a fixed category set.
pub trait Categorized {
    type Category: Copy + PartialEq + 'static;

    /// Every bucket, in display order. Buckets with no records still report zero.
    fn categories() -> &'static [Self::Category];

    fn category(&self) -> Self::Category;
}

impl Categorized for FlightRecord {
    type Category = FlightStatus;

    fn categories() -> &'static [FlightStatus] {
        &FlightStatus::ALL
    }

    fn category(&self) -> FlightStatus {
        self.status
    }
}

impl Categorized for ScheduleEntry {
    type Category = FlightStatus;

    fn categories() -> &'static [FlightStatus] {
        &FlightStatus::ALL
    }

    fn category(&self) -> FlightStatus {
        self.status
    }
}

impl Categorized for EquipmentRecord {
    type Category = EquipmentStatus;

    fn categories() -> &'static [EquipmentStatus] {
        &EquipmentStatus::ALL
    }

    fn category(&self) -> EquipmentStatus {
        self.status
    }
}

impl Categorized for TicketRecord {
    type Category = Priority;

    fn categories() -> &'static [Priority] {
        &Priority::ALL
    }

    fn category(&self) -> Priority {
        self.priority
    }
}

/// Integer percentage, truncated toward zero. Zero when `total` is zero.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count * 100 / total) as u32
}

/// Truncate a fractional gauge value to a whole percent, clamped to 0..=100.
pub fn gauge_percent(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc().min(100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<C> {
    pub category: C,
    pub count: usize,
    pub percent: u32,
}

/// Counts partitioned by category, computed from an unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRecord<C> {
    pub total: usize,
    pub buckets: Vec<CategoryCount<C>>,
}

impl<C: Copy + PartialEq> StatsRecord<C> {
    pub fn count(&self, category: C) -> usize {
        self.bucket(category).map_or(0, |bucket| bucket.count)
    }

    pub fn percent(&self, category: C) -> u32 {
        self.bucket(category).map_or(0, |bucket| bucket.percent)
    }

    fn bucket(&self, category: C) -> Option<&CategoryCount<C>> {
        self.buckets.iter().find(|bucket| bucket.category == category)
    }
}

pub fn aggregate<T: Categorized>(catalog: &[T]) -> StatsRecord<T::Category> {
    let total = catalog.len();
    let buckets = T::categories()
        .iter()
        .map(|&category| {
            let count = catalog.iter().filter(|entry| entry.category() == category).count();
            CategoryCount {
                category,
                count,
                percent: percentage(count, total),
            }
        })
        .collect();

    StatsRecord { total, buckets }
}

/// Headline tiles for the schedule screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub total: usize,
    pub scheduled: usize,
    pub cancelled: usize,
    /// Flights running outside the plan: arrival delayed or reported on time
    pub additional: usize,
    pub cancelled_percent: u32,
    pub additional_percent: u32,
}

impl ScheduleSummary {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let count = |predicate: fn(&ScheduleEntry) -> bool| entries.iter().filter(|e| predicate(e)).count();

        let total = entries.len();
        let cancelled = count(|e| e.status == FlightStatus::Cancelled);
        let additional = count(|e| matches!(e.arrival, ArrivalStatus::Delayed | ArrivalStatus::OnTime));

        Self {
            total,
            scheduled: count(|e| e.status == FlightStatus::Scheduled),
            cancelled,
            additional,
            cancelled_percent: percentage(cancelled, total),
            additional_percent: percentage(additional, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(flight_no: &str, status: FlightStatus) -> FlightRecord {
        FlightRecord {
            flight_no: flight_no.to_string(),
            route: "DEL-BOM".to_string(),
            aircraft: "A320".to_string(),
            arrival: "10:30".to_string(),
            departure: "08:45".to_string(),
            date: "2024-01-15".to_string(),
            scheduled: true,
            non_scheduled: false,
            status,
        }
    }

    fn entry(id: u32, status: FlightStatus, arrival: ArrivalStatus) -> ScheduleEntry {
        ScheduleEntry {
            id,
            flight_no: format!("AI {id}"),
            airline: "Air India".to_string(),
            route: "DEL–BOM-DEL".to_string(),
            date: "Nov 11, 2025".to_string(),
            time: "06:00".to_string(),
            status,
            arrival,
            remarks: "-".to_string(),
            signature: "-".to_string(),
            media: Vec::new(),
        }
    }

    #[test]
    fn test_counts_by_status() {
        let flights = vec![
            flight("AF101", FlightStatus::Active),
            flight("AF202", FlightStatus::Delayed),
            flight("AF303", FlightStatus::Active),
        ];

        let stats = aggregate(&flights);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(FlightStatus::Active), 2);
        assert_eq!(stats.count(FlightStatus::Delayed), 1);
        assert_eq!(stats.count(FlightStatus::Cancelled), 0);
    }

    #[test]
    fn test_percentages_truncate() {
        let flights = vec![
            flight("AF101", FlightStatus::Active),
            flight("AF202", FlightStatus::Delayed),
            flight("AF303", FlightStatus::Active),
        ];

        let stats = aggregate(&flights);
        assert_eq!(stats.percent(FlightStatus::Active), 66);
        assert_eq!(stats.percent(FlightStatus::Delayed), 33);
    }

    #[test]
    fn test_empty_catalog_is_all_zero() {
        let stats = aggregate::<FlightRecord>(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.buckets.len(), FlightStatus::ALL.len());
        for bucket in &stats.buckets {
            assert_eq!(bucket.count, 0);
            assert_eq!(bucket.percent, 0);
        }
    }

    #[test]
    fn test_gauge_percent() {
        assert_eq!(gauge_percent(87.5), 87);
        assert_eq!(gauge_percent(94.99), 94);
        assert_eq!(gauge_percent(-3.0), 0);
        assert_eq!(gauge_percent(140.0), 100);
        assert_eq!(gauge_percent(f64::NAN), 0);
    }

    #[test]
    fn test_schedule_summary() {
        let entries = vec![
            entry(1, FlightStatus::Scheduled, ArrivalStatus::Arrived),
            entry(2, FlightStatus::Scheduled, ArrivalStatus::Delayed),
            entry(3, FlightStatus::Cancelled, ArrivalStatus::Cancelled),
            entry(4, FlightStatus::Scheduled, ArrivalStatus::OnTime),
        ];

        let summary = ScheduleSummary::from_entries(&entries);
        assert_eq!(
            summary,
            ScheduleSummary {
                total: 4,
                scheduled: 3,
                cancelled: 1,
                additional: 2,
                cancelled_percent: 25,
                additional_percent: 50,
            }
        );
        assert_eq!(ScheduleSummary::from_entries(&[]), ScheduleSummary::default());
    }

    #[test]
    fn test_schedule_summary_percent_truncates() {
        let entries = vec![
            entry(1, FlightStatus::Cancelled, ArrivalStatus::Cancelled),
            entry(2, FlightStatus::Scheduled, ArrivalStatus::Arrived),
            entry(3, FlightStatus::Scheduled, ArrivalStatus::Delayed),
        ];

        let summary = ScheduleSummary::from_entries(&entries);
        assert_eq!(summary.cancelled_percent, 33);
        assert_eq!(summary.additional_percent, 33);

        let empty = ScheduleSummary::from_entries(&[]);
        assert_eq!(empty.cancelled_percent, 0);
        assert_eq!(empty.additional_percent, 0);
    }
}
