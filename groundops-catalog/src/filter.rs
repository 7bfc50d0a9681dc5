use groundops_core::models::{EquipmentRecord, FlightRecord, ScheduleEntry, TicketRecord};

/// Records exposing a fixed set of free-text fields for the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for FlightRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.flight_no.as_str(), self.route.as_str(), self.aircraft.as_str()]
    }
}

impl Searchable for ScheduleEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.flight_no.as_str(), self.airline.as_str(), self.route.as_str()]
    }
}

impl Searchable for EquipmentRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.equipment_type.as_str(), self.location.as_str()]
    }
}

impl Searchable for TicketRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.subject.as_str(), self.description.as_str()]
    }
}

/// Case-insensitive substring match over a record's searchable fields.
/// An empty query matches every record.
pub fn text_matches<T: Searchable + ?Sized>(entry: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    entry
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A conjunction of predicates over one catalog type.
///
/// `Default` must be the identity criteria: it admits every record.
pub trait Criteria<T> {
    fn admits(&self, entry: &T) -> bool;
}

/// Order-preserving subset of `catalog` admitted by `criteria`.
pub fn filter<T, C>(catalog: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
{
    catalog
        .iter()
        .filter(|entry| criteria.admits(entry))
        .cloned()
        .collect()
}
