pub mod criteria;
pub mod export;
pub mod filter;
pub mod format;
pub mod stats;

pub use criteria::{EquipmentCriteria, FlightCriteria, ScheduleCriteria, TicketCriteria};
pub use export::{to_csv, CsvRow};
pub use filter::{filter, Criteria, Searchable};
pub use stats::{aggregate, percentage, Categorized, StatsRecord};
