pub mod charts;
pub mod exporter;
pub mod render;
pub mod state;

pub use charts::{ChartBoard, ChartError, HeadlessChart, HeadlessMap, PerformanceChart};
pub use exporter::write_exports;
pub use render::DashboardSnapshot;
pub use state::Dashboard;
