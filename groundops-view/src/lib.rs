pub mod animation;
pub mod calendar;
pub mod draft;
pub mod gse;
pub mod kpi;
pub mod lifecycle;
pub mod modal;
pub mod operations;
pub mod schedule;
pub mod tickets;

pub use animation::{ease_out_quart, AnimationHandle, Animator};
pub use calendar::CalendarSelection;
pub use draft::{DraftError, DraftField, ScheduleDraft};
pub use gse::{GseScreen, MapFocus};
pub use kpi::{KpiBoard, KpiTiles, MisTiles};
pub use lifecycle::{Disposable, InstanceSlot};
pub use modal::{DraftAction, InfoModal, InfoTopic, RecordModal};
pub use operations::{OperationsScreen, StatusChartKind, TrendChartKind};
pub use schedule::{ScheduleScreen, Submission};
pub use tickets::{RandomTicketIds, TicketDesk, TicketDraft, TicketError, TicketIdGenerator};
