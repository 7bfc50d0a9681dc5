use chrono::NaiveDate;
use serde::Serialize;

use groundops_core::DateRange;

/// Two-click date picker of the operations sidebar.
///
/// The first click picks the start, the second the end (swapping when it is
/// earlier than the start), and a click on a complete range starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl CalendarSelection {
    pub fn click(&mut self, day: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) if day < start => {
                self.start = Some(day);
                self.end = Some(start);
            }
            (Some(_), None) => self.end = Some(day),
            _ => {
                self.start = Some(day);
                self.end = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Apply is only offered once both ends are picked.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Whether `day` should be highlighted as part of the picked range.
    pub fn highlights(&self, day: NaiveDate) -> bool {
        self.is_complete() && self.range().contains(day)
    }
}
