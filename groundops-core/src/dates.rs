use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ISO first, then the schedule screen's "Nov 11, 2025" display form.
const DISPLAY_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"];

/// Parse a catalog date string into a comparable calendar date.
///
/// Returns `None` for anything that is not a real date; callers treat that
/// as "never inside a range" rather than as an error.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DISPLAY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Inclusive calendar range. Only active when both bounds are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }

    /// Range check against a raw catalog string; malformed dates never match an active range.
    pub fn admits(&self, raw: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        parse_display_date(raw).is_some_and(|date| self.contains(date))
    }
}
