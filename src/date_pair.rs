//! Date Pair
//!
//! Start/end date rule: the end date can never precede the start date.

use chrono::NaiveDate;

/// Canonical output format for dates (`yyyy-mm-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Observable states of a start/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    Empty,
    StartOnly,
    EndOnly,
    /// Both set, end >= start
    Both,
}

impl PairState {
    pub fn of(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (None, None) => PairState::Empty,
            (Some(_), None) => PairState::StartOnly,
            (None, Some(_)) => PairState::EndOnly,
            (Some(_), Some(_)) => PairState::Both,
        }
    }
}

/// What the end field must do after the start changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndConstraint {
    /// New minimum selectable end date
    pub min_date: NaiveDate,
    /// Replacement end value when the current one fell behind the start
    pub overwrite: Option<NaiveDate>,
}

/// Compute the end update for a new start date.
///
/// Returns `None` when the start was cleared: nothing is constrained then.
pub fn constrain_end(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<EndConstraint> {
    let start = start?;
    let overwrite = match end {
        Some(end) if end < start => Some(start),
        _ => None,
    };
    Some(EndConstraint { min_date: start, overwrite })
}
