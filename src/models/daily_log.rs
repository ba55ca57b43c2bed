//! Daily log model
//!
//! The ordered, append-only record of everything eaten today, plus the
//! day-type selector that picks the goal profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DayType, GoalProfile, LogEntry, Remaining, Totals};

/// One session's food log.
///
/// Owned explicitly by the session that mutates it; there is no ambient
/// singleton. Entries appear in confirmation order and are only removed by
/// `reset`. The log never rolls over on its own; `opened_on` lets a client
/// notice a stale log and reset it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    opened_on: NaiveDate,
    day_type: DayType,
    entries: Vec<LogEntry>,
}

impl DailyLog {
    /// Create an empty log for the given date
    pub fn new(opened_on: NaiveDate) -> Self {
        Self {
            opened_on,
            day_type: DayType::default(),
            entries: Vec::new(),
        }
    }

    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn set_day_type(&mut self, day_type: DayType) {
        self.day_type = day_type;
    }

    /// The goal profile currently in effect
    pub fn goal(&self) -> GoalProfile {
        GoalProfile::for_day(self.day_type)
    }

    /// Entries in confirmation order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append a confirmed entry at the end. Always succeeds.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Clear all entries. The day type and open date survive.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Sum every entry's nutrients; an empty log is all zeros
    pub fn totals(&self) -> Totals {
        self.entries.iter().map(LogEntry::totals).sum()
    }

    /// Distance to the current goal on every axis
    pub fn remaining(&self) -> Remaining {
        self.totals().remaining(&self.goal())
    }

    /// Fraction of the calorie target consumed, capped at 1.0
    pub fn progress_fraction(&self) -> f64 {
        self.totals().progress_fraction(&self.goal())
    }
}
