//! Status tool
//!
//! Build and session information for the status tool, plus the usage
//! instructions surfaced to clients.

use std::time::Instant;

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::models::{DailyLog, Totals};

/// Instructions returned by the log_instructions tool
pub const LOG_INSTRUCTIONS: &str = "\
How to log a day of eating:

1. Call set_day_type with 'training' or 'rest' so the right daily targets apply.
2. Find the food:
   - search_foods with a text query (OpenFoodFacts; English queries match best), or
   - lookup_barcode with the digits from the package.
3. Each result carries per-100g values. Call preview_portion with those values
   and the weighed gram amount to show the user what it contributes.
4. When the user confirms, call add_log_entry with the food's name, the same
   per-100g values, and the gram amount. Grams must be positive.
5. Call get_day_summary any time for entries, totals, what remains of the
   goal, and calorie progress.
6. reset_log clears the day. Nothing is stored between sessions, so start a
   new day by resetting.";

/// Response for daylog_status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub build: BuildInfo,
    pub uptime_seconds: u64,
    pub session: SessionStatus,
}

/// Current session state summary
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub date: String,
    pub day_type: String,
    pub entry_count: usize,
    pub totals: Totals,
}

/// Tracks service start time for the status tool
pub struct StatusTracker {
    started_at: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self { started_at: Instant::now() }
    }

    pub fn get_status(&self, log: &DailyLog) -> StatusResponse {
        StatusResponse {
            build: BuildInfo::current(),
            uptime_seconds: self.started_at.elapsed().as_secs(),
            session: SessionStatus {
                date: log.opened_on().format("%Y-%m-%d").to_string(),
                day_type: log.day_type().as_str().to_string(),
                entry_count: log.len(),
                totals: log.totals(),
            },
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
