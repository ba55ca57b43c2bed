//! Daily log MCP tools
//!
//! Mutations and views on the session's log. Every function takes the log
//! explicitly; there is no hidden session state. Gram amounts are validated
//! here, before the scaler ever sees them.

use serde::Serialize;

use crate::models::{DailyLog, DayType, GoalProfile, LogEntry, NutrientRecord, Remaining, Totals};
use crate::nutrition::{scale, ScaledPortion};

/// Response for add_entry
#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub entry: LogEntry,
    pub totals: Totals,
    pub remaining: Remaining,
    pub progress_fraction: f64,
}

/// Response for preview_portion
#[derive(Debug, Serialize)]
pub struct PreviewPortionResponse {
    pub grams: f64,
    pub calories: i64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Response for set_day_type
#[derive(Debug, Serialize)]
pub struct SetDayTypeResponse {
    pub day_type: String,
    pub goal: GoalProfile,
}

/// Response for reset_log
#[derive(Debug, Serialize)]
pub struct ResetLogResponse {
    pub entries_cleared: usize,
}

/// Full day view for the client
#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub day_type: String,
    pub goal: GoalProfile,
    pub entries: Vec<LogEntry>,
    pub totals: Totals,
    pub remaining: Remaining,
    pub progress_fraction: f64,
    pub progress_percent: i64,
}

fn validate_grams(grams: f64) -> Result<(), String> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(format!("Gram amount must be a positive number, got {}", grams));
    }
    Ok(())
}

/// Scale and append a confirmed food addition.
///
/// A rejected add never touches the log.
pub fn add_entry(
    log: &mut DailyLog,
    name: &str,
    nutrients: &NutrientRecord,
    grams: f64,
) -> Result<AddEntryResponse, String> {
    validate_grams(grams)?;

    let entry = LogEntry::new(name, nutrients, grams);
    log.append(entry.clone());

    tracing::info!(name, grams, calories = entry.calories, "entry appended");

    Ok(AddEntryResponse {
        entry,
        totals: log.totals(),
        remaining: log.remaining(),
        progress_fraction: log.progress_fraction(),
    })
}

/// Show what a gram amount of a food would contribute, without logging it
pub fn preview_portion(
    nutrients: &NutrientRecord,
    grams: f64,
) -> Result<PreviewPortionResponse, String> {
    validate_grams(grams)?;

    let ScaledPortion { calories, protein, fat, carbs } = scale(nutrients, grams);
    Ok(PreviewPortionResponse { grams, calories, protein, fat, carbs })
}

/// Switch between rest and training day targets
pub fn set_day_type(log: &mut DailyLog, day_type: DayType) -> SetDayTypeResponse {
    log.set_day_type(day_type);
    SetDayTypeResponse {
        day_type: day_type.as_str().to_string(),
        goal: log.goal(),
    }
}

/// Clear the whole day
pub fn reset_log(log: &mut DailyLog) -> ResetLogResponse {
    let entries_cleared = log.len();
    log.reset();
    tracing::info!(entries_cleared, "log reset");
    ResetLogResponse { entries_cleared }
}

/// The dashboard view: entries in order, totals, goal deltas, progress
pub fn day_summary(log: &DailyLog) -> DaySummary {
    let progress = log.progress_fraction();
    DaySummary {
        date: log.opened_on().format("%Y-%m-%d").to_string(),
        day_type: log.day_type().as_str().to_string(),
        goal: log.goal(),
        entries: log.entries().to_vec(),
        totals: log.totals(),
        remaining: log.remaining(),
        progress_fraction: progress,
        progress_percent: (progress * 100.0) as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_log() -> DailyLog {
        DailyLog::new(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap())
    }

    fn skyr() -> NutrientRecord {
        NutrientRecord {
            calories_per_100g: 200.0,
            protein_per_100g: 20.0,
            carbs_per_100g: 10.0,
            fat_per_100g: 5.0,
        }
    }

    #[test]
    fn test_add_entry_appends_and_reports() {
        let mut log = new_log();
        let resp = add_entry(&mut log, "Skyr", &skyr(), 150.0).unwrap();
        assert_eq!(resp.entry.calories, 300);
        assert_eq!(resp.totals.calories, 300);
        assert_eq!(resp.remaining.calories, 2200);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_add_entry_rejects_zero_grams() {
        let mut log = new_log();
        assert!(add_entry(&mut log, "Skyr", &skyr(), 0.0).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_add_entry_rejects_negative_grams() {
        let mut log = new_log();
        assert!(add_entry(&mut log, "Skyr", &skyr(), -50.0).is_err());
        assert!(add_entry(&mut log, "Skyr", &skyr(), f64::NAN).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let resp = preview_portion(&skyr(), 150.0).unwrap();
        assert_eq!(resp.calories, 300);
        assert!((resp.protein - 30.0).abs() < 0.001);
        assert!(preview_portion(&skyr(), -1.0).is_err());
    }

    #[test]
    fn test_set_day_type_reports_goal() {
        let mut log = new_log();
        let resp = set_day_type(&mut log, DayType::Training);
        assert_eq!(resp.day_type, "training");
        assert_eq!(resp.goal.calories, 2900);
    }

    #[test]
    fn test_reset_counts_cleared_entries() {
        let mut log = new_log();
        add_entry(&mut log, "A", &skyr(), 100.0).unwrap();
        add_entry(&mut log, "B", &skyr(), 100.0).unwrap();
        let resp = reset_log(&mut log);
        assert_eq!(resp.entries_cleared, 2);
        assert_eq!(reset_log(&mut log).entries_cleared, 0);
    }

    #[test]
    fn test_day_summary_percent() {
        let mut log = new_log();
        add_entry(&mut log, "A", &skyr(), 150.0).unwrap();
        add_entry(&mut log, "B", &skyr(), 225.0).unwrap();
        let summary = day_summary(&log);
        assert_eq!(summary.totals.calories, 750);
        assert!((summary.progress_fraction - 0.3).abs() < 1e-9);
        assert_eq!(summary.progress_percent, 30);
        assert_eq!(summary.date, "2024-03-11");
        assert_eq!(summary.entries.len(), 2);
    }
}
