//! Data models
//!
//! Rust structs for the daily log and its nutrient values.

mod daily_log;
mod goal;
mod log_entry;
mod nutrition;

pub use daily_log::DailyLog;
pub use goal::{DayType, GoalProfile};
pub use log_entry::LogEntry;
pub use nutrition::{NutrientRecord, Remaining, Totals};
