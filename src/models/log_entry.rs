//! Log entry model
//!
//! A single confirmed food addition with already gram-scaled nutrient values.

use serde::{Deserialize, Serialize};

use super::{NutrientRecord, Totals};
use crate::nutrition::scale;

/// One recorded food addition.
///
/// Entries are immutable once appended; the only way to remove one is the
/// full-log reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub grams: f64,
    pub calories: i64,
    pub protein: f64,  // grams, 1 decimal
    pub fat: f64,      // grams, 1 decimal
    pub carbs: f64,    // grams, 1 decimal
}

impl LogEntry {
    /// Build an entry by scaling a per-100g record to a gram amount
    pub fn new(name: impl Into<String>, record: &NutrientRecord, grams: f64) -> Self {
        let portion = scale(record, grams);
        Self {
            name: name.into(),
            grams,
            calories: portion.calories,
            protein: portion.protein,
            fat: portion.fat,
            carbs: portion.carbs,
        }
    }

    /// This entry's contribution to the day's totals
    pub fn totals(&self) -> Totals {
        Totals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}
