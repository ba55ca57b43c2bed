//! Shared nutrition data structures
//!
//! Per-100-gram provider records and the day's running totals.

use serde::{Deserialize, Serialize};

use super::GoalProfile;

/// Nutrient composition of a food per 100 grams, as reported by the provider.
///
/// Fields the provider omits default to zero; values are passed through
/// without range validation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutrientRecord {
    #[serde(default)]
    pub calories_per_100g: f64,
    #[serde(default)]
    pub protein_per_100g: f64,
    #[serde(default)]
    pub carbs_per_100g: f64,
    #[serde(default)]
    pub fat_per_100g: f64,
}

/// Summed nutrient intake across all entries of the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: i64,
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

impl Totals {
    /// Create totals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Intake still left before each target is met; negative when exceeded
    pub fn remaining(&self, goal: &GoalProfile) -> Remaining {
        Remaining {
            calories: goal.calories - self.calories,
            protein_g: goal.protein_g - self.protein,
            carbs_g: goal.carbs_g - self.carbs,
            fat_g: goal.fat_g - self.fat,
        }
    }

    /// Fraction of the calorie target consumed, capped at 1.0.
    ///
    /// Goal calories are positive by construction, so no division guard.
    pub fn progress_fraction(&self, goal: &GoalProfile) -> f64 {
        (self.calories as f64 / goal.calories as f64).min(1.0)
    }
}

impl std::ops::Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::zero(), |acc, t| acc + t)
    }
}

/// Per-axis distance to the goal, `target - consumed`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Remaining {
    pub calories: i64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayType;

    #[test]
    fn test_remaining_simple() {
        let totals = Totals {
            calories: 300,
            protein: 30.0,
            carbs: 15.0,
            fat: 7.5,
        };
        let goal = GoalProfile::for_day(DayType::Rest);
        let rem = totals.remaining(&goal);
        assert_eq!(rem.calories, 2200);
        assert!((rem.protein_g - 170.0).abs() < 0.001);
        assert!((rem.carbs_g - 240.0).abs() < 0.001);
        assert!((rem.fat_g - 67.5).abs() < 0.001);
    }

    #[test]
    fn test_remaining_goes_negative_when_exceeded() {
        let totals = Totals {
            calories: 3000,
            protein: 250.0,
            carbs: 0.0,
            fat: 0.0,
        };
        let goal = GoalProfile::for_day(DayType::Rest);
        let rem = totals.remaining(&goal);
        assert_eq!(rem.calories, -500);
        assert!((rem.protein_g + 50.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_fraction_capped_at_one() {
        let goal = GoalProfile::for_day(DayType::Rest);
        let over = Totals { calories: 9000, ..Totals::zero() };
        assert_eq!(over.progress_fraction(&goal), 1.0);
    }

    #[test]
    fn test_progress_fraction_empty_is_zero() {
        let goal = GoalProfile::for_day(DayType::Training);
        assert_eq!(Totals::zero().progress_fraction(&goal), 0.0);
    }

    #[test]
    fn test_totals_sum() {
        let parts = vec![
            Totals { calories: 300, protein: 10.0, carbs: 5.0, fat: 1.0 },
            Totals { calories: 450, protein: 20.0, carbs: 15.0, fat: 2.5 },
        ];
        let total: Totals = parts.into_iter().sum();
        assert_eq!(total.calories, 750);
        assert!((total.protein - 30.0).abs() < 0.001);
        assert!((total.carbs - 20.0).abs() < 0.001);
        assert!((total.fat - 3.5).abs() < 0.001);
    }
}
