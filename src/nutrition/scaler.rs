//! Portion scaler
//!
//! Converts a per-100-gram nutrient record plus a gram amount into the
//! absolute values stored on a log entry.

use crate::models::NutrientRecord;

/// Nutrients in one weighed portion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPortion {
    pub calories: i64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a per-100g record to a gram amount.
///
/// Calories truncate to a whole number; macros round to one decimal. The
/// asymmetry matches how the values are displayed and must stay that way.
/// Pure function: zero grams yields an all-zero portion, and non-positive
/// input is the caller's problem to reject.
pub fn scale(record: &NutrientRecord, grams: f64) -> ScaledPortion {
    let factor = grams / 100.0;
    ScaledPortion {
        calories: (record.calories_per_100g * factor) as i64,
        protein: round1(record.protein_per_100g * factor),
        fat: round1(record.fat_per_100g * factor),
        carbs: round1(record.carbs_per_100g * factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kcal: f64, protein: f64, carbs: f64, fat: f64) -> NutrientRecord {
        NutrientRecord {
            calories_per_100g: kcal,
            protein_per_100g: protein,
            carbs_per_100g: carbs,
            fat_per_100g: fat,
        }
    }

    #[test]
    fn test_scale_150g() {
        let portion = scale(&record(200.0, 20.0, 10.0, 5.0), 150.0);
        assert_eq!(portion.calories, 300);
        assert!((portion.protein - 30.0).abs() < 0.001);
        assert!((portion.fat - 7.5).abs() < 0.001);
        assert!((portion.carbs - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_calories_truncate_not_round() {
        // 99 kcal/100g at 50g = 49.5 -> 49, not 50
        let portion = scale(&record(99.0, 0.0, 0.0, 0.0), 50.0);
        assert_eq!(portion.calories, 49);

        // 333 kcal/100g at 30g = 99.9 -> 99
        let portion = scale(&record(333.0, 0.0, 0.0, 0.0), 30.0);
        assert_eq!(portion.calories, 99);
    }

    #[test]
    fn test_macros_round_to_one_decimal() {
        // 3.33 g/100g at 50g = 1.665 -> 1.7
        let portion = scale(&record(0.0, 3.33, 3.33, 3.33), 50.0);
        assert!((portion.protein - 1.7).abs() < 0.001);
        assert!((portion.carbs - 1.7).abs() < 0.001);
        assert!((portion.fat - 1.7).abs() < 0.001);
    }

    #[test]
    fn test_scaling_linearity() {
        let r = record(247.0, 12.3, 45.6, 7.8);
        for grams in [1.0, 37.0, 100.0, 250.0, 999.0] {
            let portion = scale(&r, grams);
            assert_eq!(
                portion.calories,
                (r.calories_per_100g * grams / 100.0) as i64
            );
        }
    }

    #[test]
    fn test_zero_grams_yields_zero_portion() {
        let portion = scale(&record(542.0, 25.0, 30.0, 40.0), 0.0);
        assert_eq!(portion.calories, 0);
        assert_eq!(portion.protein, 0.0);
        assert_eq!(portion.fat, 0.0);
        assert_eq!(portion.carbs, 0.0);
    }

    #[test]
    fn test_missing_fields_stay_zero() {
        // Provider omitted every nutriment
        let portion = scale(&NutrientRecord::default(), 180.0);
        assert_eq!(portion.calories, 0);
        assert_eq!(portion.protein, 0.0);
    }
}
