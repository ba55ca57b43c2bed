//! Day type and goal profile
//!
//! Maps the rest/training day selector to fixed daily nutrient targets.

use serde::{Deserialize, Serialize};

/// Whether the user trained today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Training,
    #[default]
    Rest,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Training => "training",
            DayType::Rest => "rest",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "training" => DayType::Training,
            _ => DayType::Rest,
        }
    }
}

/// Daily intake targets for one day type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    pub calories: i64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl GoalProfile {
    /// Look up the fixed targets for a day type
    pub const fn for_day(day_type: DayType) -> Self {
        match day_type {
            DayType::Training => Self {
                calories: 2900,
                protein_g: 220.0,
                carbs_g: 330.0,
                fat_g: 75.0,
            },
            DayType::Rest => Self {
                calories: 2500,
                protein_g: 200.0,
                carbs_g: 255.0,
                fat_g: 75.0,
            },
        }
    }
}
