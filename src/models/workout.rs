use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::FitnessLevel;

/// Named group of workouts as presented in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCategory {
    pub name: String,
    pub workouts: Vec<WorkoutRecord>,
}

impl WorkoutCategory {
    pub fn new(name: impl Into<String>, workouts: Vec<WorkoutRecord>) -> Self {
        Self {
            name: name.into(),
            workouts,
        }
    }
}

/// Single workout entry. Ids are unique across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: u32,
    pub name: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub level: FitnessLevel,
    pub description: String,
    /// Day the workout was performed, absent for catalog templates
    #[serde(default, with = "crate::models::serde_compat::empty_string_date")]
    pub date: Option<NaiveDate>,
    /// Body weight logged alongside the workout, in kilograms
    #[serde(default, with = "crate::models::serde_compat::empty_string_number")]
    pub weight: Option<f64>,
}

impl WorkoutRecord {
    /// Create a catalog template entry with no date or logged weight
    pub fn new(
        id: u32,
        name: impl Into<String>,
        duration_minutes: u32,
        calories: u32,
        level: FitnessLevel,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration_minutes,
            calories,
            level,
            description: description.into(),
            date: None,
            weight: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// The built-in workout catalog shown before any remote data is loaded
pub fn builtin_catalog() -> Vec<WorkoutCategory> {
    use FitnessLevel::{Advanced, Beginner, Intermediate};

    vec![
        WorkoutCategory::new(
            "Strength",
            vec![
                WorkoutRecord::new(
                    1,
                    "Upper Body",
                    45,
                    320,
                    Intermediate,
                    "Focus on chest, shoulders, and arms",
                ),
                WorkoutRecord::new(
                    2,
                    "Lower Body",
                    40,
                    350,
                    Intermediate,
                    "Squats, deadlifts, and leg press",
                ),
                WorkoutRecord::new(3, "Full Body", 60, 450, Advanced, "Complete body workout"),
            ],
        ),
        WorkoutCategory::new(
            "Cardio",
            vec![
                WorkoutRecord::new(4, "HIIT", 30, 400, Advanced, "High-intensity interval training"),
                WorkoutRecord::new(5, "Running", 40, 380, Intermediate, "Outdoor running session"),
                WorkoutRecord::new(6, "Cycling", 45, 350, Beginner, "Indoor cycling workout"),
            ],
        ),
        WorkoutCategory::new(
            "Flexibility",
            vec![
                WorkoutRecord::new(7, "Yoga", 50, 200, Beginner, "Basic yoga flow"),
                WorkoutRecord::new(8, "Stretching", 30, 150, Beginner, "Full body stretching"),
                WorkoutRecord::new(9, "Pilates", 45, 250, Intermediate, "Core-focused pilates"),
            ],
        ),
    ]
}
