use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display-only progress metric for the dashboard goal panels.
/// Recomputed on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetric {
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: Option<String>,
}

impl GoalMetric {
    pub fn new(label: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            label: label.into(),
            current,
            target,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Raw completion ratio. A target of zero yields zero rather than a
    /// division fault; overshoot is reported as-is (may exceed 1).
    pub fn ratio(&self) -> f64 {
        if self.target == 0.0 {
            return 0.0;
        }
        self.current / self.target
    }

    /// Completion ratio clamped to [0, 1] for gauge rendering
    pub fn gauge_ratio(&self) -> f64 {
        self.ratio().clamp(0.0, 1.0)
    }

    /// Completion percentage capped at 100 for progress labels
    pub fn percent(&self) -> f64 {
        (self.ratio() * 100.0).min(100.0)
    }

    /// "current / target unit" as shown next to the gauge
    pub fn progress_label(&self) -> String {
        let unit = self
            .unit
            .as_deref()
            .map(|u| format!(" {}", u))
            .unwrap_or_default();
        format!("{} / {}{}", self.current, self.target, unit)
    }
}

/// One point in the tracked body-weight series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub current: f64,
    pub target: f64,
}

/// Today's goal set for the dashboard
pub fn daily_goals() -> Vec<GoalMetric> {
    vec![
        GoalMetric::new("Calories Burned", 500.0, 1000.0),
        GoalMetric::new("Steps Taken", 5834.0, 10000.0),
        GoalMetric::new("Workout Time", 45.0, 60.0).with_unit("min"),
        GoalMetric::new("Weight", 75.0, 70.0).with_unit("kg"),
    ]
}

/// This week's goal set for the dashboard
pub fn weekly_goals() -> Vec<GoalMetric> {
    vec![
        GoalMetric::new("Calories Burned", 3500.0, 7000.0),
        GoalMetric::new("Steps Taken", 41834.0, 70000.0),
        GoalMetric::new("Workout Time", 180.0, 300.0).with_unit("min"),
        GoalMetric::new("Weight Loss", 0.5, 1.0).with_unit("kg"),
    ]
}

/// Sample body-weight series shown on the history screen
pub fn weight_history() -> Vec<WeightEntry> {
    vec![
        weight_entry(2023, 4, 28, 74.8),
        weight_entry(2023, 4, 25, 75.0),
        weight_entry(2023, 4, 22, 75.2),
        weight_entry(2023, 4, 19, 75.5),
        weight_entry(2023, 4, 16, 75.8),
    ]
}

fn weight_entry(year: i32, month: u32, day: u32, current: f64) -> WeightEntry {
    WeightEntry {
        // Seed dates are compile-time constants
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        current,
        target: 70.0,
    }
}
