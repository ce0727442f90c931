use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by the auth API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    pub goal: String,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub preferred_workouts: Vec<String>,
    /// Target training days per week
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u8,
    /// Locally-resolvable reference to the profile photo
    #[serde(default)]
    pub photo: Option<String>,
}

fn default_weekly_goal() -> u8 {
    3
}

/// Partial update applied to the active user via a shallow field merge.
/// Email is the account identity and is not editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub goal: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub preferred_workouts: Option<Vec<String>>,
    pub weekly_goal: Option<u8>,
    pub photo: Option<String>,
}

impl UserUpdate {
    /// Merge the populated fields onto the given user
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(goal) = self.goal {
            user.goal = goal;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(weight) = self.weight {
            user.weight = weight;
        }
        if let Some(height) = self.height {
            user.height = height;
        }
        if let Some(level) = self.fitness_level {
            user.fitness_level = level;
        }
        if let Some(preferred) = self.preferred_workouts {
            user.preferred_workouts = preferred;
        }
        if let Some(weekly) = self.weekly_goal {
            user.weekly_goal = weekly;
        }
        if let Some(photo) = self.photo {
            user.photo = Some(photo);
        }
    }
}

/// Self-reported fitness level, shared by user profiles and workout difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    /// All levels in ascending order, for selection prompts
    pub fn all() -> [FitnessLevel; 3] {
        [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ]
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(anyhow::anyhow!("Invalid fitness level: {}", s)),
        }
    }
}
