pub mod goals;
pub mod user;
pub mod workout;

pub(crate) mod serde_compat;

pub use goals::{GoalMetric, WeightEntry};
pub use user::{FitnessLevel, User, UserUpdate};
pub use workout::{WorkoutCategory, WorkoutRecord};
