//! Pure view derivations over store snapshots. Nothing in this module
//! mutates its input or holds state of its own.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{WorkoutCategory, WorkoutRecord};

pub mod export;

pub use export::{to_csv, ExportError};

/// A date string that could not be parsed
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid date: {input:?}")]
pub struct InvalidDateError {
    pub input: String,
}

/// Flatten categories into one workout list, category order first,
/// in-category order second
pub fn flatten(categories: &[WorkoutCategory]) -> Vec<WorkoutRecord> {
    categories
        .iter()
        .flat_map(|category| category.workouts.iter().cloned())
        .collect()
}

/// Sort workouts by date, most recent first. The sort is stable and any
/// pair involving a missing date compares equal, so undated records
/// keep their input order.
pub fn sort_by_date_desc(records: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match (a.date, b.date) {
        (Some(first), Some(second)) => second.cmp(&first),
        _ => std::cmp::Ordering::Equal,
    });
    sorted
}

/// First `n` records, or all of them when fewer exist
pub fn top_n(mut records: Vec<WorkoutRecord>, n: usize) -> Vec<WorkoutRecord> {
    records.truncate(n);
    records
}

/// Render an ISO calendar date or RFC 3339 timestamp as "May 1, 2023"
pub fn format_date(input: &str) -> Result<String, InvalidDateError> {
    let date = parse_date(input).ok_or_else(|| InvalidDateError {
        input: input.to_string(),
    })?;
    Ok(format_day(date))
}

/// Render an already-parsed date as "May 1, 2023"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// First letter of each word, for the avatar badge
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
