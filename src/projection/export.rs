//! CSV rendering of history views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{WeightEntry, WorkoutRecord};

/// Default artifact name for the workout history export
pub const WORKOUT_HISTORY_FILE: &str = "workout-history.csv";

/// Default artifact name for the weight history export
pub const WEIGHT_HISTORY_FILE: &str = "weight-history.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] csv::Error),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize records to CSV text: a header row of field names in struct
/// order, then one row per record with every field quoted, so the round
/// trip is lossless. An empty slice yields an empty string.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Render records to CSV and write them to a file
pub fn write_csv<T: Serialize>(records: &[T], path: &std::path::Path) -> Result<(), ExportError> {
    let content = to_csv(records)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Workout-history row shape as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryRow {
    pub date: Option<NaiveDate>,
    pub workout: String,
    pub duration: u32,
    pub calories: u32,
    pub weight: Option<f64>,
}

/// Tracked-weight row shape as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightHistoryRow {
    pub date: NaiveDate,
    pub current: f64,
    pub target: f64,
}

/// Export rows for the given workouts, preserving their order
pub fn workout_history_rows(records: &[WorkoutRecord]) -> Vec<WorkoutHistoryRow> {
    records
        .iter()
        .map(|record| WorkoutHistoryRow {
            date: record.date,
            workout: record.name.clone(),
            duration: record.duration_minutes,
            calories: record.calories,
            weight: record.weight,
        })
        .collect()
}

/// Export rows for the tracked-weight series
pub fn weight_history_rows(entries: &[WeightEntry]) -> Vec<WeightHistoryRow> {
    entries
        .iter()
        .map(|entry| WeightHistoryRow {
            date: entry.date,
            current: entry.current,
            target: entry.target,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::goals::weight_history;

    #[test]
    fn empty_input_yields_empty_output() {
        let rows: Vec<WeightHistoryRow> = Vec::new();
        assert_eq!(to_csv(&rows).unwrap(), "");
    }

    #[test]
    fn header_uses_field_names_in_struct_order() {
        let rows = weight_history_rows(&weight_history());
        let csv_text = to_csv(&rows).unwrap();

        let header = csv_text.lines().next().unwrap();
        assert_eq!(header, "\"date\",\"current\",\"target\"");
        assert_eq!(csv_text.lines().count(), rows.len() + 1);
    }

    #[test]
    fn every_field_is_quoted() {
        let rows = vec![WorkoutHistoryRow {
            date: NaiveDate::from_ymd_opt(2023, 5, 1),
            workout: "HIIT".to_string(),
            duration: 30,
            calories: 400,
            weight: None,
        }];

        let csv_text = to_csv(&rows).unwrap();
        let data_line = csv_text.lines().nth(1).unwrap();
        assert_eq!(data_line, "\"2023-05-01\",\"HIIT\",\"30\",\"400\",\"\"");
    }

    #[test]
    fn delimiters_and_quotes_round_trip() {
        let rows = vec![
            WorkoutHistoryRow {
                date: NaiveDate::from_ymd_opt(2023, 5, 1),
                workout: "Squats, heavy \"work\"".to_string(),
                duration: 40,
                calories: 350,
                weight: Some(75.2),
            },
            WorkoutHistoryRow {
                date: None,
                workout: "Yoga\nflow".to_string(),
                duration: 50,
                calories: 200,
                weight: None,
            },
        ];

        let csv_text = to_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let parsed: Vec<WorkoutHistoryRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(parsed, rows);
    }
}
