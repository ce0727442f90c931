use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use fitme::models::workout::builtin_catalog;
use fitme::models::{FitnessLevel, GoalMetric, WorkoutCategory, WorkoutRecord};
use fitme::projection::{self, export};

fn record(id: u32, name: &str) -> WorkoutRecord {
    WorkoutRecord::new(id, name, 30, 300, FitnessLevel::Beginner, "test entry")
}

fn dated(id: u32, name: &str, year: i32, month: u32, day: u32) -> WorkoutRecord {
    record(id, name).with_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

#[test]
fn test_flatten_preserves_every_record() {
    let catalog = builtin_catalog();
    let expected: usize = catalog.iter().map(|category| category.workouts.len()).sum();

    let flattened = projection::flatten(&catalog);

    assert_eq!(flattened.len(), expected);
    let ids: Vec<u32> = flattened.iter().map(|workout| workout.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_flatten_keeps_category_then_record_order() {
    let catalog = vec![
        WorkoutCategory::new("Strength", vec![record(1, "Upper Body"), record(2, "Lower Body")]),
        WorkoutCategory::new("Cardio", vec![record(3, "HIIT")]),
    ];

    let names: Vec<String> = projection::flatten(&catalog)
        .into_iter()
        .map(|workout| workout.name)
        .collect();

    assert_eq!(names, vec!["Upper Body", "Lower Body", "HIIT"]);
}

#[test]
fn test_sort_keeps_undated_records_in_input_order() {
    let records = vec![record(1, "Yoga"), record(2, "HIIT"), record(3, "Running")];

    let sorted = projection::sort_by_date_desc(&records);

    assert_eq!(sorted, records);
}

#[test]
fn test_sort_keeps_equal_dates_in_input_order() {
    let records = vec![
        dated(1, "Running", 2023, 5, 1),
        dated(2, "Cycling", 2023, 5, 1),
        dated(3, "HIIT", 2023, 5, 3),
    ];

    let sorted = projection::sort_by_date_desc(&records);

    let ids: Vec<u32> = sorted.iter().map(|workout| workout.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_recent_workouts_take_the_latest_two() {
    let catalog = vec![
        WorkoutCategory::new(
            "Strength",
            vec![
                dated(1, "Upper Body", 2023, 5, 1),
                dated(2, "Lower Body", 2023, 5, 3),
            ],
        ),
        WorkoutCategory::new("Cardio", vec![record(3, "HIIT")]),
    ];

    let sorted = projection::sort_by_date_desc(&projection::flatten(&catalog));
    let recent = projection::top_n(sorted, 2);

    let names: Vec<&str> = recent.iter().map(|workout| workout.name.as_str()).collect();
    assert_eq!(names, vec!["Lower Body", "Upper Body"]);
}

#[test]
fn test_top_n_beyond_length_returns_everything_unchanged() {
    let records = vec![
        dated(1, "Running", 2023, 5, 3),
        record(2, "Yoga"),
        dated(3, "HIIT", 2023, 5, 1),
    ];

    let taken = projection::top_n(records.clone(), 10);

    assert_eq!(taken, records);
}

#[test]
fn test_zero_target_yields_zero_ratio() {
    let metric = GoalMetric::new("Weight", 75.0, 0.0);
    assert_eq!(metric.ratio(), 0.0);
    assert_eq!(metric.gauge_ratio(), 0.0);
    assert_eq!(metric.percent(), 0.0);

    let empty = GoalMetric::new("Steps Taken", 0.0, 0.0);
    assert_eq!(empty.ratio(), 0.0);
}

#[test]
fn test_overshoot_is_reported_raw_but_clamped_for_gauges() {
    let metric = GoalMetric::new("Calories Burned", 1500.0, 1000.0);
    assert_eq!(metric.ratio(), 1.5);
    assert_eq!(metric.gauge_ratio(), 1.0);
    assert_eq!(metric.percent(), 100.0);
}

#[test]
fn test_format_date_renders_calendar_dates() {
    assert_eq!(projection::format_date("2023-05-01").unwrap(), "May 1, 2023");
    assert_eq!(
        projection::format_date("2023-12-25").unwrap(),
        "Dec 25, 2023"
    );
}

#[test]
fn test_format_date_accepts_rfc3339_timestamps() {
    assert_eq!(
        projection::format_date("2023-05-01T10:30:00Z").unwrap(),
        "May 1, 2023"
    );
}

#[test]
fn test_format_date_rejects_malformed_input() {
    let err = projection::format_date("not-a-date").unwrap_err();
    assert_eq!(err.input, "not-a-date");

    assert!(projection::format_date("").is_err());
    assert!(projection::format_date("05/01/2023").is_err());
}

#[test]
fn test_initials_take_the_first_letter_of_each_word() {
    assert_eq!(projection::initials("Fitness Enthusiast"), "FE");
    assert_eq!(projection::initials("Alex"), "A");
    assert_eq!(projection::initials("  Alex   Johnson  "), "AJ");
    assert_eq!(projection::initials(""), "");
}

#[test]
fn test_csv_round_trip_reconstructs_the_records() {
    let catalog = vec![WorkoutCategory::new(
        "Strength",
        vec![
            dated(1, "Squats, heavy \"work\"", 2023, 5, 1).with_weight(75.2),
            record(2, "Bench\npress"),
        ],
    )];

    let rows = export::workout_history_rows(&projection::flatten(&catalog));
    let csv_text = export::to_csv(&rows).unwrap();

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let parsed: Vec<export::WorkoutHistoryRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(parsed, rows);
}

#[test]
fn test_csv_export_of_nothing_is_a_no_op() {
    let rows: Vec<export::WorkoutHistoryRow> = Vec::new();
    assert_eq!(export::to_csv(&rows).unwrap(), "");
}
