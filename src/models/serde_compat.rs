//! Serde adapters for the upstream JSON convention of encoding absent
//! optional values as empty strings rather than null.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `Option<NaiveDate>` encoded as an ISO calendar date, with `""` for none
pub mod empty_string_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// `Option<f64>` that tolerates the upstream mix of numbers, numeric
/// strings, and `""` for none
pub mod empty_string_number {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(number) => serializer.serialize_f64(*number),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(number)) => Ok(Some(number)),
            Some(Raw::Text(text)) if text.is_empty() => Ok(None),
            Some(Raw::Text(text)) => text
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, with = "super::empty_string_date")]
        date: Option<NaiveDate>,
        #[serde(default, with = "super::empty_string_number")]
        weight: Option<f64>,
    }

    #[test]
    fn empty_strings_decode_to_none() {
        let probe: Probe = serde_json::from_str(r#"{"date":"","weight":""}"#).unwrap();
        assert_eq!(probe.date, None);
        assert_eq!(probe.weight, None);
    }

    #[test]
    fn values_round_trip() {
        let probe = Probe {
            date: NaiveDate::from_ymd_opt(2023, 5, 1),
            weight: Some(74.5),
        };
        let json = serde_json::to_string(&probe).unwrap();
        let back: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, probe);
    }

    #[test]
    fn none_encodes_as_empty_string() {
        let probe = Probe {
            date: None,
            weight: None,
        };
        let json = serde_json::to_string(&probe).unwrap();
        assert_eq!(json, r#"{"date":"","weight":""}"#);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let probe: Probe = serde_json::from_str(r#"{"date":"2023-05-01","weight":"75"}"#).unwrap();
        assert_eq!(probe.date, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(probe.weight, Some(75.0));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let result = serde_json::from_str::<Probe>(r#"{"date":"05/01/2023","weight":""}"#);
        assert!(result.is_err());
    }
}
