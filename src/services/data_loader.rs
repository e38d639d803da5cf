//! Loading the JSON year bundle supplied by the calendar backend.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::calendar::Calendar;
use crate::models::event::EventsByDate;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read year data from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed year data in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Calendars plus events keyed by `YYYY-MM-DD`, optionally tagged with the
/// year they were fetched for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    #[serde(default)]
    pub events: EventsByDate,
}

pub fn parse_year_bundle(json: &str) -> Result<YearBundle, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_year_bundle(path: &Path) -> Result<YearBundle, DataError> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = parse_year_bundle(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded {} calendars and {} event dates from {}",
        bundle.calendars.len(),
        bundle.events.len(),
        path.display()
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_bundle() {
        let bundle = parse_year_bundle("{}").unwrap();
        assert_eq!(bundle, YearBundle::default());
    }

    #[test]
    fn test_parse_bundle() {
        let json = r##"{
            "year": 2025,
            "calendars": [{ "id": "work", "backgroundColor": "#0B8043", "selected": true }],
            "events": {
                "2025-01-06": [
                    { "id": "e1", "calendarId": "work", "start": { "date": "2025-01-06" } }
                ]
            }
        }"##;
        let bundle = parse_year_bundle(json).unwrap();

        assert_eq!(bundle.year, Some(2025));
        assert_eq!(bundle.calendars[0].display_color, "#0B8043");
        assert_eq!(bundle.events["2025-01-06"].len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_year_bundle(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("year.json");
        fs::write(&path, "{ \"events\": [").unwrap();

        let err = load_year_bundle(&path).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.to_string().contains("year.json"));
    }
}
