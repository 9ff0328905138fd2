use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;
use thiserror::Error;
use tracing::debug;

use crate::lane::CalendarEvent;

/// Errors produced while loading events from an external file
#[derive(Debug, Error)]
pub enum EventLoadError {
    #[error("failed to read events file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse events CSV")]
    Csv(#[from] csv::Error),
    #[error("failed to parse events JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid date '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses a calendar date in ISO `YYYY-MM-DD` form
fn parse_date(value: &str) -> Result<NaiveDate, EventLoadError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|source| EventLoadError::InvalidDate {
        value: trimmed.to_string(),
        source,
    })
}

/// Loads calendar events from a CSV file with `title`, `start` and `end`
/// columns. Rows without a start date are skipped; a blank end or title
/// leaves the event single-day or untitled
pub fn load_events_from_csv<P: AsRef<Path>>(
    csv_path: P,
) -> Result<Vec<CalendarEvent>, EventLoadError> {
    let mut reader = Reader::from_path(csv_path)?;
    let events = collect_events(&mut reader)?;

    debug!(count = events.len(), "loaded events from CSV");
    Ok(events)
}

fn collect_events<R: Read>(reader: &mut Reader<R>) -> Result<Vec<CalendarEvent>, EventLoadError> {
    let headers = reader.headers()?;

    // Find column indices
    let title_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("title"))
        .unwrap_or(0);
    let start_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("start"))
        .unwrap_or(1);
    let end_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("end"))
        .unwrap_or(2);

    let mut events = Vec::new();
    for result in reader.records() {
        let record = result?;

        let start = record.get(start_col).unwrap_or("").trim();
        if start.is_empty() {
            continue; // Skip incomplete records
        }

        let end = record.get(end_col).unwrap_or("").trim();
        let title = record.get(title_col).unwrap_or("").trim();

        events.push(CalendarEvent {
            start: parse_date(start)?,
            end: if end.is_empty() {
                None
            } else {
                Some(parse_date(end)?)
            },
            title: if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            },
        });
    }

    Ok(events)
}

/// Parses calendar events from a JSON array of event objects
pub fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>, EventLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads calendar events from a JSON file holding an array of event objects
pub fn load_events_from_json<P: AsRef<Path>>(
    json_path: P,
) -> Result<Vec<CalendarEvent>, EventLoadError> {
    let contents = fs::read_to_string(json_path)?;
    let events = parse_events_json(&contents)?;

    debug!(count = events.len(), "loaded events from JSON");
    Ok(events)
}
