use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::week::WeekKey;

/// A calendar event with date-only semantics; a missing end date means a
/// single-day event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CalendarEvent {
    /// Inclusive (first day, last day) span of the event; a reversed range
    /// is normalized by swapping the endpoints
    pub fn span(&self) -> (NaiveDate, NaiveDate) {
        let end = self.end.unwrap_or(self.start);
        if end < self.start {
            (end, self.start)
        } else {
            (self.start, end)
        }
    }
}

/// An event carrying the single lane it occupies for its whole span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventWithLane {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub lane: usize,
    pub event_id: String,
}

/// An event carrying one lane per calendar week it touches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventWithWeeklyLane {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub weekly_lanes: BTreeMap<WeekKey, usize>,
    pub event_id: String,
}

/// Result of a global lane assignment pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneAssignment {
    pub events: Vec<EventWithLane>,
    pub total_lanes: usize,
}

/// Result of a weekly lane assignment pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyLaneAssignment {
    pub events: Vec<EventWithWeeklyLane>,
    pub week_lane_counts: BTreeMap<WeekKey, usize>,
}

/// Builds the synthetic display identifier `event-<index>-<startEpochMillis>`
pub(crate) fn event_id(index: usize, start: NaiveDate) -> String {
    let millis = start.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    format!("event-{}-{}", index, millis)
}
