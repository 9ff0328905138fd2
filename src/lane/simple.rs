use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::tracks::assign_first_fit;
use super::types::{event_id, CalendarEvent, EventWithLane, LaneAssignment};

/// Assigns each event a single lane covering its whole span.
///
/// Events are processed in (start, end) order and placed on the first lane
/// that freed up before they begin, so identical input always produces the
/// same assignment. Returned events are in processing order.
pub fn assign_lanes_simple(events: &[CalendarEvent]) -> LaneAssignment {
    if events.is_empty() {
        return LaneAssignment {
            events: Vec::new(),
            total_lanes: 0,
        };
    }

    // Sort by start date, earliest end first on ties
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.span());

    let spans: Vec<(NaiveDate, NaiveDate)> = sorted.iter().map(|e| e.span()).collect();
    let (lanes, total_lanes) = assign_first_fit(&spans);

    let assigned: Vec<EventWithLane> = sorted
        .into_iter()
        .zip(lanes)
        .enumerate()
        .map(|(index, (event, lane))| EventWithLane {
            event: event.clone(),
            lane,
            event_id: event_id(index, event.span().0),
        })
        .collect();

    debug!(events = assigned.len(), total_lanes, "assigned global lanes");
    LaneAssignment {
        events: assigned,
        total_lanes,
    }
}

/// Groups events into per-day buckets covering every day of their span;
/// each day's bucket is ordered by lane
pub fn group_events_by_date(events: &[EventWithLane]) -> BTreeMap<NaiveDate, Vec<EventWithLane>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<EventWithLane>> = BTreeMap::new();

    for event in events {
        let (start, end) = event.event.span();
        for day in start.iter_days().take_while(|d| *d <= end) {
            by_date.entry(day).or_default().push(event.clone());
        }
    }

    for bucket in by_date.values_mut() {
        bucket.sort_by_key(|e| e.lane);
    }

    by_date
}
