use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::debug;

use super::tracks::assign_first_fit;
use super::types::{event_id, CalendarEvent, EventWithWeeklyLane, WeeklyLaneAssignment};
use super::week::{week_start_of, WeekKey, WeekStartsOn};

/// Weekly lane assignment with the default Sunday week start
pub fn assign_lanes_weekly(events: &[CalendarEvent]) -> WeeklyLaneAssignment {
    assign_lanes_weekly_with(events, WeekStartsOn::default())
}

/// Assigns lanes independently per calendar week.
///
/// Every week touched by any event is packed from scratch with the same
/// first-fit pass as the global assigner, using event spans clamped to the
/// week's boundaries. Lane numbers never carry over, so one event may sit in
/// different lanes in consecutive weeks. Returned events are in input order.
pub fn assign_lanes_weekly_with(
    events: &[CalendarEvent],
    week_starts_on: WeekStartsOn,
) -> WeeklyLaneAssignment {
    if events.is_empty() {
        return WeeklyLaneAssignment {
            events: Vec::new(),
            week_lane_counts: BTreeMap::new(),
        };
    }

    // Every week touched by any event
    let mut weeks: BTreeSet<WeekKey> = BTreeSet::new();
    for event in events {
        let (start, end) = event.span();
        for day in week_start_of(start, week_starts_on)
            .iter_weeks()
            .take_while(|d| *d <= end)
        {
            weeks.insert(WeekKey::for_date(day, week_starts_on));
        }
    }

    let mut week_lane_counts: BTreeMap<WeekKey, usize> = BTreeMap::new();
    let mut lanes_per_event: Vec<BTreeMap<WeekKey, usize>> = vec![BTreeMap::new(); events.len()];

    for week in weeks {
        let (week_start, week_end) = week.date_range();

        // Events overlapping this week, with spans clamped to its bounds
        let mut clamped: Vec<(usize, (NaiveDate, NaiveDate))> = events
            .iter()
            .enumerate()
            .filter_map(|(index, event)| {
                let (start, end) = event.span();
                if start <= week_end && end >= week_start {
                    Some((index, (start.max(week_start), end.min(week_end))))
                } else {
                    None
                }
            })
            .collect();
        clamped.sort_by_key(|&(_, span)| span);

        let spans: Vec<(NaiveDate, NaiveDate)> = clamped.iter().map(|&(_, span)| span).collect();
        let (lanes, lane_count) = assign_first_fit(&spans);

        for (&(index, _), lane) in clamped.iter().zip(lanes) {
            lanes_per_event[index].insert(week, lane);
        }
        week_lane_counts.insert(week, lane_count);
    }

    let assigned: Vec<EventWithWeeklyLane> = events
        .iter()
        .zip(lanes_per_event)
        .enumerate()
        .map(|(index, (event, weekly_lanes))| EventWithWeeklyLane {
            event: event.clone(),
            weekly_lanes,
            event_id: event_id(index, event.span().0),
        })
        .collect();

    debug!(
        events = assigned.len(),
        weeks = week_lane_counts.len(),
        "assigned weekly lanes"
    );
    WeeklyLaneAssignment {
        events: assigned,
        week_lane_counts,
    }
}

/// Lane of `event` in the week containing `date`; lane 0 when the event has
/// no entry for that week
pub fn get_lane_for_date(
    event: &EventWithWeeklyLane,
    date: NaiveDate,
    week_starts_on: WeekStartsOn,
) -> usize {
    let key = WeekKey::for_date(date, week_starts_on);
    event.weekly_lanes.get(&key).copied().unwrap_or(0)
}

/// Groups events into per-day buckets covering every day of their span;
/// each day's bucket is ordered by that day's week-specific lane
pub fn group_events_by_date_weekly(
    events: &[EventWithWeeklyLane],
    week_starts_on: WeekStartsOn,
) -> BTreeMap<NaiveDate, Vec<EventWithWeeklyLane>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<EventWithWeeklyLane>> = BTreeMap::new();

    for event in events {
        let (start, end) = event.event.span();
        for day in start.iter_days().take_while(|d| *d <= end) {
            by_date.entry(day).or_default().push(event.clone());
        }
    }

    for (day, bucket) in by_date.iter_mut() {
        bucket.sort_by_key(|e| get_lane_for_date(e, *day, week_starts_on));
    }

    by_date
}
