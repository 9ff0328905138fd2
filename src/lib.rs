//! Lane assignment for overlapping calendar events: packs date-range events
//! into horizontal lanes so a calendar UI can lay them out without visual
//! collisions, either with one lane per event or re-packed per week.

pub mod lane;
pub mod parser;

pub use lane::{
    assign_lanes_simple, assign_lanes_weekly, assign_lanes_weekly_with, get_lane_for_date,
    group_events_by_date, group_events_by_date_weekly, CalendarEvent, EventWithLane,
    EventWithWeeklyLane, LaneAssignment, WeekKey, WeekStartsOn, WeeklyLaneAssignment,
};
pub use parser::{load_events_from_csv, load_events_from_json, parse_events_json, EventLoadError};
