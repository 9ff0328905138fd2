pub mod simple;
pub mod types;
pub mod week;
pub mod weekly;

mod tracks;

pub use simple::{assign_lanes_simple, group_events_by_date};
pub use types::{
    CalendarEvent, EventWithLane, EventWithWeeklyLane, LaneAssignment, WeeklyLaneAssignment,
};
pub use week::{week_start_of, WeekKey, WeekStartsOn};
pub use weekly::{
    assign_lanes_weekly, assign_lanes_weekly_with, get_lane_for_date, group_events_by_date_weekly,
};
