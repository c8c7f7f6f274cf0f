//! Day × hour grid projection of the selected courses.
//!
//! This is a pure, stateless recomputation: every call starts from an
//! empty grid and projects the given courses onto it, so there is nothing
//! to invalidate between mutations.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{localize_digits, Course, CourseKey, Weekday};

/// Display configuration for the grid: the inclusive hour range shown on
/// the horizontal axis. The vertical axis is always the full six-day week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub first_hour: i32,
    pub last_hour: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: 7,
            last_hour: 20,
        }
    }
}

/// One block-placement instruction for the render sink.
///
/// `offset_percent` and `width_percent` are relative to a single hour
/// cell's width; a multi-hour block overflows into the neighboring
/// columns rather than being clipped to its starting cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridBlock {
    pub day: Weekday,
    /// Hour bucket the block is anchored in.
    pub hour: i32,
    pub offset_percent: f64,
    pub width_percent: f64,
    pub key: CourseKey,
    pub name: String,
    /// Time range with localized digits, e.g. "۰۸:۰۰ تا ۱۰:۰۰".
    pub time_label: String,
    /// Group label with localized digits, e.g. "گروه ۱".
    pub group_label: String,
    pub color: String,
}

/// Non-fatal warning emitted when a slot could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridWarning {
    pub day: Weekday,
    pub hour: i32,
    pub key: CourseKey,
    pub message: String,
}

/// Full projection result handed to the render sink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridData {
    pub blocks: Vec<GridBlock>,
    pub warnings: Vec<GridWarning>,
}

/// Project courses onto the day × hour grid in the given order.
///
/// Placement rules, in order, per slot:
/// 1. The anchor cell is `(day, floor(start))`. An anchor outside the
///    configured hour range drops the slot silently.
/// 2. Only the anchor cell is checked for occupancy. If a previous block
///    already anchors or spans there, the slot is skipped with a "cell
///    already occupied" warning. A new block whose *span* covers an
///    occupied non-anchor hour is still placed; selection-time conflict
///    checking is what actually prevents overlapping picks.
/// 3. On placement every integer hour h with `floor(start) <= h < end`
///    is marked occupied for that day.
pub fn layout_grid(courses: &[&Course], config: &GridConfig) -> GridData {
    let mut data = GridData::default();
    let mut occupied: HashSet<(Weekday, i32)> = HashSet::new();

    for course in courses {
        for slot in &course.schedule {
            let start = slot.start.value();
            let end = slot.end.value();
            let start_hour = start.floor() as i32;

            if start_hour < config.first_hour || start_hour > config.last_hour {
                debug!(
                    "slot {} {} outside display range {}..={}, dropped",
                    slot.day, start_hour, config.first_hour, config.last_hour
                );
                continue;
            }

            if occupied.contains(&(slot.day, start_hour)) {
                data.warnings.push(GridWarning {
                    day: slot.day,
                    hour: start_hour,
                    key: course.key(),
                    message: format!(
                        "cell already occupied: {} {:02}:00, {} skipped",
                        slot.day,
                        start_hour,
                        course.key()
                    ),
                });
                continue;
            }

            let mut hour = start_hour;
            while (hour as f64) < end {
                occupied.insert((slot.day, hour));
                hour += 1;
            }

            data.blocks.push(GridBlock {
                day: slot.day,
                hour: start_hour,
                offset_percent: (start - start_hour as f64) * 100.0,
                width_percent: (end - start) * 100.0,
                key: course.key(),
                name: course.name.clone(),
                time_label: localize_digits(&format!("{} تا {}", slot.start.hhmm(), slot.end.hhmm())),
                group_label: format!("گروه {}", localize_digits(&course.group.to_string())),
                color: course.color.clone(),
            });
        }
    }

    data
}
