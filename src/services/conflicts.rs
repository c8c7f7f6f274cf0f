//! Time-conflict detection between two course sections.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{localize_digits, overlaps, ClockTime, Course, CourseKey, Weekday};

/// A detected same-day time overlap between two courses.
///
/// Carries enough detail to render a human notice naming both courses,
/// the day, and both time ranges. `first_*` fields describe the first
/// argument to [`find_conflict`], `second_*` the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingConflict {
    pub first_key: CourseKey,
    pub first_name: String,
    pub second_key: CourseKey,
    pub second_name: String,
    pub day: Weekday,
    pub first_start: ClockTime,
    pub first_end: ClockTime,
    pub second_start: ClockTime,
    pub second_end: ClockTime,
}

impl MeetingConflict {
    /// Intersection of the two conflicting ranges.
    pub fn overlap_window(&self) -> (ClockTime, ClockTime) {
        let start = self.first_start.value().max(self.second_start.value());
        let end = self.first_end.value().min(self.second_end.value());
        (ClockTime::new(start), ClockTime::new(end))
    }

    /// Length of the overlap in hours.
    pub fn overlap_hours(&self) -> f64 {
        let (start, end) = self.overlap_window();
        end.value() - start.value()
    }
}

impl fmt::Display for MeetingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time conflict between {} [{}] and {} [{}] on {}: {} vs {}",
            self.first_name,
            self.first_key,
            self.second_name,
            self.second_key,
            self.day,
            localize_digits(&format!("{} تا {}", self.first_start.hhmm(), self.first_end.hhmm())),
            localize_digits(&format!("{} تا {}", self.second_start.hhmm(), self.second_end.hhmm())),
        )
    }
}

/// Find the first same-day overlapping slot pair between two courses.
///
/// Iterates the cross product of both meeting sets with `a`'s slots as
/// the outer loop and returns the first pair where the half-open ranges
/// overlap. Multiple conflicting pairs are not aggregated; the
/// short-circuit is deliberate. Symmetric in existence, though the
/// reported pair follows loop order.
pub fn find_conflict(a: &Course, b: &Course) -> Option<MeetingConflict> {
    for slot_a in &a.schedule {
        for slot_b in &b.schedule {
            if slot_a.day == slot_b.day
                && overlaps(slot_a.start, slot_a.end, slot_b.start, slot_b.end)
            {
                return Some(MeetingConflict {
                    first_key: a.key(),
                    first_name: a.name.clone(),
                    second_key: b.key(),
                    second_name: b.name.clone(),
                    day: slot_a.day,
                    first_start: slot_a.start,
                    first_end: slot_a.end,
                    second_start: slot_b.start,
                    second_end: slot_b.end,
                });
            }
        }
    }
    None
}
