//! Course catalog entities and the plain-text catalog parser.
//!
//! The catalog is read-only for the session: it is parsed once at startup
//! and shared behind an `Arc`. Courses are identified by the (code, group)
//! pair; two sections of the same course code with different group numbers
//! are distinct entities.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use super::time::{ClockTime, MalformedTime};

/// Working-week day enumeration, Saturday first.
///
/// Parses from the Persian day tokens used by the catalog format and
/// displays the canonical Persian label. Serialized as lowercase English
/// variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// All days in display order (Saturday-first working week).
    pub const ALL: [Weekday; 6] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// Parse a Persian day token.
    ///
    /// Zero-width non-joiner and internal space variants are tolerated,
    /// so both `سه‌شنبه` and `سه شنبه` resolve to Tuesday.
    pub fn parse_token(token: &str) -> Option<Self> {
        let normalized: String = token
            .trim()
            .chars()
            .filter(|c| *c != '\u{200c}' && !c.is_whitespace())
            .collect();

        match normalized.as_str() {
            "شنبه" => Some(Weekday::Saturday),
            "یکشنبه" => Some(Weekday::Sunday),
            "دوشنبه" => Some(Weekday::Monday),
            "سهشنبه" => Some(Weekday::Tuesday),
            "چهارشنبه" => Some(Weekday::Wednesday),
            "پنجشنبه" => Some(Weekday::Thursday),
            _ => None,
        }
    }

    /// Canonical Persian label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Saturday => "شنبه",
            Weekday::Sunday => "یکشنبه",
            Weekday::Monday => "دوشنبه",
            Weekday::Tuesday => "سه‌شنبه",
            Weekday::Wednesday => "چهارشنبه",
            Weekday::Thursday => "پنجشنبه",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One weekly recurring occupied interval.
///
/// Invariant: `start < end`. The catalog parser rejects records that
/// violate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingSlot {
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Unique identity of a course section: the (code, group) pair.
///
/// Canonical string form is `"<code>-<group>"`. The code may itself
/// contain dashes; the group is the digits after the last dash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseKey {
    pub code: String,
    pub group: u32,
}

impl CourseKey {
    pub fn new(code: impl Into<String>, group: u32) -> Self {
        Self {
            code: code.into(),
            group,
        }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.code, self.group)
    }
}

impl FromStr for CourseKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, group) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("invalid course key '{}': missing group suffix", s))?;
        let group: u32 = group
            .parse()
            .map_err(|_| format!("invalid course key '{}': group is not a number", s))?;
        if code.is_empty() || group == 0 {
            return Err(format!("invalid course key '{}'", s));
        }
        Ok(CourseKey::new(code, group))
    }
}

impl TryFrom<String> for CourseKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CourseKey> for String {
    fn from(key: CourseKey) -> Self {
        key.to_string()
    }
}

/// An immutable course section loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, e.g. "1511064".
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Credit units.
    pub units: u32,
    /// Lecturer name.
    pub professor: String,
    /// Section group number (positive).
    pub group: u32,
    /// Display color for the grid block.
    pub color: String,
    /// Weekly meeting slots; may be empty for malformed input.
    pub schedule: Vec<MeetingSlot>,
}

impl Course {
    /// Identity key of this section.
    pub fn key(&self) -> CourseKey {
        CourseKey::new(self.code.clone(), self.group)
    }
}

const DEFAULT_COLOR: &str = "#9e9e9e";

/// Read-only course catalog for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<Course>,
    /// SHA-256 hex digest of the source text, for change detection.
    pub checksum: String,
    /// When the catalog was parsed.
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// An empty catalog (used when the catalog source is unavailable).
    pub fn empty() -> Self {
        Self::parse("")
    }

    /// Parse the plain-text catalog format.
    ///
    /// Format: a `#`-prefixed marker line starts a record (the text after
    /// `#` is a human title and is ignored), followed by `key=value` lines
    /// (`code`, `name`, `units`, `professor`, `group`, `color`; unknown
    /// keys ignored) and zero or more `day;start;end` meeting lines.
    ///
    /// Parsing is tolerant and infallible: a record with a malformed time,
    /// unknown day token, inverted time range, or missing code is skipped
    /// with a warning; the rest of the catalog still loads. Duplicate
    /// (code, group) records keep the first occurrence.
    pub fn parse(text: &str) -> Self {
        let mut courses: Vec<Course> = Vec::new();
        let mut current: Option<RecordBuilder> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(title) = line.strip_prefix('#') {
                if let Some(record) = current.take() {
                    record.finish(&mut courses);
                }
                current = Some(RecordBuilder::new(title.trim()));
                continue;
            }

            let Some(record) = current.as_mut() else {
                warn!("catalog line outside any record ignored: {}", line);
                continue;
            };
            record.feed(line);
        }

        if let Some(record) = current.take() {
            record.finish(&mut courses);
        }

        Self {
            courses,
            checksum: checksum(text),
            loaded_at: Utc::now(),
        }
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Resolve a course by key. Stale keys resolve to `None`.
    pub fn find(&self, key: &CourseKey) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.code == key.code && c.group == key.group)
    }
}

/// SHA-256 hex digest of the catalog source text.
pub fn checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// In-progress catalog record; discarded on the first malformed line.
struct RecordBuilder {
    title: String,
    code: Option<String>,
    name: String,
    units: u32,
    professor: String,
    group: u32,
    color: String,
    schedule: Vec<MeetingSlot>,
    broken: bool,
}

impl RecordBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            code: None,
            name: String::new(),
            units: 0,
            professor: String::new(),
            group: 1,
            color: DEFAULT_COLOR.to_string(),
            schedule: Vec::new(),
            broken: false,
        }
    }

    fn feed(&mut self, line: &str) {
        if self.broken {
            return;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            match key.trim() {
                "code" => self.code = Some(value.to_string()),
                "name" => self.name = value.to_string(),
                "units" => self.units = value.parse().unwrap_or(0),
                "professor" => self.professor = value.to_string(),
                "group" => self.group = value.parse().unwrap_or(1).max(1),
                "color" => self.color = value.to_string(),
                other => warn!("catalog record '{}': unknown key '{}' ignored", self.title, other),
            }
            return;
        }

        let parts: Vec<&str> = line.split(';').collect();
        if parts.len() == 3 {
            match self.parse_meeting(parts[0], parts[1], parts[2]) {
                Ok(slot) => self.schedule.push(slot),
                Err(reason) => {
                    warn!("catalog record '{}' skipped: {}", self.title, reason);
                    self.broken = true;
                }
            }
            return;
        }

        warn!("catalog record '{}': unrecognized line ignored: {}", self.title, line);
    }

    fn parse_meeting(&self, day: &str, start: &str, end: &str) -> Result<MeetingSlot, String> {
        let day = Weekday::parse_token(day).ok_or_else(|| format!("unknown day token '{}'", day))?;
        let start = ClockTime::parse(start).map_err(|e: MalformedTime| e.to_string())?;
        let end = ClockTime::parse(end).map_err(|e: MalformedTime| e.to_string())?;
        if start.value() >= end.value() {
            return Err(format!(
                "inverted time range {} >= {}",
                start.hhmm(),
                end.hhmm()
            ));
        }
        Ok(MeetingSlot { day, start, end })
    }

    fn finish(self, courses: &mut Vec<Course>) {
        if self.broken {
            return;
        }
        let Some(code) = self.code else {
            warn!("catalog record '{}' skipped: missing code", self.title);
            return;
        };

        let course = Course {
            code,
            name: self.name,
            units: self.units,
            professor: self.professor,
            group: self.group,
            color: self.color,
            schedule: self.schedule,
        };

        if courses
            .iter()
            .any(|c| c.code == course.code && c.group == course.group)
        {
            warn!(
                "catalog record '{}' skipped: duplicate key {}",
                self.title,
                course.key()
            );
            return;
        }
        courses.push(course);
    }
}
