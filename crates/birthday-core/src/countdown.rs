//! Countdown Calculator
//!
//! Next occurrence of a yearly month/day and the time left until it.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Longest length of each month (Feb 29 is a valid birthday)
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year-independent calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthDay", into = "RawMonthDay")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

#[derive(Serialize, Deserialize)]
struct RawMonthDay {
    month: u32,
    day: u32,
}

impl TryFrom<RawMonthDay> for MonthDay {
    type Error = CoreError;

    fn try_from(raw: RawMonthDay) -> CoreResult<Self> {
        MonthDay::new(raw.month, raw.day)
    }
}

impl From<MonthDay> for RawMonthDay {
    fn from(md: MonthDay) -> Self {
        RawMonthDay { month: md.month, day: md.day }
    }
}

impl MonthDay {
    /// `month` is 1-based (1 = January)
    pub fn new(month: u32, day: u32) -> CoreResult<Self> {
        let max_day = month
            .checked_sub(1)
            .and_then(|index| MAX_DAYS.get(index as usize))
            .copied()
            .ok_or(CoreError::InvalidMonthDay { month, day })?;
        if day == 0 || day > max_day {
            return Err(CoreError::InvalidMonthDay { month, day });
        }
        Ok(Self { month, day })
    }

    /// For compile-time constants known to be valid
    pub(crate) const fn new_unchecked(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month/day of a timestamp's local calendar date
    pub fn of<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        Self { month: reference.month(), day: reference.day() }
    }

    pub fn matches<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> bool {
        Self::of(reference) == *self
    }

    /// This month/day in `year`. Days past the month's end roll into the
    /// next month, so Feb 29 becomes Mar 1 outside leap years.
    pub fn date_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.day - 1))))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Time left until a target instant, split for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    /// 0-23
    pub hours: u32,
    /// 0-59
    pub minutes: u32,
    /// 0-59
    pub seconds: u32,
}

impl Countdown {
    /// Split `max(0, target - reference)`, truncated to whole milliseconds
    pub fn between<Tz: TimeZone>(target: &DateTime<Tz>, reference: &DateTime<Tz>) -> Self {
        let total = target.clone().signed_duration_since(reference).num_milliseconds().max(0) as u64;
        Self::from_millis(total)
    }

    pub fn from_millis(total: u64) -> Self {
        Self {
            days: total / MS_PER_DAY,
            hours: ((total / MS_PER_HOUR) % 24) as u32,
            minutes: ((total / MS_PER_MINUTE) % 60) as u32,
            seconds: ((total / MS_PER_SECOND) % 60) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Days, hours, minutes, seconds as two-digit strings
    pub fn display_parts(&self) -> [String; 4] {
        [
            format_counter(self.days),
            format_counter(u64::from(self.hours)),
            format_counter(u64::from(self.minutes)),
            format_counter(u64::from(self.seconds)),
        ]
    }
}

/// Resolve a local wall-clock time, stepping past a DST gap if needed
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = local;
    for _ in 0..16 {
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return resolved;
        }
        candidate += TimeDelta::minutes(15);
    }
    tz.from_utc_datetime(&local)
}

/// Next local midnight of `target`, today included.
///
/// Built in the reference year; moves to the following year only when that
/// instant has passed and the reference is not itself on the target day.
pub fn next_occurrence<Tz: TimeZone>(target: MonthDay, reference: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = reference.timezone();
    let year = reference.year();
    let this_year = resolve_local(&tz, target.date_in(year).and_time(NaiveTime::MIN));

    if this_year < *reference && !target.matches(reference) {
        resolve_local(&tz, target.date_in(year + 1).and_time(NaiveTime::MIN))
    } else {
        this_year
    }
}

pub fn compute_countdown<Tz: TimeZone>(target: MonthDay, reference: &DateTime<Tz>) -> Countdown {
    Countdown::between(&next_occurrence(target, reference), reference)
}

pub fn is_target_day<Tz: TimeZone>(target: MonthDay, reference: &DateTime<Tz>) -> bool {
    target.matches(reference)
}

/// Zero-pad to two digits; wider values are left as-is
pub fn format_counter(value: u64) -> String {
    format!("{:02}", value)
}
