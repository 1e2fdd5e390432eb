//! Date reference parsing and resolution

use crate::error::{Result, SinaxarError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

fn in_days_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^in\s+(\d{1,4})\s+days?$").unwrap())
}

/// A date reference that can be resolved to a specific calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRef {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Next occurrence of a weekday (strictly after today)
    NextWeekday(Weekday),
    /// A fixed number of days ahead
    InDays(i64),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DateRef {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            "monday" => Ok(DateRef::Weekday(Weekday::Mon)),
            "tuesday" => Ok(DateRef::Weekday(Weekday::Tue)),
            "wednesday" => Ok(DateRef::Weekday(Weekday::Wed)),
            "thursday" => Ok(DateRef::Weekday(Weekday::Thu)),
            "friday" => Ok(DateRef::Weekday(Weekday::Fri)),
            "saturday" => Ok(DateRef::Weekday(Weekday::Sat)),
            "sunday" => Ok(DateRef::Weekday(Weekday::Sun)),
            _ if normalized.starts_with("last ") => {
                Self::parse_offset_weekday(&normalized[5..], DateRef::LastWeekday)
            }
            _ if normalized.starts_with("next ") => {
                Self::parse_offset_weekday(&normalized[5..], DateRef::NextWeekday)
            }
            _ => {
                if let Some(captures) = in_days_regex().captures(&normalized) {
                    let days: i64 = captures[1]
                        .parse()
                        .map_err(|_| SinaxarError::InvalidDateReference(input.to_string()))?;
                    return Ok(DateRef::InDays(days));
                }

                // Try parsing as YYYY-MM-DD
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DateRef::SpecificDate)
                    .map_err(|_| SinaxarError::InvalidDateReference(input.to_string()))
            }
        }
    }

    /// Helper to parse weekday names with offsets (last/next)
    fn parse_offset_weekday<F>(day_str: &str, f: F) -> Result<Self>
    where
        F: FnOnce(Weekday) -> DateRef,
    {
        let weekday = match day_str {
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            "sunday" => Weekday::Sun,
            _ => {
                return Err(SinaxarError::InvalidDateReference(format!(
                    "last/next {}",
                    day_str
                )))
            }
        };
        Ok(f(weekday))
    }

    /// Resolve this date reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateRef::Today => base_date,
            DateRef::Yesterday => base_date - Duration::days(1),
            DateRef::Tomorrow => base_date + Duration::days(1),
            DateRef::Weekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::Current)
            }
            DateRef::LastWeekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::Last)
            }
            DateRef::NextWeekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::Next)
            }
            DateRef::InDays(days) => base_date + Duration::days(*days),
            DateRef::SpecificDate(date) => *date,
        }
    }

    /// Find a specific weekday relative to the base date
    fn find_weekday(base_date: NaiveDate, target_day: Weekday, offset: WeekdayOffset) -> NaiveDate {
        let current_day = base_date.weekday();

        match offset {
            WeekdayOffset::Current => {
                if current_day == target_day {
                    base_date
                } else {
                    // Most recent occurrence, in the past
                    let days_back = (current_day.num_days_from_monday() + 7
                        - target_day.num_days_from_monday())
                        % 7;
                    base_date - Duration::days(days_back as i64)
                }
            }
            WeekdayOffset::Last => {
                let days_back = if current_day == target_day {
                    7
                } else {
                    let days = (current_day.num_days_from_monday() + 7
                        - target_day.num_days_from_monday())
                        % 7;
                    if days == 0 {
                        7
                    } else {
                        days
                    }
                };
                base_date - Duration::days(days_back as i64)
            }
            WeekdayOffset::Next => {
                let days_forward = if current_day == target_day {
                    7
                } else {
                    (target_day.num_days_from_monday() + 7 - current_day.num_days_from_monday()) % 7
                };
                base_date + Duration::days(days_forward as i64)
            }
        }
    }
}

/// Offset for weekday resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekdayOffset {
    /// Current or most recent occurrence
    Current,
    /// Previous occurrence (strictly before today)
    Last,
    /// Next occurrence (strictly after today)
    Next,
}
