//! Fasting periods and the fasting-day classifier

use crate::domain::calendar::{feast_on, iso_day};
use crate::domain::data;
use chrono::{Datelike, NaiveDate, Weekday};

/// How rigorous a fasting period's rules are. Purely descriptive; the
/// classifier treats every period the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    Strict,
    Relaxed,
    Free,
}

impl Strictness {
    /// Lowercase label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Relaxed => "relaxed",
            Strictness::Free => "free",
        }
    }
}

/// A contiguous multi-day fasting season.
///
/// `start` and `end` are inclusive, zero-padded ISO `YYYY-MM-DD` strings
/// with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastingPeriod {
    pub id: u32,
    /// Canonical (English) name
    pub name: &'static str,
    /// Romanian display name
    pub name_ro: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub description: Option<&'static str>,
    pub strictness: Strictness,
}

impl FastingPeriod {
    /// Whether the ISO day string falls inside the inclusive range
    pub fn contains_day(&self, day: &str) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Weekdays kept as fasting days year-round outside feast-day exceptions
pub const WEEKLY_FAST_DAYS: [Weekday; 2] = [Weekday::Wed, Weekday::Fri];

/// The curated fasting periods in their canonical order
pub fn fasting_periods() -> &'static [FastingPeriod] {
    data::FASTING_PERIODS
}

/// First curated period containing the date, in table order.
///
/// Overlapping periods resolve to the earlier-listed one.
pub fn fasting_period_on(date: NaiveDate) -> Option<&'static FastingPeriod> {
    let day = iso_day(date);
    data::FASTING_PERIODS.iter().find(|p| p.contains_day(&day))
}

/// Fasting verdict for a date.
///
/// A feast on the date answers by itself through its `fasting` flag; only
/// dates without a feast consult the period table and the weekly rule.
/// Precedence is feast over period over weekday.
pub fn is_fasting_day(date: NaiveDate) -> bool {
    if let Some(feast) = feast_on(date) {
        return feast.fasting;
    }

    if fasting_period_on(date).is_some() {
        return true;
    }

    WEEKLY_FAST_DAYS.contains(&date.weekday())
}
