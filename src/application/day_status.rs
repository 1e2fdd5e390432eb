//! Day report use case

use crate::domain::calendar::feast_on;
use crate::domain::fasting::{fasting_period_on, is_fasting_day, WEEKLY_FAST_DAYS};
use crate::domain::{Feast, FastingPeriod};
use chrono::{Datelike, NaiveDate};

/// Everything the calendar knows about one date
#[derive(Debug, Clone, Copy)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub feast: Option<&'static Feast>,
    pub period: Option<&'static FastingPeriod>,
    /// Whether the weekday alone (Wednesday/Friday) would call for fasting
    pub weekly_fast: bool,
    /// The authoritative verdict, with feast/period/weekday precedence
    pub fasting: bool,
}

/// Collect the feast, period membership, and fasting verdict for a date
pub fn day_status(date: NaiveDate) -> DayStatus {
    DayStatus {
        date,
        feast: feast_on(date),
        period: fasting_period_on(date),
        weekly_fast: WEEKLY_FAST_DAYS.contains(&date.weekday()),
        fasting: is_fasting_day(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_feast_day_status() {
        let status = day_status(date(2025, 8, 15));
        assert_eq!(status.feast.unwrap().name, "Dormition of the Theotokos");
        assert!(status.period.is_none());
        assert!(status.weekly_fast); // a Friday
        assert!(!status.fasting); // but the feast overrides it
    }

    #[test]
    fn test_plain_lent_day_status() {
        let status = day_status(date(2025, 4, 10));
        assert!(status.feast.is_none());
        assert_eq!(status.period.unwrap().name, "Great Lent");
        assert!(status.fasting);
    }

    #[test]
    fn test_ordinary_day_status() {
        let status = day_status(date(2025, 7, 10));
        assert!(status.feast.is_none());
        assert!(status.period.is_none());
        assert!(!status.weekly_fast);
        assert!(!status.fasting);
    }
}
