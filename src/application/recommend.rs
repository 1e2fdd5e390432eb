//! Pilgrimage recommendation use case

use crate::domain::recommend::recommend_destinations;
use crate::infrastructure::Config;
use chrono::NaiveDate;

/// Recommend destinations over a window, falling back to the configured
/// lookahead when the caller gives none
pub fn recommend(
    reference: NaiveDate,
    lookahead_days: Option<i64>,
    config: &Config,
) -> Vec<&'static str> {
    let days = lookahead_days.unwrap_or(config.lookahead_days);
    recommend_destinations(reference, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_explicit_days_override_config() {
        let config = Config::default();
        assert!(recommend(date(2025, 6, 1), Some(0), &config).is_empty());
        assert!(recommend(date(2025, 6, 1), Some(90), &config).contains(&"Israel"));
    }

    #[test]
    fn test_config_default_applies() {
        // Default lookahead is 30 days; Ascension (06-05) is inside a
        // 30-day window from 06-01
        let config = Config::default();
        let destinations = recommend(date(2025, 6, 1), None, &config);
        assert!(destinations.contains(&"Israel"));
        assert!(!destinations.contains(&"Nicula"));
    }
}
