//! Pilgrimage destination recommendation

use crate::domain::calendar::iso_day;
use crate::domain::data;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Destination names drawn from feasts falling strictly inside the
/// lookahead window, in first-seen order with duplicates collapsed.
///
/// Both window bounds are exclusive, so a zero-day window recommends
/// nothing. The result is a name-level hint only; matching names against
/// bookable pilgrimages is the caller's concern.
pub fn recommend_destinations(reference: NaiveDate, lookahead_days: i64) -> Vec<&'static str> {
    let window_start = iso_day(reference);
    let window_end = iso_day(reference + Duration::days(lookahead_days));

    let mut seen = HashSet::new();
    let mut destinations = Vec::new();
    for feast in data::FEASTS {
        if feast.date <= window_start.as_str() || feast.date >= window_end.as_str() {
            continue;
        }
        for place in feast.places {
            if seen.insert(*place) {
                destinations.push(*place);
            }
        }
    }
    destinations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_window_recommends_nothing() {
        assert!(recommend_destinations(date(2025, 6, 1), 0).is_empty());
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        // Pentecost falls on 2025-06-15; a window ending exactly there
        // excludes it, one day more includes it
        assert!(recommend_destinations(date(2025, 6, 14), 1).is_empty());
        assert!(recommend_destinations(date(2025, 6, 14), 2).contains(&"Israel"));
        // A reference date landing on a feast excludes that feast
        assert!(!recommend_destinations(date(2025, 6, 15), 5).contains(&"Israel"));
    }

    #[test]
    fn test_ninety_days_from_june_includes_israel() {
        let destinations = recommend_destinations(date(2025, 6, 1), 90);
        assert!(destinations.contains(&"Israel"));
        assert!(destinations.contains(&"Nicula"));
        assert!(!destinations.contains(&"Betleem"));
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_seen_order() {
        // Ascension and Pascha both carry Ierusalim and Israel
        let destinations = recommend_destinations(date(2025, 4, 1), 90);
        assert_eq!(
            destinations
                .iter()
                .filter(|d| **d == "Ierusalim")
                .count(),
            1
        );
        // Palm Sunday is scanned first, so Ierusalim leads
        assert_eq!(destinations[0], "Ierusalim");
    }

    #[test]
    fn test_growing_window_never_loses_destinations() {
        let reference = date(2025, 6, 1);
        let mut previous: Vec<&'static str> = Vec::new();
        for days in [0, 15, 30, 60, 120, 250] {
            let current = recommend_destinations(reference, days);
            for destination in &previous {
                assert!(current.contains(destination));
            }
            previous = current;
        }
    }

    #[test]
    fn test_negative_lookahead_recommends_nothing() {
        assert!(recommend_destinations(date(2025, 6, 1), -30).is_empty());
    }
}
