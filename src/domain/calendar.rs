//! Read-only queries over the curated feast table

use crate::domain::data;
use crate::domain::{Feast, FeastKind};
use chrono::NaiveDate;

/// Canonical `YYYY-MM-DD` form used for every table comparison.
///
/// Zero-padded ISO strings order lexically the same way the dates they name
/// order in time; all range checks in this crate rely on that.
pub(crate) fn iso_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The full curated feast table in its canonical order
pub fn feasts() -> &'static [Feast] {
    data::FEASTS
}

/// Feast falling exactly on the given date, if any
pub fn feast_on(date: NaiveDate) -> Option<&'static Feast> {
    let day = iso_day(date);
    data::FEASTS.iter().find(|f| f.date == day)
}

/// Feasts of one month of one year.
///
/// Entries keep the table's order, which is not necessarily sorted by day
/// of month; callers wanting day order must sort.
pub fn feasts_for_month(month: u32, year: i32) -> Vec<&'static Feast> {
    let prefix = format!("{:04}-{:02}-", year, month);
    data::FEASTS
        .iter()
        .filter(|f| f.date.starts_with(&prefix))
        .collect()
}

/// Feasts of one kind, in table order
pub fn feasts_by_kind(kind: FeastKind) -> Vec<&'static Feast> {
    data::FEASTS.iter().filter(|f| f.kind == kind).collect()
}

/// Saint commemorations for a month, across every covered year.
///
/// Year-agnostic on purpose: callers treat the saints of a month as a
/// recurring cycle rather than as entries of a single year.
pub fn saints_for_month(month: u32) -> Vec<&'static Feast> {
    data::FEASTS
        .iter()
        .filter(|f| f.kind == FeastKind::Saint && f.month() == month)
        .collect()
}

/// Up to `count` feasts on or after the reference date, ascending by date.
///
/// Fewer than `count` qualifying feasts returns all that do.
pub fn upcoming_feasts(reference: NaiveDate, count: usize) -> Vec<&'static Feast> {
    let day = iso_day(reference);
    let mut upcoming: Vec<&'static Feast> = data::FEASTS
        .iter()
        .filter(|f| f.date >= day.as_str())
        .collect();
    upcoming.sort_by_key(|f| f.date);
    upcoming.truncate(count);
    upcoming
}
