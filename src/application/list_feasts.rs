//! Feast listing use cases

use crate::domain::calendar;
use crate::domain::{Feast, FeastKind};
use crate::error::{Result, SinaxarError};
use chrono::NaiveDate;

fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(SinaxarError::InvalidMonth(month))
    }
}

/// Feasts of a month, optionally narrowed to one kind
pub fn feasts_of_month(
    month: u32,
    year: i32,
    kind: Option<FeastKind>,
) -> Result<Vec<&'static Feast>> {
    validate_month(month)?;

    let feasts = calendar::feasts_for_month(month, year);
    Ok(match kind {
        Some(kind) => feasts.into_iter().filter(|f| f.kind == kind).collect(),
        None => feasts,
    })
}

/// Saint commemorations of a month, across every covered year
pub fn saints_of_month(month: u32) -> Result<Vec<&'static Feast>> {
    validate_month(month)?;
    Ok(calendar::saints_for_month(month))
}

/// Next feasts from a reference date
pub fn upcoming(reference: NaiveDate, count: usize) -> Vec<&'static Feast> {
    calendar::upcoming_feasts(reference, count)
}
