//! Output formatting utilities

use crate::application::DayStatus;
use crate::domain::{FastingPeriod, Feast};
use crate::infrastructure::{Config, NameStyle};

/// Pick the feast name matching the configured style
fn feast_name(feast: &Feast, style: NameStyle) -> &'static str {
    match style {
        NameStyle::Romanian => feast.name_ro,
        NameStyle::Canonical => feast.name,
    }
}

/// Pick the period name matching the configured style
fn period_name(period: &FastingPeriod, style: NameStyle) -> &'static str {
    match style {
        NameStyle::Romanian => period.name_ro,
        NameStyle::Canonical => period.name,
    }
}

/// Format the day report for display
pub fn format_day_status(status: &DayStatus, style: NameStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", status.date.format("%A, %Y-%m-%d")));

    match status.feast {
        Some(feast) => {
            output.push_str(&format!(
                "Feast: {} ({})\n",
                feast_name(feast, style),
                feast.kind.label()
            ));
            if let Some(description) = feast.description {
                output.push_str(&format!("  {}\n", description));
            }
        }
        None => output.push_str("Feast: none\n"),
    }

    let verdict = match (status.feast, status.period) {
        (Some(feast), _) if feast.fasting => {
            "Fasting: yes (the feast itself is kept as a fast)".to_string()
        }
        (Some(_), _) => "Fasting: no (fast-free feast day)".to_string(),
        (None, Some(period)) => format!(
            "Fasting: yes ({}, {})",
            period_name(period, style),
            period.strictness.label()
        ),
        (None, None) if status.weekly_fast => {
            "Fasting: yes (weekly Wednesday/Friday fast)".to_string()
        }
        (None, None) => "Fasting: no".to_string(),
    };
    output.push_str(&verdict);
    output.push('\n');

    output
}

/// Format a list of feasts for display
pub fn format_feast_list(feasts: &[&Feast], style: NameStyle) -> String {
    if feasts.is_empty() {
        return "No feasts found".to_string();
    }

    let mut output = String::new();
    for feast in feasts {
        output.push_str(&format!(
            "{}  {} ({})\n",
            feast.date,
            feast_name(feast, style),
            feast.kind.label()
        ));
    }
    output
}

/// Format the fasting periods for display
pub fn format_period_list(periods: &[FastingPeriod], style: NameStyle) -> String {
    if periods.is_empty() {
        return "No fasting periods found".to_string();
    }

    let mut output = String::new();
    for period in periods {
        output.push_str(&format!(
            "{} .. {}  {} [{}]\n",
            period.start,
            period.end,
            period_name(period, style),
            period.strictness.label()
        ));
    }
    output
}

/// Format recommended destinations for display
pub fn format_recommendations(destinations: &[&str]) -> String {
    if destinations.is_empty() {
        return "No destinations to recommend".to_string();
    }

    let mut output = String::new();
    for destination in destinations {
        output.push_str(&format!("{}\n", destination));
    }
    output
}

/// Format the effective configuration for display
pub fn format_config(config: &Config) -> String {
    format!(
        "lookahead_days = {}\nnames = {}\n",
        config.lookahead_days,
        config.names.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::day_status;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_feast_day() {
        let status = day_status(date(2025, 8, 15));
        let output = format_day_status(&status, NameStyle::Romanian);
        assert!(output.contains("Friday, 2025-08-15"));
        assert!(output.contains("Adormirea Maicii Domnului (major)"));
        assert!(output.contains("Fasting: no (fast-free feast day)"));
    }

    #[test]
    fn test_format_feast_day_canonical_names() {
        let status = day_status(date(2025, 8, 15));
        let output = format_day_status(&status, NameStyle::Canonical);
        assert!(output.contains("Dormition of the Theotokos"));
    }

    #[test]
    fn test_format_fasting_feast() {
        let status = day_status(date(2025, 4, 18));
        let output = format_day_status(&status, NameStyle::Romanian);
        assert!(output.contains("Vinerea Mare"));
        assert!(output.contains("Fasting: yes (the feast itself is kept as a fast)"));
    }

    #[test]
    fn test_format_period_day() {
        let status = day_status(date(2025, 4, 10));
        let output = format_day_status(&status, NameStyle::Romanian);
        assert!(output.contains("Feast: none"));
        assert!(output.contains("Postul Mare"));
        assert!(output.contains("strict"));
    }

    #[test]
    fn test_format_weekly_fast_day() {
        let status = day_status(date(2025, 7, 9));
        let output = format_day_status(&status, NameStyle::Romanian);
        assert!(output.contains("weekly Wednesday/Friday fast"));
    }

    #[test]
    fn test_format_ordinary_day() {
        let status = day_status(date(2025, 7, 10));
        let output = format_day_status(&status, NameStyle::Romanian);
        assert!(output.ends_with("Fasting: no\n"));
    }

    #[test]
    fn test_format_empty_feast_list() {
        let output = format_feast_list(&[], NameStyle::Romanian);
        assert_eq!(output, "No feasts found");
    }

    #[test]
    fn test_format_feast_list_lines() {
        let feasts = crate::domain::calendar::feasts_for_month(4, 2025);
        let output = format_feast_list(&feasts, NameStyle::Romanian);
        assert!(output.contains("2025-04-20  Învierea Domnului (Sfintele Paști) (major)"));
        assert!(output.contains("2025-04-23  Sf. Mare Mucenic Gheorghe (saint)"));
    }

    #[test]
    fn test_format_period_list() {
        let output =
            format_period_list(crate::domain::fasting::fasting_periods(), NameStyle::Canonical);
        assert!(output.contains("2025-03-03 .. 2025-04-19  Great Lent [strict]"));
        assert!(output.contains("2025-11-15 .. 2025-12-24  Nativity Fast [relaxed]"));
    }

    #[test]
    fn test_format_empty_recommendations() {
        assert_eq!(format_recommendations(&[]), "No destinations to recommend");
    }

    #[test]
    fn test_format_recommendations_one_per_line() {
        let output = format_recommendations(&["Ierusalim", "Israel"]);
        assert_eq!(output, "Ierusalim\nIsrael\n");
    }

    #[test]
    fn test_format_config() {
        let output = format_config(&Config::default());
        assert!(output.contains("lookahead_days = 30"));
        assert!(output.contains("names = romanian"));
    }
}
