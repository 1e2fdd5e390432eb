use chrono::{Local, NaiveDate};
use clap::Parser;
use sinaxar::application::{day_status, list_feasts, recommend};
use sinaxar::cli::{output, Cli, Commands};
use sinaxar::domain::fasting::fasting_periods;
use sinaxar::domain::{DateRef, FeastKind};
use sinaxar::error::{Result, SinaxarError};
use sinaxar::infrastructure::Config;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::discover()?,
    };

    match cli.command {
        Some(Commands::Month { month, year, kind }) => {
            let kind = kind
                .as_deref()
                .map(FeastKind::from_str)
                .transpose()
                .map_err(SinaxarError::UnknownFeastKind)?;
            let feasts = list_feasts::feasts_of_month(month, year, kind)?;
            emit(output::format_feast_list(&feasts, config.names));
            Ok(())
        }
        Some(Commands::Saints { month }) => {
            let saints = list_feasts::saints_of_month(month)?;
            emit(output::format_feast_list(&saints, config.names));
            Ok(())
        }
        Some(Commands::Upcoming { count, from }) => {
            let reference = resolve_reference(from.as_deref())?;
            let feasts = list_feasts::upcoming(reference, count);
            emit(output::format_feast_list(&feasts, config.names));
            Ok(())
        }
        Some(Commands::Periods) => {
            emit(output::format_period_list(fasting_periods(), config.names));
            Ok(())
        }
        Some(Commands::Recommend { days, from }) => {
            let reference = resolve_reference(from.as_deref())?;
            let destinations = recommend::recommend(reference, days, &config);
            emit(output::format_recommendations(&destinations));
            Ok(())
        }
        Some(Commands::Config) => {
            emit(output::format_config(&config));
            Ok(())
        }
        None => {
            // No subcommand: day report for the referenced date (default today)
            let reference = resolve_reference(cli.date_ref.as_deref())?;
            let status = day_status(reference);
            emit(output::format_day_status(&status, config.names));
            Ok(())
        }
    }
}

/// Print formatted output with a guaranteed trailing newline
fn emit(text: String) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Resolve an optional date reference against today's date
fn resolve_reference(input: Option<&str>) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match input {
        Some(s) => Ok(DateRef::parse(s)?.resolve(today)),
        None => Ok(today),
    }
}
