//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sinaxar")]
#[command(about = "Romanian Orthodox calendar and pilgrimage companion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date reference (e.g., today, next friday, 2025-08-15)
    #[arg(value_name = "DATE_REF")]
    pub date_ref: Option<String>,

    /// Path to a config file (overrides SINAXAR_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the feasts of a month
    Month {
        /// Month number (1-12)
        month: u32,

        /// Calendar year
        #[arg(short, long, default_value_t = 2025)]
        year: i32,

        /// Filter by feast kind (major, minor, saint)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// List the saint commemorations of a month, across years
    Saints {
        /// Month number (1-12)
        month: u32,
    },

    /// List the next feasts from a reference date
    Upcoming {
        /// How many feasts to show
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Reference date (default: today)
        #[arg(short, long, value_name = "DATE_REF")]
        from: Option<String>,
    },

    /// List the fasting periods of the covered year
    Periods,

    /// Recommend pilgrimage destinations from upcoming feasts
    Recommend {
        /// Lookahead window in days (default: from config)
        #[arg(short, long)]
        days: Option<i64>,

        /// Reference date (default: today)
        #[arg(short, long, value_name = "DATE_REF")]
        from: Option<String>,
    },

    /// Show the effective configuration
    Config,
}
