use chrono::Utc;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use limber_core::{stats, Config, Period, Store};

#[derive(Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    Day,
    Month,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Day => Period::Day,
            PeriodArg::Month => Period::Month,
            PeriodArg::Year => Period::Year,
        }
    }
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Usage for one period
    Show {
        /// Period kind
        #[arg(long, value_enum, default_value = "day")]
        period: PeriodArg,
        /// Periods away from now (0 = current, negative = past)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },
    /// Rolling daily average over the trailing window
    Average,
}

#[derive(Serialize)]
struct PeriodReport {
    label: String,
    minutes: f64,
    display: String,
    goal_minutes: f64,
    progress_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rolling_average: Option<stats::RollingAverage>,
}

pub async fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let ledger = store.ledger().await?;
    let config = Config::load_or_default();
    let now = Utc::now();

    match action {
        StatsAction::Show { period, offset } => {
            let period = Period::from(period);
            let minutes = stats::minutes_for_period(&ledger, period, offset, now);
            let mut goal = stats::goal_minutes(period, &config.statistics);

            // The current day competes against the rolling average once a
            // full trailing window exists; otherwise the fixed goal applies.
            let mut rolling = None;
            if period == Period::Day && offset == 0 {
                let avg =
                    stats::rolling_average(&ledger, config.statistics.rolling_average_days, now);
                if avg.use_average {
                    goal = avg.average;
                }
                rolling = Some(avg);
            }

            let report = PeriodReport {
                label: stats::period_label(period, offset, now),
                minutes,
                display: stats::format_minutes_short(minutes),
                goal_minutes: goal,
                progress_pct: stats::progress_percentage(minutes, goal),
                rolling_average: rolling,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Average => {
            let avg = stats::rolling_average(&ledger, config.statistics.rolling_average_days, now);
            println!("{}", serde_json::to_string_pretty(&avg)?);
        }
    }
    Ok(())
}
