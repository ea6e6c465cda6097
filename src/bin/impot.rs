use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use impot_engine::calculation::TaxEngine;
use impot_engine::config::ScheduleLoader;
use impot_engine::models::{Household, MaritalStatus};
use impot_engine::schedule::{CURRENT_YEAR, FiscalSchedule};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Status {
    Single,
    Married,
    CivilUnion,
    Divorced,
    Widowed,
}

impl From<Status> for MaritalStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Single => MaritalStatus::Single,
            Status::Married => MaritalStatus::Married,
            Status::CivilUnion => MaritalStatus::CivilUnion,
            Status::Divorced => MaritalStatus::Divorced,
            Status::Widowed => MaritalStatus::Widowed,
        }
    }
}

/// Compute the French income tax of a household.
#[derive(Parser, Debug)]
#[command(name = "impot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Net income of the first declarant, in euros
    #[arg(long, default_value_t = 0)]
    income1: i64,

    /// Net income of the second declarant, in euros
    #[arg(long, default_value_t = 0)]
    income2: i64,

    /// Marital status
    #[arg(short, long, value_enum, default_value = "single")]
    status: Status,

    /// Number of dependent children
    #[arg(short, long, default_value_t = 0)]
    children: i32,

    /// Number of dependent children with a disability
    #[arg(short, long, default_value_t = 0)]
    disabled: i32,

    /// The declarant raises the children alone
    #[arg(short, long, default_value_t = false)]
    isolated: bool,

    /// Fiscal year of the schedule to apply
    #[arg(short, long, default_value_t = CURRENT_YEAR)]
    year: i32,

    /// Directory of YAML schedules to load instead of the built-in one
    #[arg(long)]
    schedules: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn schedule(args: &Args) -> Result<FiscalSchedule> {
    match &args.schedules {
        Some(dir) => {
            let loader = ScheduleLoader::load(dir)
                .with_context(|| format!("Failed to load schedules from: {}", dir.display()))?;
            let schedule = loader
                .get(args.year)
                .with_context(|| format!("No schedule for {} in: {}", args.year, dir.display()))?;
            Ok(schedule.clone())
        }
        None => FiscalSchedule::for_year(args.year)
            .with_context(|| format!("No built-in schedule for {}", args.year)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let engine = TaxEngine::new(schedule(&args)?);
    let household = Household::new(args.status.into(), args.income1, args.income2)
        .with_children(args.children, args.disabled)
        .with_isolated_parent(args.isolated);

    let result = engine
        .compute(&household)
        .context("Failed to compute income tax")?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print!("{}", result.render());
    }

    Ok(())
}
