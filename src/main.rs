//! `wochenplan` CLI — reads a weekly CSV availability grid and prints a
//! general meeting time plus 1-on-1 assignments with the head person.
//!
//! ```sh
//! wochenplan availability.csv Ada
//! wochenplan availability.csv Ada --interval 2
//! wochenplan availability.csv Ada --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wochenplan::input::AvailabilityTable;
use wochenplan::schedule::{Planner, DEFAULT_INTERVAL};

#[derive(Parser)]
#[command(
    name = "wochenplan",
    version,
    about = "Find meeting times in a weekly availability grid"
)]
struct Cli {
    /// CSV file: header `Time, Person...`, one row per 15-minute slot
    filename: PathBuf,

    /// Person every 1-on-1 is scheduled with; must match a header column
    head_person: String,

    /// Consecutive 15-minute slots a meeting needs
    #[arg(long, default_value_t = DEFAULT_INTERVAL, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    interval: usize,

    /// Emit the plan as JSON instead of text lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let table = AvailabilityTable::from_path(&cli.filename)
        .with_context(|| format!("cannot load {}", cli.filename.display()))?;

    let plan = Planner::new(table, cli.interval).plan(&cli.head_person)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        for line in plan.render_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
