//! `slots` CLI — check booking slot admissibility from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is this day selectable as a booking start day?
//! slots check-day --date 2024-01-12 -b bookings.json
//!
//! # Is this instant selectable as a start time?
//! slots check-start --at 2024-01-10T13:15:00Z -b bookings.json
//!
//! # Is this instant selectable as an end time for a chosen start?
//! slots check-end --at 2024-01-10T16:00:00Z --start 2024-01-10T14:00:00Z -b bookings.json
//!
//! # Print every admissible start instant on a day (bookings via stdin)
//! echo '[]' | slots grid --date 2024-01-12 --now 2024-01-01T00:00:00Z
//! ```
//!
//! Checks print `true` or `false` on stdout. `--now` pins the evaluation
//! clock for reproducible runs; it defaults to the real clock.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

use slot_engine::{
    bookings_from_json, day_admissible, day_span_admissible, end_slots, end_time_admissible,
    hour_admissible, parse_instant, start_slots, Booking, SlotPolicy,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "FeelTheBook booking slot checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonOpts {
    /// Bookings JSON file for the room (reads from stdin if omitted)
    #[arg(short, long)]
    bookings: Option<String>,

    /// Evaluation clock, RFC 3339 (defaults to the current time)
    #[arg(long)]
    now: Option<String>,

    /// IANA timezone the calendar renders in
    #[arg(long, default_value = "UTC")]
    tz: String,

    /// Padding around existing bookings, in minutes
    #[arg(long, default_value_t = 60)]
    gap: i64,

    /// Minimum booking duration, in minutes
    #[arg(long, default_value_t = 120)]
    min_duration: i64,

    /// Picker granularity, in minutes
    #[arg(long, default_value_t = 15)]
    step: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a calendar day may be offered in a picker
    CheckDay {
        /// Day to check, YYYY-MM-DD (in the render timezone)
        #[arg(long)]
        date: String,
        /// Chosen start instant; when given, the day is checked as an
        /// end-picker cell instead of a start-picker cell
        #[arg(long)]
        start: Option<String>,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Check whether an instant may be offered as a booking start
    CheckStart {
        /// Candidate instant, RFC 3339
        #[arg(long)]
        at: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Check whether an instant may be offered as a booking end
    CheckEnd {
        /// Candidate instant, RFC 3339
        #[arg(long)]
        at: String,
        /// Chosen start instant, RFC 3339
        #[arg(long)]
        start: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Print all admissible instants on a day, one RFC 3339 line each
    Grid {
        /// Day to enumerate, YYYY-MM-DD (in the render timezone)
        #[arg(long)]
        date: String,
        /// Chosen start instant; when given, end slots are printed
        /// instead of start slots
        #[arg(long)]
        start: Option<String>,
        #[command(flatten)]
        common: CommonOpts,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckDay {
            date,
            start,
            common,
        } => {
            let (policy, bookings, now) = setup(&common)?;
            let candidate = day_anchor(&policy, &date)?;
            let verdict = match start {
                Some(raw) => {
                    let start = parse_start(&raw)?;
                    day_span_admissible(&policy, candidate, Some(start), &bookings, now)
                }
                None => day_admissible(&policy, candidate, &bookings, now),
            };
            println!("{}", verdict);
        }
        Commands::CheckStart { at, common } => {
            let (policy, bookings, now) = setup(&common)?;
            let candidate = parse_instant(&at)
                .with_context(|| format!("Invalid candidate instant: {}", at))?;
            println!("{}", hour_admissible(&policy, candidate, &bookings, now));
        }
        Commands::CheckEnd { at, start, common } => {
            let (policy, bookings, now) = setup(&common)?;
            let candidate = parse_instant(&at)
                .with_context(|| format!("Invalid candidate instant: {}", at))?;
            let start = parse_start(&start)?;
            println!(
                "{}",
                end_time_admissible(&policy, candidate, start, &bookings, now)
            );
        }
        Commands::Grid {
            date,
            start,
            common,
        } => {
            let (policy, bookings, now) = setup(&common)?;
            let day = parse_date(&date)?;
            let slots = match start {
                Some(raw) => {
                    let start = parse_start(&raw)?;
                    end_slots(&policy, day, start, &bookings, now)
                }
                None => start_slots(&policy, day, &bookings, now),
            };
            for slot in slots {
                println!("{}", slot.to_rfc3339());
            }
        }
    }

    Ok(())
}

/// Resolve the shared options into a policy, a bookings snapshot, and the
/// evaluation clock.
fn setup(common: &CommonOpts) -> Result<(SlotPolicy, Vec<Booking>, DateTime<Utc>)> {
    let mut policy = SlotPolicy::with_timezone(&common.tz)
        .with_context(|| format!("Invalid timezone: {}", common.tz))?;
    policy.gap_minutes = common.gap;
    policy.min_booking_minutes = common.min_duration;
    policy.step_minutes = common.step;

    let raw = read_input(common.bookings.as_deref())?;
    let bookings = bookings_from_json(&raw).context("Failed to parse bookings JSON")?;

    let now = match &common.now {
        Some(raw) => parse_instant(raw).with_context(|| format!("Invalid --now instant: {}", raw))?,
        None => Utc::now(),
    };

    Ok((policy, bookings, now))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", raw))
}

fn parse_start(raw: &str) -> Result<DateTime<Utc>> {
    parse_instant(raw).with_context(|| format!("Invalid start instant: {}", raw))
}

/// The instant a day cell is evaluated at: local midnight of that day in
/// the render timezone.
fn day_anchor(policy: &SlotPolicy, raw: &str) -> Result<DateTime<Utc>> {
    let day = parse_date(raw)?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date: {}", raw))?;
    match policy.tz.from_local_datetime(&midnight).earliest() {
        Some(anchor) => Ok(anchor.with_timezone(&Utc)),
        None => bail!("Midnight of {} does not exist in {}", raw, policy.tz),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
