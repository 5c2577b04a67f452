//! Slot policy — the padding, duration, and granularity constants that
//! shape which candidate instants a booking picker may offer.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Whether a day whose scan-and-advance walk crosses a local midnight is
/// rejected outright, even when free time remains earlier that day.
///
/// This reproduces the shipped picker behavior. Flipping it would admit
/// days that only have free time before a blocking window that runs past
/// midnight; revisit deliberately, not by accident.
pub const CONSERVATIVE_DAY_REJECTION: bool = true;

/// Tunable constants for slot admissibility, plus the timezone that
/// calendar-day comparisons are rendered in.
///
/// All instants stay UTC; `tz` only governs "same calendar day" and
/// start-of-day math.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPolicy {
    /// Granularity of the time picker, in minutes. Candidates are only
    /// ever offered at this step; the predicates themselves do not
    /// enforce it.
    pub step_minutes: i64,
    /// Buffer that must separate a new booking from an existing one on
    /// the same room, applied to both sides of every existing booking.
    pub gap_minutes: i64,
    /// Minimum span between a booking's start and end.
    pub min_booking_minutes: i64,
    /// Timezone the calendar UI renders in.
    pub tz: Tz,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        SlotPolicy {
            step_minutes: 15,
            gap_minutes: 60,
            min_booking_minutes: 120,
            tz: Tz::UTC,
        }
    }
}

impl SlotPolicy {
    /// Default constants with a render timezone parsed from an IANA name.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` if `tz` is not a valid IANA
    /// identifier.
    pub fn with_timezone(tz: &str) -> Result<Self> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| SlotError::InvalidTimezone(tz.to_string()))?;
        Ok(SlotPolicy {
            tz,
            ..SlotPolicy::default()
        })
    }

    pub fn step(&self) -> Duration {
        Duration::minutes(self.step_minutes)
    }

    pub fn gap(&self) -> Duration {
        Duration::minutes(self.gap_minutes)
    }

    pub fn min_booking(&self) -> Duration {
        Duration::minutes(self.min_booking_minutes)
    }

    /// The calendar date `t` falls on in the render timezone.
    pub fn local_date(&self, t: DateTime<Utc>) -> NaiveDate {
        t.with_timezone(&self.tz).date_naive()
    }

    /// Year, month, and day-of-month all match in the render timezone.
    pub fn same_local_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        let (a, b) = (a.with_timezone(&self.tz), b.with_timezone(&self.tz));
        a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
    }
}
