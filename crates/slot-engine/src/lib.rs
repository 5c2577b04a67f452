//! # slot-engine
//!
//! Booking slot admissibility for FeelTheBook room rentals, plus the
//! reading-light sync planner for the rooms' IoT lights.
//!
//! The core is a set of pure predicates over a room's existing bookings:
//! given a candidate day or instant, a padding policy, and an explicit
//! wall-clock `now`, they decide which calendar cells a booking picker
//! may offer. Existing bookings block `[start - gap, end + gap]`
//! (inclusive) and new bookings must span a minimum duration. The
//! predicates are advisory — the backend re-validates on write.
//!
//! ## Modules
//!
//! - [`admissibility`] — the four picker predicates (start/end day and time)
//! - [`grid`] — fixed-step candidate enumeration for one local day
//! - [`booking`] — booking records and JSON input parsing
//! - [`policy`] — gap / minimum-duration / step constants and timezone
//! - [`lightsync`] — page-to-light-config plan for the reader
//! - [`error`] — error types

pub mod admissibility;
pub mod booking;
pub mod error;
pub mod grid;
pub mod lightsync;
pub mod policy;

pub use admissibility::{day_admissible, day_span_admissible, end_time_admissible, hour_admissible};
pub use booking::{bookings_from_json, parse_instant, Booking};
pub use error::SlotError;
pub use grid::{end_slots, start_slots};
pub use policy::{SlotPolicy, CONSERVATIVE_DAY_REJECTION};
