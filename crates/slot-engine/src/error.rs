//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Malformed bookings payload: {0}")]
    MalformedBookings(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
