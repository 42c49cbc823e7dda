//! Error types for almanac operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Illegal date: YYYY:MM:DD ({year}:{month}:{day})")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("Malformed date: '{0}' (expected YYYY-MM-DD)")]
    Malformed(String),

    #[error("Day number out of range: {0}")]
    OutOfRange(i64),

    #[error("Unsupported year for Easter computation: {0}")]
    UnsupportedYear(i32),

    #[error("Date is undefined")]
    Undefined,
}

pub type Result<T> = std::result::Result<T, DateError>;
