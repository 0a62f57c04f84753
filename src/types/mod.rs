//! Scalar domain types: identifiers, colors, and the date-or-datetime codec.

use thiserror::Error;

mod colors;
mod date;
mod ids;

pub use colors::*;
pub use date::*;
pub use ids::*;

/// Errors produced while parsing scalar values from their wire form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("invalid date/time value: {0}")]
    InvalidDateTime(String),
}
