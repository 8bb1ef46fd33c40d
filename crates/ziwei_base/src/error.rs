//! Error type for chart generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from destiny-chart generation.
///
/// The engine has exactly one failure mode: a time-slot key outside the 12
/// recognized two-hour bins. Dates and genders are assumed pre-validated by
/// the caller and have no error path here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// The supplied time-slot key is not one of the 12 recognized bins.
    InvalidTimeSlot(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeSlot(key) => write!(f, "invalid time slot: {key:?}"),
        }
    }
}

impl Error for ChartError {}
