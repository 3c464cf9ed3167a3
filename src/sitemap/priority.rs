//! Relative URL priority in `[0.0, 1.0]`.

use std::fmt;
use thiserror::Error;

/// Returned when a priority outside `[0.0, 1.0]` is supplied.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid priority {value}: valid values range from 0.0 to 1.0")]
pub struct InvalidPriorityError {
    pub value: f64,
}

/// Priority hint of a URL within its sitemap.
///
/// Always rendered with six fractional digits, so `0.8` becomes `0.800000`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f64);

impl Priority {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// Validate and wrap `value`. NaN is rejected.
    pub fn new(value: f64) -> Result<Self, InvalidPriorityError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPriorityError { value })
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Priority {
    type Error = InvalidPriorityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
