//! Validated log length

use logpack_types::LengthError;

/// A log length in meters that is strictly positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLength(f64);

impl LogLength {
    /// Validate a raw length.
    ///
    /// Anything not strictly positive is invalid, NaN included.
    /// There is no upper bound: positive infinity is a length that fits zero logs.
    pub fn new(meters: f64) -> Result<Self, LengthError> {
        if meters.is_nan() || meters <= 0.0 {
            return Err(LengthError::InvalidLength(meters));
        }
        Ok(Self(meters))
    }

    pub fn meters(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for LogLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", self.0)
    }
}
