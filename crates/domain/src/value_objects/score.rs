//! Suitability score value object
//!
//! Represents a validated running-suitability score (0-100).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::SuitabilityScore;
//!
//! // Create a valid score
//! let s = SuitabilityScore::new(82).expect("valid score");
//! assert_eq!(s.value(), 82);
//!
//! // Invalid values return an error
//! assert!(SuitabilityScore::new(101).is_err());
//!
//! // Clamp out-of-range values
//! let clamped = SuitabilityScore::clamped(150);
//! assert_eq!(clamped.value(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a score value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid suitability score: {0} is out of range (must be 0-100)")]
pub struct InvalidScore(u8);

/// Qualitative band for a score, matching the display color bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// 20-39
    Poor,
    /// 0-19
    Bad,
}

/// Running-suitability score (0-100)
///
/// This value object ensures scores are always within valid bounds.
///
/// # Examples
///
/// ```
/// use domain::value_objects::SuitabilityScore;
///
/// let s = SuitabilityScore::new(75).expect("valid score");
/// assert_eq!(format!("{s}"), "75");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SuitabilityScore(u8);

impl SuitabilityScore {
    /// Maximum valid score
    pub const MAX: u8 = 100;

    /// Create a new validated score
    ///
    /// # Errors
    ///
    /// Returns `InvalidScore` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidScore> {
        if value > Self::MAX {
            Err(InvalidScore(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a score, clamping to the valid range
    ///
    /// Negative values become 0, values greater than 100 become 100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i64) -> Self {
        if value < 0 {
            Self(0)
        } else if value > Self::MAX as i64 {
            Self(Self::MAX)
        } else {
            Self(value as u8)
        }
    }

    /// Get the raw score value
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Qualitative band for this score
    #[must_use]
    pub const fn grade(&self) -> ScoreGrade {
        match self.0 {
            80..=100 => ScoreGrade::Excellent,
            60..=79 => ScoreGrade::Good,
            40..=59 => ScoreGrade::Fair,
            20..=39 => ScoreGrade::Poor,
            _ => ScoreGrade::Bad,
        }
    }
}

impl fmt::Display for SuitabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SuitabilityScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
