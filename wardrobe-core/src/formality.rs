//! The 1–5 dress formality scale.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Formality level from 1 (very casual) to 5 (very formal).
///
/// # Examples
/// ```
/// use wardrobe_core::Formality;
///
/// # fn main() -> Result<(), wardrobe_core::FormalityError> {
/// let shirt = Formality::new(4)?;
/// let tee = Formality::new(1)?;
/// assert_eq!(shirt.distance(tee), 3);
/// assert!(Formality::new(6).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Formality(u8);

/// Errors returned by [`Formality::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormalityError {
    /// The level lies outside `1..=5`.
    #[error("formality level {level} is outside {min}..={max}", min = Formality::MIN, max = Formality::MAX)]
    OutOfRange {
        /// The rejected level.
        level: u8,
    },
}

impl Formality {
    /// Lowest valid level.
    pub const MIN: u8 = 1;
    /// Highest valid level.
    pub const MAX: u8 = 5;

    /// Loungewear and beachwear.
    pub const VERY_CASUAL: Self = Self(1);
    /// Everyday casual clothes.
    pub const CASUAL: Self = Self(2);
    /// Smart casual.
    pub const SMART_CASUAL: Self = Self(3);
    /// Business attire.
    pub const FORMAL: Self = Self(4);
    /// Black tie and ceremonial wear.
    pub const VERY_FORMAL: Self = Self(5);

    /// Validate and construct a formality level.
    ///
    /// # Errors
    /// Returns [`FormalityError::OutOfRange`] when `level` is outside `1..=5`.
    pub const fn new(level: u8) -> Result<Self, FormalityError> {
        if level < Self::MIN || level > Self::MAX {
            return Err(FormalityError::OutOfRange { level });
        }
        Ok(Self(level))
    }

    /// Interpret a trip-level formality where `0` means "not set".
    ///
    /// # Errors
    /// Returns [`FormalityError::OutOfRange`] for levels above `5`.
    ///
    /// # Examples
    /// ```
    /// use wardrobe_core::Formality;
    ///
    /// assert_eq!(Formality::from_trip_level(0), Ok(None));
    /// assert_eq!(Formality::from_trip_level(4), Ok(Formality::new(4).ok()));
    /// ```
    pub const fn from_trip_level(level: u8) -> Result<Option<Self>, FormalityError> {
        if level == 0 {
            return Ok(None);
        }
        match Self::new(level) {
            Ok(formality) => Ok(Some(formality)),
            Err(err) => Err(err),
        }
    }

    /// Return the raw level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Number of levels separating `self` from `other`.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl Default for Formality {
    /// Smart casual, the middle of the scale.
    fn default() -> Self {
        Self::SMART_CASUAL
    }
}

impl TryFrom<u8> for Formality {
    type Error = FormalityError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Formality> for u8 {
    fn from(formality: Formality) -> Self {
        formality.0
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
