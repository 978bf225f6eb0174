//! Seasons used to tag garments and to describe trip weather.
//!
//! # Examples
//! ```
//! use wardrobe_core::Season;
//!
//! assert_eq!(Season::Fall.as_str(), "fall");
//! assert_eq!(Season::Winter.to_string(), "winter");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four calendar seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Fall,
    /// December to February.
    Winter,
}

/// Error returned when parsing an unknown season tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown season '{input}'")]
pub struct ParseSeasonError {
    /// The rejected input.
    pub input: String,
}

impl Season {
    /// Every season, in calendar order starting with spring.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Return the season as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }

    /// Map a calendar date onto its (northern hemisphere) season.
    ///
    /// Only the month is consulted.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wardrobe_core::Season;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// assert_eq!(Season::of_date(date), Season::Fall);
    /// ```
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(ParseSeasonError {
                input: s.to_owned(),
            }),
        }
    }
}
