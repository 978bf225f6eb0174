//! Trips being packed for.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Formality, WeatherForecast};

/// Purpose of a trip, driving default formality and packing adjustments.
///
/// Deserialising an unlisted purpose yields [`TripType::Other`]; `FromStr`
/// stays strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// Work travel.
    Business,
    /// Relaxed holiday.
    Leisure,
    /// Hiking, climbing and other outdoor pursuits.
    Adventure,
    /// Seaside holiday.
    Beach,
    /// Urban sightseeing.
    City,
    /// Attending a wedding.
    Wedding,
    /// Attending a conference.
    Conference,
    /// Anything else.
    #[serde(other)]
    Other,
}

/// Error returned when parsing an unknown trip type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trip type '{input}'")]
pub struct ParseTripTypeError {
    /// The rejected input.
    pub input: String,
}

impl TripType {
    /// Every trip type.
    pub const ALL: [Self; 8] = [
        Self::Business,
        Self::Leisure,
        Self::Adventure,
        Self::Beach,
        Self::City,
        Self::Wedding,
        Self::Conference,
        Self::Other,
    ];

    /// Return the trip type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Leisure => "leisure",
            Self::Adventure => "adventure",
            Self::Beach => "beach",
            Self::City => "city",
            Self::Wedding => "wedding",
            Self::Conference => "conference",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = ParseTripTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|trip_type| trip_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTripTypeError {
                input: s.to_owned(),
            })
    }
}

/// Errors raised while deriving a trip from its dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// The end date precedes the start date.
    #[error("trip end date {end} is before start date {start}")]
    EndBeforeStart {
        /// First day of the trip.
        start: NaiveDate,
        /// Last day of the trip.
        end: NaiveDate,
    },
    /// The trip spans more days than can be represented.
    #[error("trip spanning {days} days is too long")]
    TooLong {
        /// Inclusive day count.
        days: i64,
    },
}

/// Number of days covered by a trip, counting both endpoints.
///
/// # Errors
/// Returns [`TripError::EndBeforeStart`] when `end < start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_core::inclusive_duration;
///
/// let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 7, 3).unwrap();
/// assert_eq!(inclusive_duration(start, end), Ok(3));
/// assert_eq!(inclusive_duration(start, start), Ok(1));
/// ```
pub fn inclusive_duration(start: NaiveDate, end: NaiveDate) -> Result<u32, TripError> {
    if end < start {
        return Err(TripError::EndBeforeStart { start, end });
    }
    let days = (end - start).num_days().saturating_add(1);
    u32::try_from(days).map_err(|_| TripError::TooLong { days })
}

/// Everything the packing engine needs to know about a trip.
///
/// `today` is the reference date for freshness; the engine never reads the
/// clock itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripContext {
    /// Trip length in days, counting both endpoints.
    pub duration: u32,
    /// Purpose of the trip.
    pub trip_type: TripType,
    /// Explicit formality, overriding the trip-type default when set.
    #[serde(default)]
    pub formality: Option<Formality>,
    /// Destination forecast, when one could be retrieved.
    #[serde(default)]
    pub weather: Option<WeatherForecast>,
    /// Reference date for freshness scoring.
    pub today: NaiveDate,
}

impl TripContext {
    /// Construct a context without explicit formality or weather.
    #[must_use]
    pub const fn new(duration: u32, trip_type: TripType, today: NaiveDate) -> Self {
        Self {
            duration,
            trip_type,
            formality: None,
            weather: None,
            today,
        }
    }

    /// Construct a context from the trip's first and last day.
    ///
    /// # Errors
    /// Propagates [`TripError`] from [`inclusive_duration`].
    pub fn from_dates(
        start: NaiveDate,
        end: NaiveDate,
        trip_type: TripType,
        today: NaiveDate,
    ) -> Result<Self, TripError> {
        let duration = inclusive_duration(start, end)?;
        Ok(Self::new(duration, trip_type, today))
    }

    /// Set an explicit formality.
    #[must_use]
    pub fn with_formality(mut self, formality: Option<Formality>) -> Self {
        self.formality = formality;
        self
    }

    /// Attach a destination forecast.
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherForecast) -> Self {
        self.weather = Some(weather);
        self
    }
}
