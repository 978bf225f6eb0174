//! JSON request payloads accepted by the `recommend` and `pack` commands.

use std::io::BufReader;

use camino::Utf8Path;
use chrono::NaiveDate;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wardrobe_core::{
    Formality, FormalityError, Season, TripContext, TripError, TripType, WardrobeItem,
    WeatherForecast, inclusive_duration,
};

use crate::CliError;
use crate::fs::open_utf8_file;

/// Body of a `recommend` request file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendRequest {
    /// Candidate items.
    pub(crate) items: Vec<WardrobeItem>,
    /// Reference date; defaults to the local date.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
    /// Season override; defaults to the season of `today`.
    #[serde(default)]
    pub(crate) season: Option<Season>,
    /// Occasion formality; absent accepts any formality.
    #[serde(default)]
    pub(crate) target_formality: Option<Formality>,
}

/// Body of a `pack` request file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackRequest {
    /// Candidate items, already filtered to what can be packed.
    pub(crate) items: Vec<WardrobeItem>,
    /// Trip description.
    pub(crate) trip: TripRequest,
    /// Reference date; defaults to the local date.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

/// Trip as described in a request file.
///
/// The length comes from `duration` or from the inclusive `startDate` to
/// `endDate` range. A `formality` of `0` means "use the trip-type default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TripRequest {
    #[serde(default)]
    pub(crate) duration: Option<u32>,
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) end_date: Option<NaiveDate>,
    pub(crate) trip_type: TripType,
    #[serde(default)]
    pub(crate) formality: Option<u8>,
    #[serde(default)]
    pub(crate) weather: Option<WeatherForecast>,
    #[serde(default)]
    pub(crate) destination: Option<String>,
}

/// Reasons a trip request cannot become a [`TripContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripRequestError {
    /// Neither a duration nor a complete date range was given.
    #[error("trip needs a duration or both startDate and endDate")]
    MissingDuration,
    /// The explicit duration disagrees with the date range.
    #[error("duration {duration} disagrees with the {from_dates}-day date range")]
    ConflictingDuration {
        /// Duration given explicitly.
        duration: u32,
        /// Duration implied by the dates.
        from_dates: u32,
    },
    /// The date range is unusable.
    #[error(transparent)]
    Dates(#[from] TripError),
    /// The formality level is outside `0..=5`.
    #[error(transparent)]
    Formality(#[from] FormalityError),
}

impl TripRequest {
    /// Resolve the trip against `today`.
    pub(crate) fn into_context(self, today: NaiveDate) -> Result<TripContext, TripRequestError> {
        let duration = self.resolve_duration()?;
        let formality = Formality::from_trip_level(self.formality.unwrap_or(0))?;
        let mut trip = TripContext::new(duration, self.trip_type, today).with_formality(formality);
        if let Some(weather) = self.weather {
            trip = trip.with_weather(weather);
        }
        Ok(trip)
    }

    fn resolve_duration(&self) -> Result<u32, TripRequestError> {
        let from_dates = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(inclusive_duration(start, end)?),
            _ => None,
        };
        match (self.duration, from_dates) {
            (Some(duration), Some(dates)) if duration != dates => {
                Err(TripRequestError::ConflictingDuration {
                    duration,
                    from_dates: dates,
                })
            }
            (Some(duration), _) | (None, Some(duration)) => Ok(duration),
            (None, None) => Err(TripRequestError::MissingDuration),
        }
    }
}

/// Load and decode a JSON request file.
pub(crate) fn load_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let request = serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded request from {path}");
    Ok(request)
}
