//! Daily forecasts supplied by the weather source.
//!
//! The engine never fetches weather itself; callers pass a
//! [`WeatherForecast`] when one is available and `None` otherwise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Precipitation above which a day counts as rainy, in millimetres.
pub const RAINY_DAY_THRESHOLD_MM: f64 = 2.0;

/// Share of rainy days above which a forecast "indicates rain".
const RAINY_SHARE_THRESHOLD: f64 = 0.3;

/// Forecast for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDay {
    /// Calendar day the forecast applies to.
    pub date: NaiveDate,
    /// Minimum temperature in °C.
    pub temp_min: f64,
    /// Maximum temperature in °C.
    pub temp_max: f64,
    /// Total precipitation in millimetres.
    #[serde(default, alias = "precipitation")]
    pub precipitation_mm: f64,
    /// WMO weather interpretation code, when known.
    #[serde(default)]
    pub weather_code: Option<u8>,
}

impl WeatherDay {
    /// Midpoint of the day's temperature range.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the daily mean is the midpoint of min and max"
    )]
    pub fn mean_temperature(&self) -> f64 {
        (self.temp_min + self.temp_max) / 2.0
    }

    /// Report whether the day's precipitation exceeds
    /// [`RAINY_DAY_THRESHOLD_MM`].
    #[must_use]
    pub fn is_rainy(&self) -> bool {
        self.precipitation_mm > RAINY_DAY_THRESHOLD_MM
    }
}

/// Named location a forecast was resolved for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable place name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Ordered daily forecasts covering a trip.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_core::{WeatherDay, WeatherForecast};
///
/// let day = WeatherDay {
///     date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
///     temp_min: 20.0,
///     temp_max: 30.0,
///     precipitation_mm: 0.0,
///     weather_code: None,
/// };
/// let forecast = WeatherForecast::new(vec![day]);
/// assert_eq!(forecast.average_temperature(), Some(25.0));
/// assert!(!forecast.indicates_rain());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// One entry per forecast day, in date order.
    pub daily: Vec<WeatherDay>,
    /// Where the forecast applies, if known.
    #[serde(default)]
    pub location: Option<Location>,
}

impl WeatherForecast {
    /// Construct a forecast without a location.
    #[must_use]
    pub const fn new(daily: Vec<WeatherDay>) -> Self {
        Self {
            daily,
            location: None,
        }
    }

    /// Attach the location the forecast was resolved for.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Mean of the daily temperature midpoints, or `None` without any days.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging daily means; forecasts are a handful of days long"
    )]
    pub fn average_temperature(&self) -> Option<f64> {
        if self.daily.is_empty() {
            return None;
        }
        let total: f64 = self.daily.iter().map(WeatherDay::mean_temperature).sum();
        Some(total / self.daily.len() as f64)
    }

    /// Report whether more than 30% of the forecast days are rainy.
    ///
    /// Empty forecasts never indicate rain.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the rainy share is a ratio of small day counts"
    )]
    pub fn indicates_rain(&self) -> bool {
        if self.daily.is_empty() {
            return false;
        }
        let rainy = self.daily.iter().filter(|day| day.is_rainy()).count();
        rainy as f64 / self.daily.len() as f64 > RAINY_SHARE_THRESHOLD
    }
}
