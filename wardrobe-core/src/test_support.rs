//! Builders shared by unit, behaviour, and property tests.

use chrono::NaiveDate;

use crate::{Formality, Season, WardrobeItem, WeatherDay, WeatherForecast};

/// Build a calendar date, panicking on impossible input.
///
/// # Panics
/// Panics when the components do not form a valid date.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Build a formality level, panicking outside `1..=5`.
///
/// # Panics
/// Panics when `level` is not a valid formality.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
pub fn formality(level: u8) -> Formality {
    Formality::new(level).expect("valid formality level")
}

/// Build a never-worn item named after its id.
#[must_use]
pub fn item(id: &str, category: &str) -> WardrobeItem {
    WardrobeItem::new(id, format!("Item {id}"), category)
}

/// Build a seasonal item with the given formality and wear count.
#[must_use]
pub fn seasonal_item(
    id: &str,
    category: &str,
    seasons: &[Season],
    level: u8,
    times_worn: u32,
) -> WardrobeItem {
    item(id, category)
        .with_seasons(seasons.iter().copied())
        .with_formality(formality(level))
        .with_wear(times_worn, None)
}

/// Build a dry forecast of `days` days whose mean temperature is `average`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture spreads min and max around the average"
)]
pub fn forecast_with_average(average: f64, days: u32) -> WeatherForecast {
    let start = date(2026, 7, 1);
    let daily = (0..days)
        .map(|offset| WeatherDay {
            date: start + chrono::Days::new(u64::from(offset)),
            temp_min: average - 5.0,
            temp_max: average + 5.0,
            precipitation_mm: 0.0,
            weather_code: Some(0),
        })
        .collect();
    WeatherForecast::new(daily)
}
