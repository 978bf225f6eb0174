//! Select the best wardrobe items for a trip.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use wardrobe_core::{
    Category, CategoryCount, Formality, ItemScorer, PackingSuggestion, ScoredItem, Season,
    TripContext, WardrobeItem, WeatherForecast, sort_by_rank,
};

use super::needs::{calculate_category_needs, trip_profile};
use crate::factors::{formality_match, freshness, season_match, versatility};
use crate::{PackingWeights, ScoringError, validate_item_ids};

const SUMMER_FROM_CELSIUS: f64 = 25.0;
const SPRING_FROM_CELSIUS: f64 = 15.0;
const FALL_FROM_CELSIUS: f64 = 5.0;

const FRESH_REASON_THRESHOLD: f64 = 0.9;
const MISMATCH_REASON_THRESHOLD: f64 = 0.5;
const STAPLE_REASON_THRESHOLD: f64 = 0.5;

/// Derive the packing season from a forecast.
///
/// The mean of the daily temperature midpoints maps to summer at 25 °C and
/// above, spring from 15 °C, fall from 5 °C and winter below that. Missing or
/// empty forecasts default to spring.
///
/// # Errors
/// Returns [`ScoringError::InvalidForecast`] naming the first day whose
/// minimum or maximum temperature is not finite.
///
/// # Examples
/// ```
/// use wardrobe_core::Season;
/// use wardrobe_scorer::packing::season_from_weather;
///
/// assert_eq!(season_from_weather(None).unwrap(), Season::Spring);
/// ```
pub fn season_from_weather(weather: Option<&WeatherForecast>) -> Result<Season, ScoringError> {
    let Some(forecast) = weather else {
        return Ok(Season::Spring);
    };
    if let Some(day) = forecast
        .daily
        .iter()
        .position(|day| !day.temp_min.is_finite() || !day.temp_max.is_finite())
    {
        return Err(ScoringError::InvalidForecast { day });
    }
    let Some(average) = forecast.average_temperature() else {
        return Ok(Season::Spring);
    };
    let season = if average >= SUMMER_FROM_CELSIUS {
        Season::Summer
    } else if average >= SPRING_FROM_CELSIUS {
        Season::Spring
    } else if average >= FALL_FROM_CELSIUS {
        Season::Fall
    } else {
        Season::Winter
    };
    Ok(season)
}

/// The formality to pack for: the trip's own level, else its type's default.
#[must_use]
pub fn target_formality_for(trip: &TripContext) -> Formality {
    trip.formality
        .unwrap_or_else(|| trip_profile(trip.trip_type).default_formality)
}

/// Inputs shared by every item scored for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingContext {
    /// Season derived from the trip forecast.
    pub season: Season,
    /// Formality the trip calls for.
    pub target_formality: Formality,
    /// Reference date for freshness.
    pub today: NaiveDate,
}

impl PackingContext {
    /// Resolve the season and formality for a trip.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidForecast`] when the forecast holds a
    /// non-finite temperature.
    pub fn for_trip(trip: &TripContext) -> Result<Self, ScoringError> {
        Ok(Self {
            season: season_from_weather(trip.weather.as_ref())?,
            target_formality: target_formality_for(trip),
            today: trip.today,
        })
    }
}

/// Packing scorer blending season, formality, freshness and versatility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PackingScorer {
    weights: PackingWeights,
}

impl PackingScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when `weights` fail
    /// [`PackingWeights::validate`].
    pub fn new(weights: PackingWeights) -> Result<Self, ScoringError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> PackingWeights {
        self.weights
    }
}

impl ItemScorer for PackingScorer {
    type Context = PackingContext;

    #[expect(
        clippy::float_arithmetic,
        reason = "weighted sum of normalised factors"
    )]
    fn score(&self, item: &WardrobeItem, context: &PackingContext) -> ScoredItem {
        let in_season = season_match(&item.season, context.season);
        let fitting = formality_match(item.formality, Some(context.target_formality));
        let fresh = freshness(item.last_worn_at, context.today);
        let staple = versatility(item.times_worn);

        let mut reasons = Vec::new();
        if in_season >= 1.0 {
            reasons.push(format!("Good for {}", context.season));
        }
        if in_season < MISMATCH_REASON_THRESHOLD {
            reasons.push("Off-season".to_owned());
        }
        if fitting >= 1.0 {
            reasons.push("Formality matches trip".to_owned());
        }
        if fitting < MISMATCH_REASON_THRESHOLD {
            reasons.push("Formality mismatch".to_owned());
        }
        if fresh >= FRESH_REASON_THRESHOLD {
            reasons.push("Fresh — not worn recently".to_owned());
        }
        if staple > STAPLE_REASON_THRESHOLD {
            reasons.push("Versatile wardrobe staple".to_owned());
        }

        let weights = self.weights;
        let raw = in_season * weights.season
            + fitting * weights.formality
            + fresh * weights.freshness
            + staple * weights.versatility;

        ScoredItem {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            score: Self::sanitise(raw),
            reasons,
        }
    }
}

/// Packing suggestion engine with injectable weights.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_core::{TripContext, TripType, WardrobeItem};
/// use wardrobe_scorer::PackingEngine;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let trip = TripContext::new(2, TripType::City, today);
/// let items = vec![
///     WardrobeItem::new("t1", "Oxford shirt", "tops"),
///     WardrobeItem::new("u1", "Umbrella hat", "novelty"),
/// ];
/// let suggestion = PackingEngine::default().suggest(&items, &trip).unwrap();
/// assert_eq!(suggestion.items.len(), 1);
/// assert_eq!(suggestion.category_breakdown.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PackingEngine {
    scorer: PackingScorer,
}

impl PackingEngine {
    /// Build an engine whose scorer uses `weights`.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when the weights are unusable.
    pub fn new(weights: PackingWeights) -> Result<Self, ScoringError> {
        Ok(Self {
            scorer: PackingScorer::new(weights)?,
        })
    }

    /// Suggest items to pack for `trip`.
    ///
    /// Items are scored, grouped by packing category and the best `needed`
    /// items of each category are kept. Items whose category is outside the
    /// packing table are never suggested. The breakdown lists every category.
    ///
    /// # Errors
    /// Returns a [`ScoringError`] when item identifiers are empty or
    /// repeated, the trip lasts zero days, or the forecast holds a
    /// non-finite temperature.
    pub fn suggest(
        &self,
        items: &[WardrobeItem],
        trip: &TripContext,
    ) -> Result<PackingSuggestion, ScoringError> {
        validate_item_ids(items)?;
        let needs = calculate_category_needs(trip.duration, trip.trip_type)?;
        let context = PackingContext::for_trip(trip)?;
        debug!(
            "packing {} candidates for a {}-day {} trip ({}, formality {})",
            items.len(),
            trip.duration,
            trip.trip_type,
            context.season,
            context.target_formality
        );

        let mut by_category: BTreeMap<Category, Vec<ScoredItem>> = BTreeMap::new();
        for item in items {
            let Some(category) = item.packing_category() else {
                debug!("item {} has unpackable category '{}'", item.id, item.category);
                continue;
            };
            by_category
                .entry(category)
                .or_default()
                .push(self.scorer.score(item, &context));
        }

        let mut picks = Vec::new();
        let mut category_breakdown = BTreeMap::new();
        for (category, needed) in needs.iter() {
            let mut group = by_category.remove(&category).unwrap_or_default();
            sort_by_rank(&mut group);
            group.truncate(usize::try_from(needed).unwrap_or(usize::MAX));
            let suggested = u32::try_from(group.len()).unwrap_or(needed);
            debug!("{category}: {suggested}/{needed}");
            category_breakdown.insert(category, CategoryCount { needed, suggested });
            picks.append(&mut group);
        }
        sort_by_rank(&mut picks);

        Ok(PackingSuggestion {
            items: picks,
            category_breakdown,
        })
    }
}

/// Suggest items to pack for `trip` with the default weights.
///
/// # Errors
/// See [`PackingEngine::suggest`].
pub fn suggest_packing_items(
    items: &[WardrobeItem],
    trip: &TripContext,
) -> Result<PackingSuggestion, ScoringError> {
    PackingEngine::default().suggest(items, trip)
}
