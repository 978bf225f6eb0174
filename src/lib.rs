//! Facade crate for the wardrobe recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the wear and packing scorers.

#![forbid(unsafe_code)]

pub use wardrobe_core::{
    Category, CategoryCount, Formality, FormalityError, ItemScorer, Location, PackingSuggestion,
    ScoredItem, Season, TripContext, TripError, TripType, WardrobeItem, WeatherDay,
    WeatherForecast,
};

#[cfg(feature = "scorer")]
pub use wardrobe_scorer::{
    CategoryNeeds, EnrichedItem, EnrichedSuggestion, EnrichmentError, Explainer, PackingEngine,
    PackingScorer, PackingWeights, ScoringError, TripSummary, WearContext, WearScorer,
    WearWeights, calculate_category_needs, enrich_suggestion, score_and_rank_items,
    score_item_for_wear, suggest_packing_items,
};
