//! Trip packing: category needs and per-category item selection.

mod engine;
mod needs;

pub use engine::{
    PackingContext, PackingEngine, PackingScorer, season_from_weather, suggest_packing_items,
    target_formality_for,
};
pub use needs::{
    CATEGORY_RATIOS, CategoryNeeds, CategoryRatio, TripProfile, calculate_category_needs,
    trip_profile,
};
