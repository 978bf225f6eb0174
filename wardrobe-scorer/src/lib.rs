//! Wear recommendations and packing suggestions for a wardrobe.
//!
//! The crate provides three capabilities:
//! - **Wear ranking** scores every item for "what to wear today" from how
//!   recently and how often it was worn, whether it suits the season, and how
//!   close it sits to the occasion's formality. See [`WearScorer`].
//! - **Packing** works out how many items of each category a trip needs and
//!   keeps the best-scoring items per category. See [`PackingEngine`].
//! - **Enrichment** decorates a packing suggestion with natural-language
//!   explanations from an optional [`Explainer`], falling back to the
//!   scorers' own reasons.
//!
//! Every ranking orders items by descending score and breaks ties by
//! ascending item identifier, so results are reproducible.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use wardrobe_core::{Season, TripContext, TripType, WardrobeItem};
//! use wardrobe_scorer::{WearContext, score_and_rank_items, suggest_packing_items};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
//! let items = vec![
//!     WardrobeItem::new("t1", "Linen shirt", "tops").with_seasons([Season::Summer]),
//!     WardrobeItem::new("t2", "Wool jumper", "tops").with_seasons([Season::Winter]),
//! ];
//!
//! let ranked = score_and_rank_items(&items, &WearContext::for_date(today, None)).unwrap();
//! assert_eq!(ranked[0].item_id, "t1");
//!
//! let trip = TripContext::new(3, TripType::Leisure, today);
//! let suggestion = suggest_packing_items(&items, &trip).unwrap();
//! assert_eq!(suggestion.items.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::collections::BTreeSet;

use wardrobe_core::WardrobeItem;

pub mod enrichment;
mod error;
pub mod factors;
pub mod packing;
mod wear;
mod weights;

pub use enrichment::{
    EnrichedItem, EnrichedSuggestion, EnrichmentError, Explainer, TripSummary, enrich_suggestion,
};
pub use error::ScoringError;
pub use packing::{
    CategoryNeeds, PackingContext, PackingEngine, PackingScorer, calculate_category_needs,
    suggest_packing_items,
};
pub use wear::{WearContext, WearScorer, score_and_rank_items, score_item_for_wear};
pub use weights::{PackingWeights, WearWeights};

/// Reject empty or repeated item identifiers.
pub(crate) fn validate_item_ids(items: &[WardrobeItem]) -> Result<(), ScoringError> {
    let mut seen = BTreeSet::new();
    for item in items {
        if item.id.is_empty() {
            return Err(ScoringError::EmptyItemId);
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ScoringError::DuplicateItemId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}
