//! Score wardrobe items against a context.
//!
//! The `ItemScorer` trait assigns a [`ScoredItem`] to a [`WardrobeItem`]
//! given a scorer-specific context (today's date and season for wear
//! recommendations, trip parameters for packing).

use crate::{ScoredItem, WardrobeItem};

/// Calculate a ranked, explained score for a wardrobe item.
///
/// Higher scores indicate a better fit for the context. Implementations must
/// be thread-safe (`Send` + `Sync`) so scorers can serve concurrent requests.
/// Scoring is infallible: contexts are validated before scoring starts.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`ItemScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use wardrobe_core::{ItemScorer, ScoredItem, WardrobeItem};
///
/// struct FlatScorer;
///
/// impl ItemScorer for FlatScorer {
///     type Context = ();
///
///     fn score(&self, item: &WardrobeItem, _context: &()) -> ScoredItem {
///         ScoredItem {
///             item_id: item.id.clone(),
///             name: item.name.clone(),
///             category: item.category.clone(),
///             score: Self::sanitise(1.5),
///             reasons: Vec::new(),
///         }
///     }
/// }
///
/// let item = WardrobeItem::new("t1", "Tee", "tops");
/// assert_eq!(FlatScorer.score(&item, &()).score, 1.0);
/// ```
pub trait ItemScorer: Send + Sync {
    /// Inputs shared by every item scored in one call.
    type Context;

    /// Return the scored form of `item` according to `context`.
    fn score(&self, item: &WardrobeItem, context: &Self::Context) -> ScoredItem;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
