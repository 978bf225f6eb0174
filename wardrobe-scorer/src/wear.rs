//! "What to wear today" ranking.
//!
//! [`WearScorer`] blends freshness, variety, season fit and formality fit
//! into one score and records the reasons behind it. The reasons are
//! deterministic functions of the factor scores so repeated calls over the
//! same snapshot explain themselves identically.
#![forbid(unsafe_code)]

use chrono::NaiveDate;
use log::debug;
use wardrobe_core::{Formality, ItemScorer, ScoredItem, Season, WardrobeItem, sort_by_rank};

use crate::factors::{formality_match, freshness, season_match, variety};
use crate::{ScoringError, WearWeights, validate_item_ids};

const FRESH_REASON_THRESHOLD: f64 = 0.9;
const STALE_REASON_THRESHOLD: f64 = 0.3;
const VARIETY_REASON_THRESHOLD: f64 = 0.8;
const MISMATCH_REASON_THRESHOLD: f64 = 0.5;

/// Inputs shared by every item ranked in one wear recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WearContext {
    /// Season the recommendation is for.
    pub current_season: Season,
    /// Formality of the occasion; `None` accepts any formality.
    pub target_formality: Option<Formality>,
    /// Reference date for freshness.
    pub today: NaiveDate,
}

impl WearContext {
    /// Build a context for `today`, deriving the season from its month.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wardrobe_core::Season;
    /// use wardrobe_scorer::WearContext;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// assert_eq!(WearContext::for_date(today, None).current_season, Season::Fall);
    /// ```
    #[must_use]
    pub fn for_date(today: NaiveDate, target_formality: Option<Formality>) -> Self {
        Self {
            current_season: Season::of_date(today),
            target_formality,
            today,
        }
    }
}

/// Wear-recommendation scorer with injectable weights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WearScorer {
    weights: WearWeights,
}

impl WearScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeights`] when `weights` fail
    /// [`WearWeights::validate`].
    pub fn new(weights: WearWeights) -> Result<Self, ScoringError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> WearWeights {
        self.weights
    }

    /// Score every item and return them in ranking order.
    ///
    /// # Errors
    /// Returns [`ScoringError::EmptyItemId`] or
    /// [`ScoringError::DuplicateItemId`] when the identifiers are unusable.
    pub fn rank(
        &self,
        items: &[WardrobeItem],
        context: &WearContext,
    ) -> Result<Vec<ScoredItem>, ScoringError> {
        validate_item_ids(items)?;
        let mut scored: Vec<ScoredItem> = items
            .iter()
            .map(|item| self.score(item, context))
            .collect();
        sort_by_rank(&mut scored);
        debug!(
            "ranked {} items for {} (target formality {:?})",
            scored.len(),
            context.current_season,
            context.target_formality.map(Formality::level)
        );
        Ok(scored)
    }
}

impl ItemScorer for WearScorer {
    type Context = WearContext;

    #[expect(
        clippy::float_arithmetic,
        reason = "weighted sum of normalised factors"
    )]
    fn score(&self, item: &WardrobeItem, context: &WearContext) -> ScoredItem {
        let fresh = freshness(item.last_worn_at, context.today);
        let novel = variety(item.times_worn);
        let in_season = season_match(&item.season, context.current_season);
        let fitting = formality_match(item.formality, context.target_formality);

        let mut reasons = Vec::new();
        if fresh >= FRESH_REASON_THRESHOLD {
            let reason = if item.last_worn_at.is_none() {
                "Never worn before"
            } else {
                "Not worn recently"
            };
            reasons.push(reason.to_owned());
        } else if fresh < STALE_REASON_THRESHOLD {
            reasons.push("Worn recently".to_owned());
        }
        if novel >= VARIETY_REASON_THRESHOLD {
            reasons.push("Rarely worn - try something different".to_owned());
        }
        if in_season >= 1.0 {
            reasons.push(format!("Perfect for {}", context.current_season));
        } else if in_season < MISMATCH_REASON_THRESHOLD {
            reasons.push("Not ideal for current season".to_owned());
        }
        if context.target_formality.is_some() {
            if fitting >= 1.0 {
                reasons.push("Formality matches occasion".to_owned());
            } else if fitting < MISMATCH_REASON_THRESHOLD {
                reasons.push("Formality mismatch for occasion".to_owned());
            }
        }

        let weights = self.weights;
        let raw = fresh * weights.freshness
            + novel * weights.variety
            + in_season * weights.season
            + fitting * weights.formality;

        ScoredItem {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            score: Self::sanitise(raw),
            reasons,
        }
    }
}

/// Score one item for wear with the default weights.
///
/// # Errors
/// Returns [`ScoringError::EmptyItemId`] when the item has no identifier.
pub fn score_item_for_wear(
    item: &WardrobeItem,
    context: &WearContext,
) -> Result<ScoredItem, ScoringError> {
    validate_item_ids(std::slice::from_ref(item))?;
    Ok(WearScorer::default().score(item, context))
}

/// Score and rank items for wear with the default weights.
///
/// Items are ordered by descending score, ties broken by ascending id.
///
/// # Errors
/// Returns [`ScoringError::EmptyItemId`] or
/// [`ScoringError::DuplicateItemId`] when the identifiers are unusable.
pub fn score_and_rank_items(
    items: &[WardrobeItem],
    context: &WearContext,
) -> Result<Vec<ScoredItem>, ScoringError> {
    WearScorer::default().rank(items, context)
}
