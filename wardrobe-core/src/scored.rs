//! Scorer output: ranked items and packing suggestions.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Category;

/// An item with its combined score and the reasons behind it.
///
/// `score` lies in `0.0..=1.0`. `reasons` are advisory text in the order the
/// scorer produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    /// Identifier of the scored item.
    pub item_id: String,
    /// Display name of the scored item.
    pub name: String,
    /// Free-text category of the scored item.
    pub category: String,
    /// Combined weighted score.
    pub score: f64,
    /// Human-readable explanation fragments.
    pub reasons: Vec<String>,
}

impl ScoredItem {
    /// Ranking order: higher scores first, ties broken by ascending id.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use wardrobe_core::ScoredItem;
    ///
    /// let item = |id: &str, score: f64| ScoredItem {
    ///     item_id: id.into(),
    ///     name: String::new(),
    ///     category: String::new(),
    ///     score,
    ///     reasons: Vec::new(),
    /// };
    /// assert_eq!(item("a", 0.9).rank_cmp(&item("b", 0.4)), Ordering::Less);
    /// assert_eq!(item("a", 0.5).rank_cmp(&item("b", 0.5)), Ordering::Less);
    /// ```
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.item_id.cmp(&other.item_id))
    }
}

/// Sort items into ranking order.
pub fn sort_by_rank(items: &mut [ScoredItem]) {
    items.sort_by(ScoredItem::rank_cmp);
}

/// How many items a category needs and how many were picked.
///
/// `suggested` never exceeds `needed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Items required for the trip.
    pub needed: u32,
    /// Items actually suggested.
    pub suggested: u32,
}

/// Ranked packing picks plus a per-category breakdown.
///
/// The breakdown lists every [`Category`], including those with no
/// suggestions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingSuggestion {
    /// Suggested items in ranking order.
    pub items: Vec<ScoredItem>,
    /// Needed versus suggested counts per category.
    pub category_breakdown: BTreeMap<Category, CategoryCount>,
}

impl PackingSuggestion {
    /// Look up the breakdown entry for a category.
    #[must_use]
    pub fn breakdown(&self, category: Category) -> Option<CategoryCount> {
        self.category_breakdown.get(&category).copied()
    }
}
