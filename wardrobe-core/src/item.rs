//! Wardrobe items as seen by the scorers.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, Formality, Season};

/// A read-only snapshot of one garment and its wear history.
///
/// The identifier is opaque to the engine; it only has to be unique within a
/// single scoring call. An empty `season` set means the season was never
/// specified.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Formality, Season, WardrobeItem};
///
/// # fn main() -> Result<(), wardrobe_core::FormalityError> {
/// let item = WardrobeItem::new("shirt-1", "Oxford shirt", "tops")
///     .with_seasons([Season::Spring, Season::Fall])
///     .with_formality(Formality::new(4)?);
/// assert_eq!(item.packing_category(), Some(Category::Tops));
/// assert!(item.last_worn_at.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    /// Opaque identifier, unique within a scoring call.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text category tag.
    pub category: String,
    /// Seasons the garment suits.
    #[serde(default)]
    pub season: BTreeSet<Season>,
    /// How formal the garment is.
    #[serde(default)]
    pub formality: Formality,
    /// Total number of recorded wears.
    #[serde(default)]
    pub times_worn: u32,
    /// Date of the most recent wear; `None` when never worn.
    #[serde(default)]
    pub last_worn_at: Option<NaiveDate>,
}

impl WardrobeItem {
    /// Construct a never-worn item with no season tags and default formality.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            season: BTreeSet::new(),
            formality: Formality::default(),
            times_worn: 0,
            last_worn_at: None,
        }
    }

    /// Replace the season tags.
    #[must_use]
    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.season = seasons.into_iter().collect();
        self
    }

    /// Replace the formality level.
    #[must_use]
    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    /// Record the wear history.
    #[must_use]
    pub fn with_wear(mut self, times_worn: u32, last_worn_at: Option<NaiveDate>) -> Self {
        self.times_worn = times_worn;
        self.last_worn_at = last_worn_at;
        self
    }

    /// Return the packing-table category when the free-text tag is exactly
    /// one of its keys.
    #[must_use]
    pub fn packing_category(&self) -> Option<Category> {
        Category::from_tag(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::date;

    #[rstest]
    fn deserialises_camel_case_payload() {
        let payload = r#"{
            "id": "a1",
            "name": "Linen shirt",
            "category": "tops",
            "season": ["summer", "spring"],
            "formality": 2,
            "timesWorn": 4,
            "lastWornAt": "2026-07-01"
        }"#;
        let item: WardrobeItem = serde_json::from_str(payload).expect("valid payload");
        assert_eq!(item.times_worn, 4);
        assert_eq!(item.last_worn_at, Some(date(2026, 7, 1)));
        assert!(item.season.contains(&Season::Summer));
    }

    #[rstest]
    fn optional_fields_take_defaults() {
        let payload = r#"{"id": "a2", "name": "Scarf", "category": "accessories"}"#;
        let item: WardrobeItem = serde_json::from_str(payload).expect("valid payload");
        assert_eq!(item.formality, Formality::default());
        assert_eq!(item.times_worn, 0);
        assert!(item.season.is_empty());
        assert!(item.last_worn_at.is_none());
    }

    #[rstest]
    #[case(r#"{"id":"x","name":"n","category":"tops","lastWornAt":"yesterday"}"#)]
    #[case(r#"{"id":"x","name":"n","category":"tops","formality":9}"#)]
    #[case(r#"{"id":"x","name":"n","category":"tops","season":["monsoon"]}"#)]
    #[case(r#"{"id":"x","name":"n","category":"tops","timesWorn":-1}"#)]
    fn malformed_payloads_are_rejected(#[case] payload: &str) {
        assert!(serde_json::from_str::<WardrobeItem>(payload).is_err());
    }

    #[rstest]
    #[case("hats")]
    #[case("Tops")]
    #[case(" shoes ")]
    fn unknown_category_has_no_packing_category(#[case] tag: &str) {
        let item = WardrobeItem::new("h1", "Sun hat", tag);
        assert_eq!(item.packing_category(), None);
    }
}
