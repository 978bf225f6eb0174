//! Garment categories known to the packing tables.
//!
//! Items describe their category as free text; only a tag that is exactly a
//! table key takes part in packing selection. Parsing through `FromStr` is
//! lenient about case and padding and suits user input.
//!
//! # Examples
//! ```
//! use wardrobe_core::Category;
//!
//! assert_eq!("tops".parse::<Category>(), Ok(Category::Tops));
//! assert_eq!(Category::from_tag("Tops"), None);
//! assert!("hats".parse::<Category>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A garment category with a per-trip packing ratio.
///
/// Variant order matches the packing table and drives `Ord`, so ordered maps
/// keyed by `Category` iterate in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, blouses and t-shirts.
    Tops,
    /// Trousers, skirts and shorts.
    Bottoms,
    /// Coats and jackets.
    Outerwear,
    /// Footwear.
    Shoes,
    /// Belts, scarves, jewellery and similar.
    Accessories,
    /// Dresses and jumpsuits.
    Dresses,
    /// Sport and hiking clothes.
    Activewear,
    /// Swimsuits and trunks.
    Swimwear,
    /// Pyjamas and loungewear.
    Sleepwear,
    /// Underwear and socks.
    Underwear,
}

/// Error returned when parsing a category outside the packing table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{input}'")]
pub struct ParseCategoryError {
    /// The rejected input.
    pub input: String,
}

impl Category {
    /// Every category, in packing-table order.
    pub const ALL: [Self; 10] = [
        Self::Tops,
        Self::Bottoms,
        Self::Outerwear,
        Self::Shoes,
        Self::Accessories,
        Self::Dresses,
        Self::Activewear,
        Self::Swimwear,
        Self::Sleepwear,
        Self::Underwear,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
            Self::Dresses => "dresses",
            Self::Activewear => "activewear",
            Self::Swimwear => "swimwear",
            Self::Sleepwear => "sleepwear",
            Self::Underwear => "underwear",
        }
    }

    /// Look up the category whose table key is exactly `tag`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_category_round_trips_through_text() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[rstest]
    fn ordering_follows_table_order() {
        let mut shuffled = vec![Category::Underwear, Category::Tops, Category::Shoes];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Tops, Category::Shoes, Category::Underwear]
        );
    }

    #[rstest]
    #[case("Swimwear", Category::Swimwear)]
    #[case(" dresses ", Category::Dresses)]
    fn parsing_tolerates_case_and_padding(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>(), Ok(expected));
    }

    #[rstest]
    #[case("Tops")]
    #[case(" shoes ")]
    #[case("UNDERWEAR")]
    fn table_lookup_requires_exact_key(#[case] tag: &str) {
        assert_eq!(Category::from_tag(tag), None);
    }

    #[rstest]
    fn table_lookup_finds_every_key() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.as_str()), Some(category));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "hats".parse::<Category>().unwrap_err();
        assert_eq!(err.input, "hats");
    }
}
