//! How many items of each category a trip needs.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use wardrobe_core::{Category, Formality, TripType};

use crate::ScoringError;

/// Per-day allowance for one category, optionally capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRatio {
    /// Category the ratio applies to.
    pub category: Category,
    /// Items per day of travel, rounded up.
    pub per_day: f64,
    /// Upper bound applied after rounding up.
    pub cap: Option<u32>,
}

const fn ratio(category: Category, per_day: f64, cap: Option<u32>) -> CategoryRatio {
    CategoryRatio {
        category,
        per_day,
        cap,
    }
}

/// Base allowance for every packable category, in [`Category`] order.
pub const CATEGORY_RATIOS: [CategoryRatio; 10] = [
    ratio(Category::Tops, 0.8, None),
    ratio(Category::Bottoms, 0.5, None),
    ratio(Category::Outerwear, 0.15, Some(2)),
    ratio(Category::Shoes, 0.2, Some(3)),
    ratio(Category::Accessories, 0.3, Some(5)),
    ratio(Category::Dresses, 0.3, None),
    ratio(Category::Activewear, 0.2, Some(3)),
    ratio(Category::Swimwear, 0.15, Some(2)),
    ratio(Category::Sleepwear, 0.3, Some(3)),
    ratio(Category::Underwear, 1.0, None),
];

/// Trip-type defaults: the formality to dress for and quantity multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripProfile {
    /// Formality used when the trip does not set one.
    pub default_formality: Formality,
    /// Multipliers for categories whose quantity differs from the base.
    pub multipliers: &'static [(Category, f64)],
}

impl TripProfile {
    /// Multiplier for `category`, `1.0` when the profile leaves it alone.
    #[must_use]
    pub fn multiplier(&self, category: Category) -> f64 {
        self.multipliers
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map_or(1.0, |(_, factor)| *factor)
    }
}

const UNCHANGED: &[(Category, f64)] = &[];
const BEACH: &[(Category, f64)] = &[
    (Category::Swimwear, 2.0),
    (Category::Activewear, 1.5),
    (Category::Outerwear, 0.5),
];
const ADVENTURE: &[(Category, f64)] = &[
    (Category::Activewear, 2.0),
    (Category::Outerwear, 1.5),
    (Category::Dresses, 0.2),
];
const BUSINESS: &[(Category, f64)] = &[
    (Category::Outerwear, 1.5),
    (Category::Activewear, 0.5),
    (Category::Swimwear, 0.2),
];
const WEDDING: &[(Category, f64)] = &[
    (Category::Dresses, 1.5),
    (Category::Accessories, 1.5),
    (Category::Activewear, 0.3),
];

/// Look up the defaults for a trip type.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, Formality, TripType};
/// use wardrobe_scorer::packing::trip_profile;
///
/// let beach = trip_profile(TripType::Beach);
/// assert_eq!(beach.default_formality, Formality::VERY_CASUAL);
/// assert_eq!(beach.multiplier(Category::Swimwear), 2.0);
/// assert_eq!(beach.multiplier(Category::Tops), 1.0);
/// ```
#[must_use]
pub const fn trip_profile(trip_type: TripType) -> TripProfile {
    let (default_formality, multipliers) = match trip_type {
        TripType::Business => (Formality::FORMAL, BUSINESS),
        TripType::Conference => (Formality::FORMAL, UNCHANGED),
        TripType::Wedding => (Formality::VERY_FORMAL, WEDDING),
        TripType::City | TripType::Other => (Formality::SMART_CASUAL, UNCHANGED),
        TripType::Leisure => (Formality::CASUAL, UNCHANGED),
        TripType::Beach => (Formality::VERY_CASUAL, BEACH),
        TripType::Adventure => (Formality::VERY_CASUAL, ADVENTURE),
    };
    TripProfile {
        default_formality,
        multipliers,
    }
}

/// Items needed per packable category, in [`Category`] order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryNeeds(BTreeMap<Category, u32>);

impl CategoryNeeds {
    /// Items needed for `category`; zero when it is not tracked.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or_default()
    }

    /// Iterate over categories and their needs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, needed)| (*category, *needed))
    }

    /// Total number of items the trip needs.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|needed| u64::from(*needed)).sum()
    }
}

/// Work out how many items of each category a trip needs.
///
/// Each category's base allowance is `ceil(duration × per_day)`, capped where
/// the table says so; the trip-type multiplier then scales it and the result
/// is rounded, never dropping below one.
///
/// # Errors
/// Returns [`ScoringError::ZeroDuration`] when `duration` is zero.
///
/// # Examples
/// ```
/// use wardrobe_core::{Category, TripType};
/// use wardrobe_scorer::calculate_category_needs;
///
/// let needs = calculate_category_needs(5, TripType::Leisure).unwrap();
/// assert_eq!(needs.get(Category::Underwear), 5);
/// assert_eq!(needs.get(Category::Tops), 4);
/// ```
pub fn calculate_category_needs(
    duration: u32,
    trip_type: TripType,
) -> Result<CategoryNeeds, ScoringError> {
    if duration == 0 {
        return Err(ScoringError::ZeroDuration);
    }
    let profile = trip_profile(trip_type);
    let needs = CATEGORY_RATIOS
        .iter()
        .map(|entry| {
            let base = base_allowance(duration, entry);
            (
                entry.category,
                scaled(base, profile.multiplier(entry.category)),
            )
        })
        .collect();
    Ok(CategoryNeeds(needs))
}

#[expect(
    clippy::float_arithmetic,
    reason = "per-day ratios are fractional"
)]
fn base_allowance(duration: u32, entry: &CategoryRatio) -> f64 {
    let base = (f64::from(duration) * entry.per_day).ceil();
    entry
        .cap
        .map_or(base, |cap| base.min(f64::from(cap)))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the product is positive and bounded by 2 × u32::MAX before rounding"
)]
fn scaled(base: f64, multiplier: f64) -> u32 {
    // `as` saturates, so the upper bound of u32 holds for absurd durations.
    (base * multiplier).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn needs(duration: u32, trip_type: TripType) -> CategoryNeeds {
        calculate_category_needs(duration, trip_type).unwrap_or_default()
    }

    #[rstest]
    fn underwear_is_one_per_day() {
        assert_eq!(needs(5, TripType::Leisure).get(Category::Underwear), 5);
    }

    #[rstest]
    fn longer_trips_need_more_tops() {
        assert!(
            needs(10, TripType::Leisure).get(Category::Tops)
                > needs(3, TripType::Leisure).get(Category::Tops)
        );
    }

    #[rstest]
    #[case(Category::Outerwear, 2)]
    #[case(Category::Shoes, 3)]
    #[case(Category::Accessories, 5)]
    #[case(Category::Activewear, 3)]
    #[case(Category::Swimwear, 2)]
    #[case(Category::Sleepwear, 3)]
    fn caps_hold_for_long_trips(#[case] category: Category, #[case] cap: u32) {
        assert_eq!(needs(30, TripType::Leisure).get(category), cap);
    }

    #[rstest]
    fn beach_trips_pack_more_swimwear_than_business() {
        assert!(
            needs(5, TripType::Beach).get(Category::Swimwear)
                > needs(5, TripType::Business).get(Category::Swimwear)
        );
    }

    #[rstest]
    fn every_category_needs_at_least_one(
        #[values(
            TripType::Business,
            TripType::Leisure,
            TripType::Adventure,
            TripType::Beach,
            TripType::City,
            TripType::Wedding,
            TripType::Conference,
            TripType::Other
        )]
        trip_type: TripType,
    ) {
        let one_day = needs(1, trip_type);
        assert_eq!(one_day.iter().count(), Category::ALL.len());
        assert!(one_day.iter().all(|(_, needed)| needed >= 1));
    }

    #[rstest]
    #[case(TripType::Beach, Category::Swimwear, 2)]
    #[case(TripType::Beach, Category::Outerwear, 1)]
    #[case(TripType::Adventure, Category::Activewear, 2)]
    #[case(TripType::Adventure, Category::Dresses, 1)]
    #[case(TripType::Wedding, Category::Dresses, 3)]
    #[case(TripType::Wedding, Category::Accessories, 3)]
    #[case(TripType::Business, Category::Outerwear, 2)]
    fn multipliers_apply_before_rounding(
        #[case] trip_type: TripType,
        #[case] category: Category,
        #[case] expected: u32,
    ) {
        assert_eq!(needs(5, trip_type).get(category), expected);
    }

    #[rstest]
    fn zero_duration_is_rejected() {
        assert_eq!(
            calculate_category_needs(0, TripType::City),
            Err(ScoringError::ZeroDuration)
        );
    }

    #[rstest]
    fn total_sums_every_category() {
        let three_days = needs(3, TripType::City);
        let expected: u64 = three_days.iter().map(|(_, n)| u64::from(n)).sum();
        assert_eq!(three_days.total(), expected);
        assert_eq!(three_days.total(), 15);
    }
}
