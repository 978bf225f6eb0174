//! Normalised factor scores shared by the wear and packing scorers.
//!
//! Every function here returns a value in `0.0..=1.0`.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use wardrobe_core::{Formality, Season};

/// Days after which an item counts as fully fresh again.
pub const FRESHNESS_HORIZON_DAYS: i64 = 30;
/// Exponential decay applied per recorded wear by [`variety`].
pub const VARIETY_DECAY_PER_WEAR: f64 = 0.1;
/// Season score for items without season tags.
pub const UNSPECIFIED_SEASON_SCORE: f64 = 0.5;
/// Season score for items tagged for other seasons only.
pub const OFF_SEASON_SCORE: f64 = 0.3;
/// Formality score lost per level of mismatch.
pub const FORMALITY_STEP_PENALTY: f64 = 0.25;
/// Wear count at which [`versatility`] saturates.
pub const VERSATILITY_SATURATION_WEARS: u32 = 20;

/// Score how long ago an item was last worn.
///
/// Never-worn items score `1.0`. Items worn today (or on a future date)
/// score `0.0`, and the score rises linearly to `1.0` at
/// [`FRESHNESS_HORIZON_DAYS`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_scorer::factors::freshness;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let fortnight_ago = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
/// assert_eq!(freshness(None, today), 1.0);
/// assert_eq!(freshness(Some(today), today), 0.0);
/// assert_eq!(freshness(Some(fortnight_ago), today), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "day counts below the horizon are tiny and convert exactly"
)]
pub fn freshness(last_worn_at: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(last_worn) = last_worn_at else {
        return 1.0;
    };
    let days_since = (today - last_worn).num_days();
    if days_since <= 0 {
        return 0.0;
    }
    if days_since >= FRESHNESS_HORIZON_DAYS {
        return 1.0;
    }
    days_since as f64 / FRESHNESS_HORIZON_DAYS as f64
}

/// Reward rarely worn items with an exponential decay over the wear count.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "exponential decay over the wear count"
)]
pub fn variety(times_worn: u32) -> f64 {
    if times_worn == 0 {
        return 1.0;
    }
    (-VARIETY_DECAY_PER_WEAR * f64::from(times_worn)).exp()
}

/// Score how well an item's season tags suit `current`.
///
/// Items tagged for every season contain `current` and so score `1.0`.
#[must_use]
pub fn season_match(item_seasons: &BTreeSet<Season>, current: Season) -> f64 {
    if item_seasons.is_empty() {
        return UNSPECIFIED_SEASON_SCORE;
    }
    if item_seasons.contains(&current) {
        return 1.0;
    }
    OFF_SEASON_SCORE
}

/// Score the gap between an item's formality and the target.
///
/// Without a target every formality is acceptable. Otherwise each level of
/// mismatch costs [`FORMALITY_STEP_PENALTY`], flooring at `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "linear penalty per formality level"
)]
pub fn formality_match(item: Formality, target: Option<Formality>) -> f64 {
    let Some(wanted) = target else {
        return 1.0;
    };
    let penalty = f64::from(item.distance(wanted)) * FORMALITY_STEP_PENALTY;
    (1.0 - penalty).max(0.0)
}

/// Reward proven staples: wear count over [`VERSATILITY_SATURATION_WEARS`],
/// capped at `1.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "wear count normalised against the saturation point"
)]
pub fn versatility(times_worn: u32) -> f64 {
    (f64::from(times_worn) / f64::from(VERSATILITY_SATURATION_WEARS)).min(1.0)
}
