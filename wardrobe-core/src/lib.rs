//! Core domain types for the wardrobe engine.
//!
//! These models describe the read-only snapshot a caller hands to the
//! scorers: garments with their wear history, the trip being packed for, and
//! the forecast for its destination. Validating constructors return `Result`
//! so malformed input is rejected before any score is computed.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod formality;
pub mod item;
pub mod scored;
pub mod scorer;
pub mod season;
pub mod trip;
pub mod weather;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::{Category, ParseCategoryError};
pub use formality::{Formality, FormalityError};
pub use item::WardrobeItem;
pub use scored::{CategoryCount, PackingSuggestion, ScoredItem, sort_by_rank};
pub use scorer::ItemScorer;
pub use season::{ParseSeasonError, Season};
pub use trip::{ParseTripTypeError, TripContext, TripError, TripType, inclusive_duration};
pub use weather::{Location, RAINY_DAY_THRESHOLD_MM, WeatherDay, WeatherForecast};
