//! Natural-language explanations layered over a packing suggestion.
//!
//! The decorator never changes which items were picked, their order or their
//! scores. It asks an optional [`Explainer`] to phrase the picks and falls
//! back to text built from each item's reasons whenever the explainer is
//! missing, fails, or replies with something unreadable.
#![forbid(unsafe_code)]

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use wardrobe_core::{Formality, PackingSuggestion, ScoredItem, TripContext, TripType};

use crate::packing::target_formality_for;

/// Failures reported by an [`Explainer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    /// No explainer backend is configured or reachable.
    #[error("explainer is unavailable")]
    Unavailable,
    /// The explainer was reached but could not produce text.
    #[error("explainer failed: {0}")]
    Failed(String),
}

/// Text-polishing collaborator that answers a prompt with free text.
pub trait Explainer: Send + Sync {
    /// Answer `prompt`, ideally with the JSON reply the prompt asks for.
    ///
    /// # Errors
    /// Returns [`EnrichmentError`] when no reply can be produced.
    fn explain(&self, prompt: &str) -> Result<String, EnrichmentError>;
}

/// Trip details quoted in the prompt and in fallback summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// Trip length in days.
    pub duration: u32,
    /// Purpose of the trip.
    pub trip_type: TripType,
    /// Formality the trip was packed for.
    pub formality: Formality,
    /// Where the trip goes, when known.
    pub destination: Option<String>,
    /// Short human-readable forecast, when known.
    pub weather_summary: Option<String>,
}

impl TripSummary {
    /// Summarise a trip context.
    ///
    /// The destination comes from the forecast location and the weather
    /// summary from its average temperature and rain outlook.
    #[must_use]
    pub fn from_trip(trip: &TripContext) -> Self {
        let forecast = trip.weather.as_ref();
        let destination = forecast
            .and_then(|weather| weather.location.as_ref())
            .map(|location| location.name.clone());
        let weather_summary = forecast.and_then(|weather| {
            weather.average_temperature().map(|average| {
                let mut summary = format!("{average:.0}°C average");
                if weather.indicates_rain() {
                    summary.push_str(", rain likely");
                }
                summary
            })
        });
        Self {
            duration: trip.duration,
            trip_type: trip.trip_type,
            formality: target_formality_for(trip),
            destination,
            weather_summary,
        }
    }

    /// Replace the destination.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

/// A suggested item with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    /// The item exactly as the engine scored it.
    #[serde(flatten)]
    pub item: ScoredItem,
    /// One-sentence explanation of the pick.
    #[serde(rename = "aiExplanation")]
    pub explanation: String,
}

/// A packing suggestion with explanations and an overall summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSuggestion {
    /// Suggested items in the engine's order.
    pub items: Vec<EnrichedItem>,
    /// One or two sentences describing the plan.
    pub summary: String,
    /// Whether the explanations came from a readable explainer reply.
    ///
    /// A reply that holds no parseable JSON object counts as a fallback, so
    /// this is `false` whenever every explanation is rule-based.
    pub ai_powered: bool,
}

/// Explanations recovered from an explainer reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExplanations {
    /// Summary from the reply, if it carried a non-empty one.
    pub summary: Option<String>,
    /// One explanation per item, aligned with the items passed in.
    pub explanations: Vec<String>,
}

/// Render the prompt sent to an [`Explainer`].
///
/// Lists the trip details, the per-category breakdown and the numbered
/// picks, then asks for a JSON reply carrying a `summary` and one
/// `aiExplanation` per `itemId`.
#[must_use]
pub fn build_prompt(suggestion: &PackingSuggestion, trip: &TripSummary) -> String {
    let mut lines = vec![
        "You are a packing assistant. Given these rule-based packing suggestions for a trip, \
         provide:"
            .to_owned(),
        "1. A brief 1-2 sentence summary of the packing plan".to_owned(),
        "2. For each item, a one-sentence explanation of why it was included".to_owned(),
        String::new(),
        "Trip details:".to_owned(),
        format!("- Duration: {} days", trip.duration),
        format!("- Type: {}", trip.trip_type),
        format!("- Formality level: {}/5", trip.formality),
    ];
    if let Some(destination) = &trip.destination {
        lines.push(format!("- Destination: {destination}"));
    }
    if let Some(weather) = &trip.weather_summary {
        lines.push(format!("- Weather: {weather}"));
    }

    lines.push(String::new());
    lines.push("Category breakdown:".to_owned());
    lines.extend(
        suggestion
            .category_breakdown
            .iter()
            .map(|(category, count)| {
                format!("  {category}: {}/{} needed", count.suggested, count.needed)
            }),
    );

    lines.push(String::new());
    lines.push("Suggested items:".to_owned());
    lines.extend(suggestion.items.iter().zip(1_usize..).map(|(item, position)| {
        format!(
            "{position}. {} ({}, score: {:.2})",
            item.name, item.category, item.score
        )
    }));

    lines.push(String::new());
    lines.push(REPLY_FORMAT.to_owned());
    lines.join("\n")
}

const REPLY_FORMAT: &str = r#"Respond in JSON format:
{
  "summary": "Brief packing plan summary",
  "items": [
    { "itemId": "...", "aiExplanation": "One sentence why this item is good for the trip" }
  ]
}"#;

/// Fallback explanation joined from the item's reasons.
///
/// An item with no reasons is explained by a lone `"."`.
///
/// # Examples
/// ```
/// use wardrobe_core::ScoredItem;
/// use wardrobe_scorer::enrichment::rule_explanation;
///
/// let item = ScoredItem {
///     item_id: "t1".into(),
///     name: "Tee".into(),
///     category: "tops".into(),
///     score: 0.8,
///     reasons: vec!["Good for summer".into(), "Formality matches trip".into()],
/// };
/// assert_eq!(rule_explanation(&item), "Good for summer. Formality matches trip.");
/// ```
#[must_use]
pub fn rule_explanation(item: &ScoredItem) -> String {
    let mut text = item.reasons.join(". ");
    text.push('.');
    text
}

/// Recover explanations from free text.
///
/// The JSON object spans from the first `{` to the last `}` of `text`. Items
/// the reply does not explain keep their rule-based explanation. Returns
/// `None` when no JSON object can be read.
#[must_use]
pub fn parse_explanations(text: &str, items: &[ScoredItem]) -> Option<ParsedExplanations> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    let object = text.get(start..=end)?;
    let reply: Value = serde_json::from_str(object).ok()?;

    let summary = reply
        .get("summary")
        .and_then(Value::as_str)
        .filter(|summary| !summary.is_empty())
        .map(str::to_owned);
    let replied: Vec<(&str, &str)> = reply
        .get("items")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let id = entry.get("itemId").and_then(Value::as_str)?;
                    let explanation = entry.get("aiExplanation").and_then(Value::as_str)?;
                    (!id.is_empty() && !explanation.is_empty()).then_some((id, explanation))
                })
                .collect()
        })
        .unwrap_or_default();

    let explanations = items
        .iter()
        .map(|item| {
            replied
                .iter()
                .rev()
                .find(|(id, _)| *id == item.item_id)
                .map_or_else(|| rule_explanation(item), |(_, text)| (*text).to_owned())
        })
        .collect();
    Some(ParsedExplanations {
        summary,
        explanations,
    })
}

/// Attach explanations and a summary to a packing suggestion.
///
/// Without an explainer, or when it fails or replies without readable JSON,
/// each item is explained by its reasons and `ai_powered` is `false`.
#[must_use]
pub fn enrich_suggestion(
    suggestion: &PackingSuggestion,
    trip: &TripSummary,
    explainer: Option<&dyn Explainer>,
) -> EnrichedSuggestion {
    let Some(backend) = explainer else {
        debug!("no explainer configured; using rule-based explanations");
        return rule_based(suggestion, trip_summary_line(suggestion, trip));
    };
    let reply = match backend.explain(&build_prompt(suggestion, trip)) {
        Ok(reply) => reply,
        Err(err) => {
            warn!("explainer failed, using rule-based explanations: {err}");
            return rule_based(suggestion, trip_summary_line(suggestion, trip));
        }
    };
    let Some(parsed) = parse_explanations(&reply, &suggestion.items) else {
        warn!("explainer reply held no readable JSON; using rule-based explanations");
        return rule_based(suggestion, generic_summary_line(suggestion));
    };

    let summary = parsed
        .summary
        .unwrap_or_else(|| generic_summary_line(suggestion));
    let items = suggestion
        .items
        .iter()
        .cloned()
        .zip(parsed.explanations)
        .map(|(item, explanation)| EnrichedItem { item, explanation })
        .collect();
    EnrichedSuggestion {
        items,
        summary,
        ai_powered: true,
    }
}

fn rule_based(suggestion: &PackingSuggestion, summary: String) -> EnrichedSuggestion {
    let items = suggestion
        .items
        .iter()
        .map(|item| EnrichedItem {
            explanation: rule_explanation(item),
            item: item.clone(),
        })
        .collect();
    EnrichedSuggestion {
        items,
        summary,
        ai_powered: false,
    }
}

fn trip_summary_line(suggestion: &PackingSuggestion, trip: &TripSummary) -> String {
    format!(
        "Packed {} items for your {}-day {} trip.",
        suggestion.items.len(),
        trip.duration,
        trip.trip_type
    )
}

fn generic_summary_line(suggestion: &PackingSuggestion) -> String {
    format!("Packed {} items for your trip.", suggestion.items.len())
}
