//! `pack` command: suggest what to pack for a trip.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::PackingSuggestion;
use wardrobe_scorer::{EnrichedSuggestion, TripSummary, enrich_suggestion, suggest_packing_items};

use crate::fs::require_file;
use crate::request::{PackRequest, load_request};
use crate::{ARG_EXPLAIN, ARG_REQUEST, CliError, ENV_PACK_REQUEST, write_json};

/// CLI arguments for the `pack` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Suggest items to pack for a trip. The request is a JSON \
                 file holding the candidate items and the trip: its length \
                 (a duration or a start and end date), its type, an optional \
                 formality level and an optional weather forecast.",
    about = "Suggest items to pack for a trip"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct PackArgs {
    /// Path to a JSON file containing a pack request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Attach an explanation to every suggested item and a summary.
    #[arg(long = ARG_EXPLAIN)]
    #[serde(default)]
    pub(crate) explain: bool,
}

impl PackArgs {
    pub(crate) fn into_config(self) -> Result<PackConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackConfig::try_from(merged)
    }
}

/// Resolved `pack` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PackConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) explain: bool,
}

impl TryFrom<PackArgs> for PackConfig {
    type Error = CliError;

    fn try_from(args: PackArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_PACK_REQUEST,
        })?;
        Ok(Self {
            request_path,
            explain: args.explain,
        })
    }
}

/// What the `pack` command prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum PackOutput {
    Plain(PackingSuggestion),
    Explained(EnrichedSuggestion),
}

pub(crate) fn run_pack(args: PackArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_pack_with(args, chrono::Local::now().date_naive(), &mut stdout)
}

pub(crate) fn run_pack_with(
    args: PackArgs,
    today: NaiveDate,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_file(&config.request_path, ARG_REQUEST)?;
    let request: PackRequest = load_request(&config.request_path)?;
    let output = pack(request, &config, today)?;
    write_json(writer, &output)
}

/// Suggest items for the request's trip, explained when configured.
pub(crate) fn pack(
    request: PackRequest,
    config: &PackConfig,
    today: NaiveDate,
) -> Result<PackOutput, CliError> {
    let destination = request.trip.destination.clone();
    let trip = request
        .trip
        .into_context(request.today.unwrap_or(today))
        .map_err(|source| CliError::InvalidTrip {
            path: config.request_path.clone(),
            source,
        })?;
    let suggestion = suggest_packing_items(&request.items, &trip)?;
    if !config.explain {
        return Ok(PackOutput::Plain(suggestion));
    }
    let mut summary = TripSummary::from_trip(&trip);
    if let Some(place) = destination {
        summary = summary.with_destination(place);
    }
    Ok(PackOutput::Explained(enrich_suggestion(
        &suggestion,
        &summary,
        None,
    )))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PackConfig, CliError> {
    let merged = PackArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PackConfig::try_from(merged)
}
