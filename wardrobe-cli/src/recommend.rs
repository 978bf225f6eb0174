//! `recommend` command: rank the wardrobe for today.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::ScoredItem;
use wardrobe_scorer::{WearContext, score_and_rank_items};

use crate::fs::require_file;
use crate::request::{RecommendRequest, load_request};
use crate::{ARG_LIMIT, ARG_REQUEST, CliError, ENV_RECOMMEND_REQUEST, write_json};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank wardrobe items for today by freshness, variety, \
                 season and formality. The request is a JSON file holding \
                 the candidate items and, optionally, today's date, a season \
                 override and the occasion's formality.",
    about = "Rank wardrobe items to wear today"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommend request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Print at most this many items.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) limit: Option<usize>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        Ok(Self {
            request_path,
            limit: args.limit,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, chrono::Local::now().date_naive(), &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    today: NaiveDate,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_file(&config.request_path, ARG_REQUEST)?;
    let request: RecommendRequest = load_request(&config.request_path)?;
    let ranked = recommend(request, config.limit, today)?;
    write_json(writer, &ranked)
}

/// Rank the request's items, keeping at most `limit` of them.
pub(crate) fn recommend(
    request: RecommendRequest,
    limit: Option<usize>,
    today: NaiveDate,
) -> Result<Vec<ScoredItem>, CliError> {
    let reference = request.today.unwrap_or(today);
    let mut context = WearContext::for_date(reference, request.target_formality);
    if let Some(season) = request.season {
        context.current_season = season;
    }
    debug!(
        "recommending from {} items for {} ({})",
        request.items.len(),
        context.today,
        context.current_season
    );
    let mut ranked = score_and_rank_items(&request.items, &context)?;
    if let Some(count) = limit {
        ranked.truncate(count);
    }
    Ok(ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
