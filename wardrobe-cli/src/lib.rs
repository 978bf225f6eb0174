//! Command-line interface for the wardrobe recommendation engine.
//!
//! `wardrobe recommend <request.json>` ranks items to wear today and
//! `wardrobe pack <request.json>` suggests what to pack for a trip. Both read
//! a JSON request and print pretty JSON to stdout. Options layer from CLI
//! flags, `WARDROBE_*` environment variables and configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod fs;
mod pack;
mod recommend;
mod request;

pub use error::CliError;
pub use request::TripRequestError;

use pack::{PackArgs, run_pack};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_EXPLAIN: &str = "explain";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "WARDROBE_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_PACK_REQUEST: &str = "WARDROBE_CMDS_PACK_REQUEST_PATH";

/// Run the wardrobe CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the request are
/// unusable, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Pack(args) => run_pack(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Wear recommendations and packing suggestions for a wardrobe",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank wardrobe items to wear today.
    Recommend(RecommendArgs),
    /// Suggest items to pack for a trip.
    Pack(PackArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
