//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use wardrobe_cli::CliError;

fn main() {
    match wardrobe_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wardrobe: {err}");
            std::process::exit(1);
        }
    }
}
