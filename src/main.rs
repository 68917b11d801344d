/// Greenprompt - Sustainability analyzer for LLM prompts.
///
/// A fast CLI tool to score prompts for clarity, cost and estimated
/// energy/carbon/water impact before they are sent to an LLM API.
mod analyzers;
mod cli;
mod error;
mod metrics;
mod output;
mod rules;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
