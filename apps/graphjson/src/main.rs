//! # graphjson
//!
//! Command-line front end for the graphjson export engine.
//!
//! ## Usage
//!
//! ```bash
//! # Export a description to a file
//! graphjson export -i graph.json -o graph.out.json
//!
//! # Use the description's own ids and write to stdout
//! graphjson export -i graph.toml --vertex-ids label --edge-ids label
//!
//! # Validate without writing the document
//! graphjson --json-mode check -i graph.json
//! ```
//!
//! Logs go to stderr so stdout can carry the exported document.

use clap::Parser;
use graphjson::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // GRAPHJSON_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("GRAPHJSON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "graphjson=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
