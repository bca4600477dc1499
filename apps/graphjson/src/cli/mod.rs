//! # graphjson CLI Module
//!
//! This module implements the CLI interface for graphjson.
//!
//! ## Available Commands
//!
//! - `export` - Export a graph description as a JSON document
//! - `check` - Run the full export pipeline and report counts only

mod commands;

use crate::AppError;
use crate::input::{IdStrategy, InputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// graphjson - deterministic graph-to-JSON export
///
/// Reads a graph description (JSON or TOML) and writes one compact JSON
/// document with the graph's nodes, edges and attributes.
#[derive(Parser, Debug)]
#[command(name = "graphjson")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a graph description as a JSON document
    Export {
        /// Path to the graph description
        #[arg(short, long)]
        input: PathBuf,

        /// Description format (defaults to the file extension)
        #[arg(short = 't', long, value_enum)]
        format: Option<InputFormat>,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How vertex ids are chosen
        #[arg(long, value_enum, default_value_t = IdStrategy::Sequential)]
        vertex_ids: IdStrategy,

        /// How edge ids are chosen
        #[arg(long, value_enum, default_value_t = IdStrategy::Sequential)]
        edge_ids: IdStrategy,
    },

    /// Validate a graph description by exporting it into a discarding sink
    Check {
        /// Path to the graph description
        #[arg(short, long)]
        input: PathBuf,

        /// Description format (defaults to the file extension)
        #[arg(short = 't', long, value_enum)]
        format: Option<InputFormat>,

        /// How vertex ids are chosen
        #[arg(long, value_enum, default_value_t = IdStrategy::Sequential)]
        vertex_ids: IdStrategy,

        /// How edge ids are chosen
        #[arg(long, value_enum, default_value_t = IdStrategy::Sequential)]
        edge_ids: IdStrategy,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    if cli.verbose {
        tracing::info!(command = ?cli.command, "executing command");
    }

    match cli.command {
        Commands::Export {
            input,
            format,
            output,
            vertex_ids,
            edge_ids,
        } => cmd_export(&input, format, output.as_deref(), vertex_ids, edge_ids)?,
        Commands::Check {
            input,
            format,
            vertex_ids,
            edge_ids,
        } => cmd_check(&input, format, vertex_ids, edge_ids, cli.json_mode)?,
    };
    Ok(())
}
