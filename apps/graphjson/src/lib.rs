//! # graphjson
//!
//! Command-line front end for graphjson-core.
//!
//! Loads a graph description (JSON or TOML), turns it into a
//! [`graphjson_core::Graph`] plus per-component attribute tables, and drives
//! the core exporter.

pub mod cli;
pub mod error;
pub mod input;

pub use error::AppError;
