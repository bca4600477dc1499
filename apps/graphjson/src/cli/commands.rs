//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::AppError;
use crate::input::{IdStrategy, InputFormat, LoadedGraph};
use graphjson_core::ExportSummary;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum size of a graph description (100 MB).
///
/// Descriptions are read fully into memory before parsing.
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), AppError> {
    let metadata = std::fs::metadata(path)?;

    if metadata.len() > max_size {
        return Err(AppError::FileTooLarge {
            size: metadata.len(),
            max: max_size,
        });
    }
    Ok(())
}

/// Validate an input path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it
/// names an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, AppError> {
    let canonical = path
        .canonicalize()
        .map_err(|e| AppError::Path(format!("'{}': {}", path.display(), e)))?;

    if !canonical.is_file() {
        return Err(AppError::Path(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path.
///
/// The parent directory must exist; the file itself may not exist yet.
fn validate_output_path(path: &Path) -> Result<PathBuf, AppError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        AppError::Path(format!(
            "output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(AppError::Path(format!(
            "output directory '{}' is not a directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| AppError::Path(format!("'{}' has no file name", path.display())))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// LOADING
// =============================================================================

/// Read and convert a description file.
///
/// The format falls back to the file extension when not given.
pub fn load_graph(input: &Path, format: Option<InputFormat>) -> Result<LoadedGraph, AppError> {
    let path = validate_file_path(input)?;
    validate_file_size(&path, MAX_INPUT_FILE_SIZE)?;

    let format = format.unwrap_or_else(|| InputFormat::from_path(&path));
    let text = std::fs::read_to_string(&path)?;

    tracing::debug!(path = %path.display(), ?format, "reading graph description");
    LoadedGraph::from_text(&text, format)
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Export a description as a JSON document to `output`, or stdout.
///
/// The document is fully assembled before the output file is created, so a
/// graph the exporter rejects never leaves an empty or partial file behind.
pub fn cmd_export(
    input: &Path,
    format: Option<InputFormat>,
    output: Option<&Path>,
    vertex_ids: IdStrategy,
    edge_ids: IdStrategy,
) -> Result<ExportSummary, AppError> {
    let validated_output = output.map(validate_output_path).transpose()?;

    let loaded = load_graph(input, format)?;
    let document = loaded
        .exporter(vertex_ids, edge_ids)
        .document(&loaded.graph)?;

    let bytes = match &validated_output {
        Some(path) => {
            let mut writer = BufWriter::new(std::fs::File::create(path)?);
            let bytes = document.write_to(&mut writer)?;
            writer.flush()?;
            bytes
        }
        None => {
            let mut stdout = io::stdout().lock();
            let bytes = document.write_to(&mut stdout)?;
            stdout.flush()?;
            bytes
        }
    };

    let summary = ExportSummary {
        nodes: document.node_count(),
        edges: document.edge_count(),
        bytes,
    };

    match &validated_output {
        Some(path) => tracing::info!(
            nodes = summary.nodes,
            edges = summary.edges,
            bytes = summary.bytes,
            "Exported graph to {}",
            path.display()
        ),
        None => tracing::info!(
            nodes = summary.nodes,
            edges = summary.edges,
            bytes = summary.bytes,
            "Exported graph to stdout"
        ),
    }

    Ok(summary)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Run the full export pipeline into a discarding sink and report counts.
pub fn cmd_check(
    input: &Path,
    format: Option<InputFormat>,
    vertex_ids: IdStrategy,
    edge_ids: IdStrategy,
    json_mode: bool,
) -> Result<ExportSummary, AppError> {
    let loaded = load_graph(input, format)?;
    let summary = loaded
        .exporter(vertex_ids, edge_ids)
        .export(&loaded.graph, &mut io::sink())?;

    if json_mode {
        let output = serde_json::json!({
            "input": input.to_string_lossy(),
            "valid": true,
            "nodes": summary.nodes,
            "edges": summary.edges,
            "bytes": summary.bytes
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(summary);
    }

    println!("graphjson Check");
    println!("===============");
    println!("Input: {}", input.display());
    println!();
    println!("Nodes: {}", summary.nodes);
    println!("Edges: {}", summary.edges);
    println!("Bytes: {}", summary.bytes);

    Ok(summary)
}
