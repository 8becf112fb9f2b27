//! Export of value-table snapshots and simulation summaries
//!
//! Presentation and analysis tooling consume read-only snapshots of the
//! learning state; this module writes those snapshots as JSON or CSV and
//! simulation summaries as JSON.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{engine::ValueTableSnapshot, error::Result};

/// Summary of a finished simulation run, for the `--summary` output.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub shooter: String,
    pub rounds: u64,
    pub saves: u64,
    pub goals: u64,
    pub save_rate: f64,
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub epsilon: f64,
    pub seed: Option<u64>,
}

/// Write a snapshot as pretty JSON.
pub fn write_snapshot_json<W: Write>(writer: W, snapshot: &ValueTableSnapshot) -> Result<()> {
    serde_json::to_writer_pretty(writer, snapshot)?;
    Ok(())
}

/// Write a snapshot as CSV with a `state,action,value` header, cells in
/// enumeration order.
pub fn write_snapshot_csv<W: Write>(writer: W, snapshot: &ValueTableSnapshot) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for cell in &snapshot.cells {
        csv_writer.serialize(cell)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a simulation summary as pretty JSON.
pub fn write_summary_json<W: Write>(writer: W, summary: &SimulationSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Write a snapshot to a CSV file at `path`.
pub fn snapshot_to_csv_file(path: &Path, snapshot: &ValueTableSnapshot) -> Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create snapshot file '{}'", path.display()),
        source,
    })?;
    write_snapshot_csv(BufWriter::new(file), snapshot)
}

/// Write a summary to a JSON file at `path`.
pub fn summary_to_json_file(path: &Path, summary: &SimulationSummary) -> Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create summary file '{}'", path.display()),
        source,
    })?;
    write_summary_json(BufWriter::new(file), summary)
}
