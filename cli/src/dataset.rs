use anyhow::{Context, Result};
use baconpath_core::CastRecord;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One CSV row as the dataset ships it. Extra columns (vote counts and the
/// like) are ignored; the header names below are the contract.
#[derive(Debug, Deserialize)]
struct RawRow {
    actor: String,
    movie: String,
    year: i32,
    rating: f32,
}

pub struct LoadedDataset {
    pub records: Vec<CastRecord>,
    pub unparsable_rows: usize,
}

/// Read the dataset CSV into ingestion records.
///
/// Rows that fail to parse are skipped and counted, mirroring how the graph
/// builder treats rows with missing identities.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("could not open dataset {}", path.display()))?;

    let mut records = Vec::new();
    let mut unparsable_rows = 0usize;

    for row in reader.deserialize::<RawRow>() {
        match row {
            Ok(row) => records.push(CastRecord::new(row.actor, row.movie, row.year, row.rating)),
            Err(_) => unparsable_rows += 1,
        }
    }

    debug!(
        rows = records.len(),
        skipped = unparsable_rows,
        "dataset read"
    );
    Ok(LoadedDataset {
        records,
        unparsable_rows,
    })
}
