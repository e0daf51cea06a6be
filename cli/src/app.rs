use crate::dataset;
use anyhow::{Result, bail};
use baconpath_core::MovieGraph;
use std::path::PathBuf;

pub struct BaconPathApp {
    pub dataset_path: PathBuf,
}

impl BaconPathApp {
    pub fn new(dataset_path: PathBuf) -> Result<Self> {
        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {}", dataset_path.display());
        }
        Ok(Self { dataset_path })
    }

    /// Read the CSV and build the read-only graph. Returns the graph and
    /// how many rows the CSV layer dropped before the builder even saw them.
    pub fn load_graph(&self) -> Result<(MovieGraph, usize)> {
        let dataset = dataset::load_dataset(&self.dataset_path)?;
        let graph = MovieGraph::from_records(dataset.records);
        Ok((graph, dataset.unparsable_rows))
    }

    /// Default location for the persisted score cache.
    pub fn default_cache_path(&self) -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("baconpath").join("scores.json"))
    }
}
