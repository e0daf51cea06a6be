use crate::app::BaconPathApp;
use crate::cache;
use crate::colors::ColorScheme;
use anyhow::Result;
use baconpath_core::{MovieGraph, RankingConfig, ScoreBoard, compute_average_scores};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Get a score board, preferring the persisted cache over the O(A x (V+E))
/// batch. A cache that no longer matches the graph is discarded with a
/// warning; `--refresh` skips it outright. Whether the cache is fresh for a
/// changed dataset is the caller's call - the cache file sits next to
/// nothing that pins it to a CSV.
pub fn load_or_compute(
    app: &BaconPathApp,
    graph: &MovieGraph,
    min_reachable: usize,
    cache_override: Option<PathBuf>,
    refresh: bool,
    colors: &ColorScheme,
    quiet: bool,
) -> Result<ScoreBoard> {
    let cache_path = cache_override.or_else(|| app.default_cache_path());

    if !refresh {
        if let Some(path) = cache_path.as_deref().filter(|path| path.exists()) {
            let loaded = cache::read_scores(path)
                .and_then(|entries| ScoreBoard::from_cache(graph, &entries).map_err(Into::into));
            match loaded {
                Ok(board) => {
                    if !quiet {
                        println!("💾 Using cached scores from {}", path.display());
                    }
                    return Ok(board);
                }
                Err(error) => {
                    eprintln!(
                        "{} score cache unusable ({error:#}), recomputing",
                        colors.error("⚠️")
                    );
                }
            }
        }
    }

    let spinner = batch_spinner(graph.actor_count(), quiet);
    let board = compute_average_scores(graph, &RankingConfig::new(min_reachable));
    spinner.finish_and_clear();

    if let Some(path) = cache_path.as_deref() {
        if let Err(error) = cache::write_scores(path, &board.to_cache(graph)) {
            eprintln!(
                "{} could not write score cache: {error:#}",
                colors.error("⚠️")
            );
        }
    }

    Ok(board)
}

fn batch_spinner(actor_count: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!(
        "Averaging distances for {actor_count} actors..."
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
