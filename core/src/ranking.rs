use crate::error::GraphError;
use crate::graph::{ActorId, MovieGraph};
use crate::traversal::distances::{UNREACHED, hop_distances};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Controls which actors the ranking treats as outliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// An actor reaching fewer than this many others is flagged degenerate:
    /// its component is too small for the average to mean anything.
    pub min_reachable: usize,
}

impl RankingConfig {
    pub fn new(min_reachable: usize) -> Self {
        Self { min_reachable }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { min_reachable: 10 }
    }
}

/// One actor's averaged result, as persisted to the score cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorScore {
    pub actor: String,
    pub score: f64,
    pub reachable: usize,
    pub degenerate: bool,
}

/// What a by-name lookup reports: the raw score plus the ranking position.
///
/// `score` is `None` only for actors that reach nobody at all. `rank` is
/// 1-based and `None` for degenerate actors, which stay readable here even
/// though the ranking excludes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub score: Option<f64>,
    pub reachable: usize,
    pub degenerate: bool,
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoreCell {
    score: Option<f64>,
    reachable: usize,
    degenerate: bool,
}

impl ScoreCell {
    fn unreached() -> Self {
        Self {
            score: None,
            reachable: 0,
            degenerate: true,
        }
    }
}

/// Average-distance scores for the whole actor population.
///
/// The ranking is ascending by score (lower = more central), ties broken by
/// actor name, so sorting the same scores twice always yields the same
/// order. Degenerate actors are excluded from the ranking but not from
/// lookup.
#[derive(Debug)]
pub struct ScoreBoard {
    cells: Vec<ScoreCell>,
    ranking: Vec<ActorId>,
    ranks: Vec<Option<usize>>,
}

/// Compute every actor's average distance to the rest of the population.
///
/// One independent BFS per actor over the read-only graph, fanned out on the
/// rayon pool; each task writes its own output slot, so workers never
/// contend. A degenerate component never aborts the batch. This is the
/// dominant O(A x (V+E)) cost in the system — cache the result through
/// [`ScoreBoard::to_cache`] when the dataset allows it.
pub fn compute_average_scores(graph: &MovieGraph, config: &RankingConfig) -> ScoreBoard {
    let cells: Vec<ScoreCell> = (0..graph.actor_count() as ActorId)
        .into_par_iter()
        .map(|actor| average_distance_cell(graph, actor, config))
        .collect();

    debug!(actors = cells.len(), "average score batch complete");
    ScoreBoard::from_cells(graph, cells)
}

fn average_distance_cell(graph: &MovieGraph, actor: ActorId, config: &RankingConfig) -> ScoreCell {
    let hops = hop_distances(graph, actor, None);

    let mut total: u64 = 0;
    let mut reachable = 0usize;
    for (other, &distance) in hops.iter().enumerate() {
        if other as ActorId == actor || distance == UNREACHED {
            continue;
        }
        total += u64::from(distance);
        reachable += 1;
    }

    ScoreCell {
        score: (reachable > 0).then(|| total as f64 / reachable as f64),
        reachable,
        degenerate: reachable < config.min_reachable,
    }
}

impl ScoreBoard {
    fn from_cells(graph: &MovieGraph, cells: Vec<ScoreCell>) -> Self {
        let mut ranking: Vec<ActorId> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.score.is_some() && !cell.degenerate)
            .map(|(actor, _)| actor as ActorId)
            .collect();

        ranking.sort_by(|&a, &b| compare_scored(graph, &cells, a, b));

        let mut ranks = vec![None; cells.len()];
        for (position, &actor) in ranking.iter().enumerate() {
            ranks[actor as usize] = Some(position + 1);
        }

        Self {
            cells,
            ranking,
            ranks,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Actors in ranking order, degenerate components excluded.
    pub fn ranking(&self) -> &[ActorId] {
        &self.ranking
    }

    /// The `k` most central actors with their scores.
    pub fn top(&self, k: usize) -> Vec<(ActorId, f64)> {
        self.ranking
            .iter()
            .take(k)
            .map(|&actor| {
                let score = self.cells[actor as usize].score.unwrap_or(f64::INFINITY);
                (actor, score)
            })
            .collect()
    }

    pub fn standing(&self, graph: &MovieGraph, name: &str) -> Result<Standing, GraphError> {
        let actor = graph.require_actor(name)?;
        let cell = &self.cells[actor as usize];
        Ok(Standing {
            score: cell.score,
            reachable: cell.reachable,
            degenerate: cell.degenerate,
            rank: self.ranks[actor as usize],
        })
    }

    /// Serialize the board in its deterministic cache order: ascending
    /// score, ties by actor name. Actors that reach nobody carry no score
    /// and are omitted; reloading restores them as unreached.
    pub fn to_cache(&self, graph: &MovieGraph) -> Vec<ActorScore> {
        let mut scored: Vec<ActorId> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.score.is_some())
            .map(|(actor, _)| actor as ActorId)
            .collect();
        scored.sort_by(|&a, &b| compare_scored(graph, &self.cells, a, b));

        scored
            .into_iter()
            .map(|actor| {
                let cell = &self.cells[actor as usize];
                ActorScore {
                    actor: graph.actor_name(actor).to_string(),
                    score: cell.score.unwrap_or(f64::INFINITY),
                    reachable: cell.reachable,
                    degenerate: cell.degenerate,
                }
            })
            .collect()
    }

    /// Rebuild a board from persisted entries, skipping the whole batch
    /// computation. Fails with `UnknownActor` when an entry names an actor
    /// the graph does not have — the usual sign of a stale cache.
    pub fn from_cache(graph: &MovieGraph, entries: &[ActorScore]) -> Result<Self, GraphError> {
        let mut cells = vec![ScoreCell::unreached(); graph.actor_count()];

        for entry in entries {
            let actor = graph.require_actor(&entry.actor)?;
            cells[actor as usize] = ScoreCell {
                score: Some(entry.score),
                reachable: entry.reachable,
                degenerate: entry.degenerate,
            };
        }

        Ok(Self::from_cells(graph, cells))
    }
}

fn compare_scored(graph: &MovieGraph, cells: &[ScoreCell], a: ActorId, b: ActorId) -> Ordering {
    let score_a = cells[a as usize].score.unwrap_or(f64::INFINITY);
    let score_b = cells[b as usize].score.unwrap_or(f64::INFINITY);
    score_a
        .partial_cmp(&score_b)
        .unwrap_or(Ordering::Equal)
        .then_with(|| graph.actor_name(a).cmp(graph.actor_name(b)))
}
