//! Cast-overlap similarity and movie recommendations.
//!
//! Similarity is the Jaccard overlap of two cast sets, so only movies
//! sharing at least one cast member score above zero. Candidates are drawn
//! from the query's one-hop cast-overlap neighborhood: a movie two hops away
//! is never surfaced, however similar its audience might find it. That
//! shallow-neighborhood behavior is deliberate and pinned by tests.

use crate::error::GraphError;
use crate::filter::MovieFilter;
use crate::graph::{ActorId, MovieGraph, MovieId};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A filtered recommendation: the score plus the candidate's own facts,
/// so callers can show why the movie matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    pub score: f64,
    pub year: i32,
    pub rating: f32,
}

/// Ranked cast-overlap recommendations for one query movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Recommendations {
    /// Unfiltered query: candidates ordered by descending similarity,
    /// ties by title.
    Ranked(Vec<(String, f64)>),
    /// Filtered query: candidates keyed by title with the facts that
    /// passed the filter.
    Filtered(BTreeMap<String, ScoredMatch>),
    /// The query shares no cast member with any other movie.
    NoCandidates,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        match self {
            Recommendations::Ranked(entries) => entries.is_empty(),
            Recommendations::Filtered(entries) => entries.is_empty(),
            Recommendations::NoCandidates => true,
        }
    }
}

/// Jaccard overlap of two cast sets: shared over combined cast size.
/// Symmetric and bounded to [0, 1].
pub fn cast_similarity(graph: &MovieGraph, a: MovieId, b: MovieId) -> f64 {
    let cast_a: FxHashSet<ActorId> = graph.cast(a).iter().copied().collect();
    let cast_b = graph.cast(b);

    let shared = cast_b.iter().filter(|actor| cast_a.contains(actor)).count();
    let combined = cast_a.len() + cast_b.len() - shared;

    if combined == 0 {
        0.0
    } else {
        shared as f64 / combined as f64
    }
}

/// Rank the movies most similar to `title` by shared cast.
///
/// Candidates come from one cast-overlap hop; with a filter, candidates
/// failing it on their own year/rating are discarded (the query movie is
/// never filtered). Results sort by descending score, ties by title
/// ascending, truncated to `count`. `NoCandidates` reports a query that
/// shares no cast with any other movie — an empty outcome, not a failure.
pub fn get_recommendations(
    graph: &MovieGraph,
    title: &str,
    count: usize,
    filter: Option<&MovieFilter>,
) -> Result<Recommendations, GraphError> {
    let query = graph.require_movie(title)?;

    let mut seen: FxHashSet<MovieId> = FxHashSet::default();
    let mut candidates: Vec<MovieId> = Vec::new();
    for &actor in graph.cast(query) {
        for &movie in graph.appearances(actor) {
            if movie != query && seen.insert(movie) {
                candidates.push(movie);
            }
        }
    }

    if candidates.is_empty() {
        return Ok(Recommendations::NoCandidates);
    }

    let mut scored: Vec<(MovieId, f64)> = candidates
        .into_iter()
        .filter(|&movie| graph.admits(movie, filter))
        .map(|movie| (movie, cast_similarity(graph, query, movie)))
        .collect();

    scored.sort_by(|&(movie_a, score_a), &(movie_b, score_b)| {
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| graph.movie_title(movie_a).cmp(graph.movie_title(movie_b)))
    });
    scored.truncate(count);

    match filter {
        None => Ok(Recommendations::Ranked(
            scored
                .into_iter()
                .map(|(movie, score)| (graph.movie_title(movie).to_string(), score))
                .collect(),
        )),
        Some(_) => Ok(Recommendations::Filtered(
            scored
                .into_iter()
                .map(|(movie, score)| {
                    (
                        graph.movie_title(movie).to_string(),
                        ScoredMatch {
                            score,
                            year: graph.movie_year(movie),
                            rating: graph.movie_rating(movie),
                        },
                    )
                })
                .collect(),
        )),
    }
}
