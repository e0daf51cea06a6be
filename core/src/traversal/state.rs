use crate::filter::MovieFilter;
use crate::graph::{ActorId, MovieGraph, MovieId};
use std::collections::VecDeque;

pub(crate) const UNREACHED: u32 = u32::MAX;

/// Per-call BFS bookkeeping, index-addressed so the hot loop never hashes.
///
/// The frontier is FIFO and every vertex is enqueued at most once, so each
/// search is bounded by O(vertices + edges) and always terminates.
pub(crate) struct BfsState {
    frontier: VecDeque<ActorId>,
    seen_actors: Vec<bool>,
    seen_movies: Vec<bool>,
    parents: Vec<Option<(ActorId, MovieId)>>,
    distances: Vec<u32>,
}

impl BfsState {
    pub(crate) fn new(graph: &MovieGraph, start: ActorId) -> Self {
        let mut state = Self {
            frontier: VecDeque::new(),
            seen_actors: vec![false; graph.actor_count()],
            seen_movies: vec![false; graph.movie_count()],
            parents: vec![None; graph.actor_count()],
            distances: vec![UNREACHED; graph.actor_count()],
        };
        state.frontier.push_back(start);
        state.seen_actors[start as usize] = true;
        state.distances[start as usize] = 0;
        state
    }

    pub(crate) fn pop(&mut self) -> Option<ActorId> {
        self.frontier.pop_front()
    }

    /// Expand one dequeued actor: walk its movies in ingestion order,
    /// skipping movies the filter rejects, and enqueue unseen co-stars.
    pub(crate) fn expand(
        &mut self,
        graph: &MovieGraph,
        current: ActorId,
        filter: Option<&MovieFilter>,
    ) {
        for &movie in graph.appearances(current) {
            if self.seen_movies[movie as usize] || !graph.admits(movie, filter) {
                continue;
            }
            self.seen_movies[movie as usize] = true;

            for &costar in graph.cast(movie) {
                self.visit_costar(costar, current, movie);
            }
        }
    }

    fn visit_costar(&mut self, costar: ActorId, current: ActorId, via: MovieId) {
        if !self.seen_actors[costar as usize] {
            self.seen_actors[costar as usize] = true;
            self.parents[costar as usize] = Some((current, via));
            self.distances[costar as usize] = self.distances[current as usize] + 1;
            self.frontier.push_back(costar);
        }
    }

    /// Walk the parent chain back from `target`, yielding each actor on the
    /// route together with the movie it was reached through.
    pub(crate) fn trail_to(
        &self,
        start: ActorId,
        target: ActorId,
    ) -> Vec<(ActorId, Option<MovieId>)> {
        let mut trail = Vec::new();
        let mut current = target;

        while current != start {
            if let Some((parent, via)) = self.parents[current as usize] {
                trail.push((current, Some(via)));
                current = parent;
            } else {
                break;
            }
        }

        trail.push((start, None));
        trail.reverse();
        trail
    }

    pub(crate) fn into_distances(self) -> Vec<u32> {
        self.distances
    }
}
