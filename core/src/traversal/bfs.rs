use super::state::BfsState;
use crate::error::GraphError;
use crate::filter::MovieFilter;
use crate::graph::{ActorId, MovieGraph, MovieId};
use serde::Serialize;

/// A vertex on a route, tagged for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum PathVertex {
    Actor(String),
    Movie(String),
}

/// The movies connecting one consecutive actor pair on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLink {
    pub from: String,
    pub to: String,
    pub movies: Vec<String>,
}

/// A shortest alternating actor/movie route between two actors.
///
/// `hops` counts actor-to-actor steps: two co-stars are one hop apart.
/// `links` carries, for every consecutive actor pair, all movies that
/// connect the pair under the active filter, not just the one the search
/// happened to walk through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorPath {
    pub vertices: Vec<PathVertex>,
    pub hops: usize,
    pub links: Vec<PathLink>,
}

/// Find a shortest route between two actors.
///
/// `Ok(None)` means no route exists under the given filter — a normal
/// outcome, distinct from naming an actor that is not in the graph. Among
/// equally short routes the one discovered first wins; exploration follows
/// ingestion insertion order, so the result is deterministic for a fixed
/// dataset.
pub fn shortest_path(
    graph: &MovieGraph,
    from: &str,
    to: &str,
    filter: Option<&MovieFilter>,
) -> Result<Option<ActorPath>, GraphError> {
    let start = graph.require_actor(from)?;
    let target = graph.require_actor(to)?;

    let mut state = BfsState::new(graph, start);
    while let Some(current) = state.pop() {
        if current == target {
            let trail = state.trail_to(start, target);
            return Ok(Some(assemble_path(graph, &trail, filter)));
        }
        state.expand(graph, current, filter);
    }

    Ok(None)
}

fn assemble_path(
    graph: &MovieGraph,
    trail: &[(ActorId, Option<MovieId>)],
    filter: Option<&MovieFilter>,
) -> ActorPath {
    let mut vertices = Vec::with_capacity(trail.len() * 2 - 1);
    let mut links = Vec::with_capacity(trail.len() - 1);

    for (step, &(actor, via)) in trail.iter().enumerate() {
        if let Some(movie) = via {
            vertices.push(PathVertex::Movie(graph.movie_title(movie).to_string()));
        }
        vertices.push(PathVertex::Actor(graph.actor_name(actor).to_string()));

        if step > 0 {
            let (previous, _) = trail[step - 1];
            links.push(PathLink {
                from: graph.actor_name(previous).to_string(),
                to: graph.actor_name(actor).to_string(),
                movies: graph
                    .connecting_movies(previous, actor, filter)
                    .into_iter()
                    .map(|movie| graph.movie_title(movie).to_string())
                    .collect(),
            });
        }
    }

    ActorPath {
        vertices,
        hops: trail.len() - 1,
        links,
    }
}
