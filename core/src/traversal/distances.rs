use super::state::BfsState;
pub(crate) use super::state::UNREACHED;
use crate::error::GraphError;
use crate::filter::MovieFilter;
use crate::graph::{ActorId, MovieGraph};
use rustc_hash::FxHashMap;

/// Single-source hop distances to every reachable actor.
///
/// The source itself is excluded, and unreachable actors are simply absent
/// from the map. One traversal serves all targets, which is what the batch
/// averaging in [`crate::ranking`] relies on.
pub fn shortest_distance_all(
    graph: &MovieGraph,
    from: &str,
    filter: Option<&MovieFilter>,
) -> Result<FxHashMap<ActorId, u32>, GraphError> {
    let source = graph.require_actor(from)?;
    let hops = hop_distances(graph, source, filter);

    Ok(hops
        .iter()
        .enumerate()
        .filter(|&(actor, &distance)| actor as ActorId != source && distance != UNREACHED)
        .map(|(actor, &distance)| (actor as ActorId, distance))
        .collect())
}

/// Dense distance array indexed by actor; `UNREACHED` marks actors with no
/// route from `source` under the filter.
pub(crate) fn hop_distances(
    graph: &MovieGraph,
    source: ActorId,
    filter: Option<&MovieFilter>,
) -> Vec<u32> {
    let mut state = BfsState::new(graph, source);
    while let Some(current) = state.pop() {
        state.expand(graph, current, filter);
    }
    state.into_distances()
}
