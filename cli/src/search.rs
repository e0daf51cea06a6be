use crate::string_normalization::clean_str;
use anyhow::{Result, anyhow};
use baconpath_core::MovieGraph;
use rustc_hash::FxHashMap;

/// Normalized name lookup so queries are accent- and case-insensitive.
///
/// Maps each cleaned form to every canonical name sharing it; exact
/// (case-insensitive) matches win over loose ones.
pub struct NameLookup {
    actors: FxHashMap<String, Vec<String>>,
    movies: FxHashMap<String, Vec<String>>,
}

impl NameLookup {
    pub fn build(graph: &MovieGraph) -> Self {
        let mut actors: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for actor in graph.actor_ids() {
            let name = graph.actor_name(actor);
            actors
                .entry(clean_str(name))
                .or_default()
                .push(name.to_string());
        }

        let mut movies: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for movie in graph.movie_ids() {
            let title = graph.movie_title(movie);
            movies
                .entry(clean_str(title))
                .or_default()
                .push(title.to_string());
        }

        Self { actors, movies }
    }

    pub fn best_actor_match(&self, query: &str) -> Result<&str> {
        best_match(&self.actors, query)
            .ok_or_else(|| anyhow!("Actor '{}' not found in dataset", query))
    }

    pub fn best_movie_match(&self, query: &str) -> Result<&str> {
        best_match(&self.movies, query)
            .ok_or_else(|| anyhow!("Movie '{}' not found in dataset", query))
    }
}

fn best_match<'a>(lookup: &'a FxHashMap<String, Vec<String>>, query: &str) -> Option<&'a str> {
    let candidates = lookup.get(&clean_str(query))?;
    if candidates.is_empty() {
        return None;
    }

    // Multiple names can share a cleaned form - prefer the exact one
    let lowercase_query = query.to_lowercase();
    candidates
        .iter()
        .find(|name| name.to_lowercase() == lowercase_query)
        .or_else(|| candidates.first())
        .map(String::as_str)
}
