use crate::error::GraphError;
use crate::filter::MovieFilter;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub type ActorId = u32;
pub type MovieId = u32;

/// One row handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRecord {
    pub actor: String,
    pub movie: String,
    pub year: i32,
    pub rating: f32,
}

impl CastRecord {
    pub fn new(actor: impl Into<String>, movie: impl Into<String>, year: i32, rating: f32) -> Self {
        Self {
            actor: actor.into(),
            movie: movie.into(),
            year,
            rating,
        }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.actor.trim().is_empty() {
            return Err(GraphError::MalformedRecord("actor"));
        }
        if self.movie.trim().is_empty() {
            return Err(GraphError::MalformedRecord("movie"));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct ActorVertex {
    name: String,
    movies: Vec<MovieId>,
}

#[derive(Debug)]
struct MovieVertex {
    title: String,
    year: i32,
    rating: f32,
    cast: Vec<ActorId>,
}

/// Bipartite actor-movie graph, built once and read-only afterwards.
///
/// Vertices live in index-addressed arenas; the name-to-index maps are only
/// consulted at the query boundary, so traversal itself never hashes.
/// Adjacency keeps ingestion insertion order, which makes BFS exploration
/// order (and therefore tie-breaking between equally short paths)
/// deterministic for a fixed dataset. Every actor-movie edge is mutual, and
/// paths always alternate actor/movie/actor. The absence of any mutation API
/// after `from_records` is what makes concurrent reads safe without locking.
#[derive(Debug, Default)]
pub struct MovieGraph {
    actors: Vec<ActorVertex>,
    movies: Vec<MovieVertex>,
    actor_lookup: FxHashMap<String, ActorId>,
    movie_lookup: FxHashMap<String, MovieId>,
    skipped_records: usize,
}

impl MovieGraph {
    /// Build the graph from ingestion records in one pass.
    ///
    /// Rows without an actor or movie identity are skipped and counted, see
    /// [`MovieGraph::skipped_records`]. A movie's year and rating are fixed
    /// the first time the movie is seen; conflicting later values are
    /// ignored. Duplicate actor-movie rows insert a single edge.
    pub fn from_records(records: impl IntoIterator<Item = CastRecord>) -> Self {
        let mut graph = Self::default();
        let mut edges: FxHashSet<(ActorId, MovieId)> = FxHashSet::default();

        for record in records {
            if record.validate().is_err() {
                graph.skipped_records += 1;
                continue;
            }

            let actor = graph.intern_actor(&record.actor);
            let movie = graph.intern_movie(&record.movie, record.year, record.rating);

            if edges.insert((actor, movie)) {
                graph.actors[actor as usize].movies.push(movie);
                graph.movies[movie as usize].cast.push(actor);
            }
        }

        debug!(
            actors = graph.actors.len(),
            movies = graph.movies.len(),
            skipped = graph.skipped_records,
            "graph built"
        );
        graph
    }

    fn intern_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_lookup.get(name) {
            return id;
        }
        let id = self.actors.len() as ActorId;
        self.actors.push(ActorVertex {
            name: name.to_string(),
            movies: Vec::new(),
        });
        self.actor_lookup.insert(name.to_string(), id);
        id
    }

    fn intern_movie(&mut self, title: &str, year: i32, rating: f32) -> MovieId {
        if let Some(&id) = self.movie_lookup.get(title) {
            return id;
        }
        let id = self.movies.len() as MovieId;
        self.movies.push(MovieVertex {
            title: title.to_string(),
            year,
            rating,
            cast: Vec::new(),
        });
        self.movie_lookup.insert(title.to_string(), id);
        id
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// How many ingestion rows were dropped as malformed.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actor_lookup.get(name).copied()
    }

    pub fn movie_id(&self, title: &str) -> Option<MovieId> {
        self.movie_lookup.get(title).copied()
    }

    pub fn require_actor(&self, name: &str) -> Result<ActorId, GraphError> {
        self.actor_id(name)
            .ok_or_else(|| GraphError::UnknownActor(name.to_string()))
    }

    pub fn require_movie(&self, title: &str) -> Result<MovieId, GraphError> {
        self.movie_id(title)
            .ok_or_else(|| GraphError::UnknownMovie(title.to_string()))
    }

    pub fn actor_name(&self, actor: ActorId) -> &str {
        &self.actors[actor as usize].name
    }

    pub fn movie_title(&self, movie: MovieId) -> &str {
        &self.movies[movie as usize].title
    }

    pub fn movie_year(&self, movie: MovieId) -> i32 {
        self.movies[movie as usize].year
    }

    pub fn movie_rating(&self, movie: MovieId) -> f32 {
        self.movies[movie as usize].rating
    }

    /// The movies an actor appears in, in ingestion order.
    pub fn appearances(&self, actor: ActorId) -> &[MovieId] {
        &self.actors[actor as usize].movies
    }

    /// A movie's cast, in ingestion order.
    pub fn cast(&self, movie: MovieId) -> &[ActorId] {
        &self.movies[movie as usize].cast
    }

    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        0..self.actors.len() as ActorId
    }

    pub fn movie_ids(&self) -> impl Iterator<Item = MovieId> + '_ {
        0..self.movies.len() as MovieId
    }

    /// Whether a movie passes the filter; no filter admits everything.
    pub fn admits(&self, movie: MovieId, filter: Option<&MovieFilter>) -> bool {
        filter.is_none_or(|f| {
            let vertex = &self.movies[movie as usize];
            f.admits(vertex.year, vertex.rating)
        })
    }

    /// The movies featuring both actors, in `a`'s ingestion order,
    /// restricted to those the filter admits.
    pub fn connecting_movies(
        &self,
        a: ActorId,
        b: ActorId,
        filter: Option<&MovieFilter>,
    ) -> Vec<MovieId> {
        let b_movies: FxHashSet<MovieId> = self.appearances(b).iter().copied().collect();
        self.appearances(a)
            .iter()
            .copied()
            .filter(|&movie| b_movies.contains(&movie) && self.admits(movie, filter))
            .collect()
    }
}
