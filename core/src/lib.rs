pub mod error;
pub mod filter;
pub mod graph;
pub mod ranking;
pub mod similarity;
pub mod traversal;

// Re-export commonly used items
pub use error::GraphError;
pub use filter::MovieFilter;
pub use graph::{ActorId, CastRecord, MovieGraph, MovieId};
pub use ranking::{ActorScore, RankingConfig, ScoreBoard, Standing, compute_average_scores};
pub use similarity::{Recommendations, ScoredMatch, cast_similarity, get_recommendations};
pub use traversal::{ActorPath, PathLink, PathVertex, shortest_distance_all, shortest_path};
