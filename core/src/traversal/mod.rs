mod state;

pub mod bfs;
pub mod distances;

// Re-export the public functions
pub use bfs::{ActorPath, PathLink, PathVertex, shortest_path};
pub use distances::shortest_distance_all;
