pub mod algo;
pub mod bfs;
pub mod error;
pub mod graph;
pub mod path;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod utils;

pub use algo::shortest_shortest_path;
pub use bfs::{bfs_path, depths};
pub use error::GraphError;
pub use graph::{Edge, Graph, WeightedGraph};
pub use path::{path_string, reconstruct_path};
pub use utils::{HopDistances, ParentMap, PathCost};
