pub mod common;
pub mod pathfinding;

pub use common::{GraphView, NodeId};
pub use pathfinding::{bfs, shortest_path_tree, PathResult, ShortestPathTree};
