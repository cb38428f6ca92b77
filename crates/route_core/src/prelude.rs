//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::{Error, Result};
pub use crate::graph::{node_index, Edge, Graph, NodeIndex};
pub use crate::locations::{Location, LocationTable};
pub use crate::navigator::{Navigator, Route};
pub use crate::records::{ConnectionRecord, LocationRecord};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;
