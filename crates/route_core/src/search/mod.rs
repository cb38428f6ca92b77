use crate::error::{Error, Result};
use crate::graph::NodeIndex;

use self::dijkstra::{Predecessor, SearchResult};

pub mod dijkstra;
pub mod shortest_path;

/// Follows the predecessors of `result` from `target` back to `source`.
///
/// Returns the nodes ordered from `source` to `target`, or `None` if the target
/// was never reached. A chain that does not arrive at `source` within as many
/// steps as there are nodes is reported as
/// [`Error::BrokenPredecessorChain`].
pub fn reconstruct_path(
    source: NodeIndex,
    target: NodeIndex,
    result: &SearchResult,
) -> Result<Option<Vec<NodeIndex>>> {
    if result.predecessor(target) == Predecessor::Unvisited {
        return Ok(None);
    }

    let broken = || Error::BrokenPredecessorChain {
        start: source,
        goal: target,
        steps: result.num_nodes(),
    };

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = match result.predecessor(current) {
            Predecessor::Node(prev) => prev,
            Predecessor::Start | Predecessor::Unvisited => return Err(broken()),
        };
        // A simple path never visits more nodes than the graph has
        if path.len() == result.num_nodes() {
            return Err(broken());
        }
        path.push(current);
    }
    path.reverse();

    Ok(Some(path))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<shortest_path::ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Option<shortest_path::ShortestPath>,
) {
    let path = path.expect("Expected a path");
    let nodes: Vec<usize> = path.nodes.iter().map(|n| n.index()).collect();
    assert_eq!(expected_path, nodes);
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
}
