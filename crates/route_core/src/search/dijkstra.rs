use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::Result;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

#[derive(Debug)]
pub struct Candidate {
    pub node_idx: NodeIndex,
    pub weight: Weight,
}

impl Candidate {
    pub fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed, so the candidate with the lowest weight is on top of the heap
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// How a node was reached during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predecessor {
    /// The node the search started from
    Start,
    /// Never reached
    Unvisited,
    /// Reached over an edge from this node
    Node(NodeIndex),
}

/// Distances and predecessors of every node after a single search. Each call
/// to [`Dijkstra::run`] creates a new result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub source: NodeIndex,
    pub target: NodeIndex,
    distances: Vec<Weight>,
    predecessors: Vec<Predecessor>,
}

impl SearchResult {
    fn new(num_nodes: usize, source: NodeIndex, target: NodeIndex) -> Self {
        let mut distances = vec![Weight::INFINITY; num_nodes];
        let mut predecessors = vec![Predecessor::Unvisited; num_nodes];
        distances[source.index()] = 0.0;
        predecessors[source.index()] = Predecessor::Start;

        SearchResult {
            source,
            target,
            distances,
            predecessors,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        source: NodeIndex,
        target: NodeIndex,
        distances: Vec<Weight>,
        predecessors: Vec<Predecessor>,
    ) -> Self {
        SearchResult {
            source,
            target,
            distances,
            predecessors,
        }
    }

    /// Best known distance from the source, `INFINITY` if `node_idx` was not
    /// reached. Only the distance of the target is guaranteed to be final.
    pub fn distance(&self, node_idx: NodeIndex) -> Weight {
        self.distances[node_idx.index()]
    }

    pub fn predecessor(&self, node_idx: NodeIndex) -> Predecessor {
        self.predecessors[node_idx.index()]
    }

    /// Distance to the target or `None` if it cannot be reached
    pub fn target_distance(&self) -> Option<Weight> {
        match self.predecessor(self.target) {
            Predecessor::Unvisited => None,
            _ => Some(self.distance(self.target)),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }
}

/// Dijkstra search from one source to one target.
///
/// The graph is only borrowed, every search builds its own [`SearchResult`],
/// so any number of searches may run on the same graph. `stats` is
/// overwritten by each search, so concurrent searches each need their own
/// `Dijkstra`.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes distances and predecessors until `target` is settled or every
    /// reachable node has been settled.
    ///
    /// **Panics** if `source` or `target` is not a node of the graph
    pub fn run(&mut self, source: NodeIndex, target: NodeIndex) -> SearchResult {
        let num_nodes = self.g.num_nodes();
        assert!(
            source.index() < num_nodes,
            "Source node index ({}) does not exist",
            source.index()
        );
        assert!(
            target.index() < num_nodes,
            "Target node index ({}) does not exist",
            target.index()
        );

        self.stats.init();
        let mut result = SearchResult::new(num_nodes, source, target);

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return result;
        }

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Stale entry, a shorter distance was found after it was queued
            if weight > result.distances[node_idx.index()] {
                continue;
            }

            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for edge in self.g.neighbors(node_idx) {
                let new_distance = weight + edge.weight;
                let target_idx = edge.target.index();
                if new_distance < result.distances[target_idx] {
                    result.distances[target_idx] = new_distance;
                    result.predecessors[target_idx] = Predecessor::Node(node_idx);
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        result
    }

    /// Shortest path from `source` to `target`, `None` if the target cannot be
    /// reached.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<Option<ShortestPath>> {
        let result = self.run(source, target);

        let sp = super::reconstruct_path(source, target, &result)?
            .map(|nodes| ShortestPath::new(nodes, result.distance(target)));

        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        Ok(sp)
    }
}
