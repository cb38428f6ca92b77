use crate::constants::Weight;
use crate::error::{Error, Result};
use crate::locations::LocationTable;
use crate::records::ConnectionRecord;
use crate::util::math::euclidean;
use log::{info, warn};
use std::fmt;

/// Default integer type for node indices
pub type DefaultIdx = u32;

/// Node identifier. Equal to the position of the location in the
/// [`LocationTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        assert!(
            x < DefaultIdx::MAX as usize,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Directed, weighted edge. Undirected connections are stored as two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Adjacency list of the location graph.
///
/// Edges are kept in insertion order and never deduplicated, the same pair of
/// nodes may be connected more than once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges_out: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            edges_out: vec![Vec::new(); num_nodes],
            num_edges: 0,
        }
    }

    /// Adds a new node without edges to the graph
    pub fn add_node(&mut self) -> NodeIndex {
        let node_idx = NodeIndex::new(self.edges_out.len());
        self.edges_out.push(Vec::new());
        node_idx
    }

    /// Add a new directed `edge` to the graph.
    ///
    /// **Panics** if the source or target node does not exist
    /// **Panics** if the weight is negative or NaN
    pub fn add_edge(&mut self, edge: Edge) {
        assert!(
            edge.source.index() < self.edges_out.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.edges_out.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.weight >= 0.0,
            "Edge weight must be non-negative, got {}",
            edge.weight
        );

        self.edges_out[edge.source.index()].push(edge);
        self.num_edges += 1;
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Adds the edge `a -> b` and its reverse `b -> a` with the same weight.
    pub fn add_connection(&mut self, a: NodeIndex, b: NodeIndex, weight: Weight) {
        let edge = Edge::new(a, b, weight);
        self.add_edge(edge);
        self.add_edge(edge.reverse());
    }

    /// Builds the graph for all locations of `table`. Every connection record
    /// is resolved by name and weighted by the distance between the two
    /// locations.
    ///
    /// Fails with [`Error::DanglingConnection`] if a record names a location
    /// that is not part of the table.
    pub fn from_records(table: &LocationTable, connections: &[ConnectionRecord]) -> Result<Self> {
        let mut g = Graph::with_nodes(table.count());

        for ConnectionRecord { from, to } in connections {
            let resolve = |name: &str| {
                table
                    .index_of(name)
                    .ok_or_else(|| Error::DanglingConnection {
                        from: from.clone(),
                        to: to.clone(),
                        missing: name.to_string(),
                    })
            };
            let a = resolve(from.as_str())?;
            let b = resolve(to.as_str())?;

            if a == b {
                warn!("Connection {} <-> {} is a self-loop", from, to);
            }

            g.add_connection(a, b, euclidean(&table[a], &table[b]));
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Returns the outgoing edges of `node_idx` in insertion order. Nodes
    /// without connections (or unknown nodes) have no neighbors.
    pub fn neighbors(&self, node_idx: NodeIndex) -> &[Edge] {
        self.edges_out
            .get(node_idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns an iterator over all directed edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges_out.iter().flatten()
    }

    pub fn num_nodes(&self) -> usize {
        self.edges_out.len()
    }

    /// Number of directed edges, twice the number of connections
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns edge in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}
