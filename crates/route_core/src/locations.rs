use std::{fmt, ops::Index};

use rustc_hash::FxHashMap;

use crate::constants::Coord;
use crate::error::{Error, Result};
use crate::graph::NodeIndex;

/// A named point on the map plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub x: Coord,
    pub y: Coord,
}

impl Location {
    pub fn new(name: impl Into<String>, x: Coord, y: Coord) -> Self {
        Location {
            name: name.into(),
            x,
            y,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.x, self.y)
    }
}

/// Holds all locations of a map. The position of a location in the table is
/// its [`NodeIndex`] in the [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    locations: Vec<Location>,
    index: FxHashMap<String, NodeIndex>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_locations: usize) -> Self {
        LocationTable {
            locations: Vec::with_capacity(num_locations),
            index: FxHashMap::with_capacity_and_hasher(num_locations, Default::default()),
        }
    }

    /// Adds a new location. The name is trimmed before it is stored.
    ///
    /// Returns [`Error::DuplicateLocation`] if a location with the same name
    /// already exists, the table is left unchanged in that case.
    pub fn add_location(&mut self, name: &str, x: Coord, y: Coord) -> Result<NodeIndex> {
        let name = name.trim();
        if self.index.contains_key(name) {
            return Err(Error::DuplicateLocation {
                name: name.to_string(),
            });
        }

        let node_idx = NodeIndex::new(self.locations.len());
        self.index.insert(name.to_string(), node_idx);
        self.locations.push(Location::new(name, x, y));

        Ok(node_idx)
    }

    /// Exact, case sensitive lookup of a (trimmed) name.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name.trim()).copied()
    }

    pub fn count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location(&self, node_idx: NodeIndex) -> Option<&Location> {
        self.locations.get(node_idx.index())
    }

    /// **Panics** if `node_idx` is not part of the table
    pub fn name(&self, node_idx: NodeIndex) -> &str {
        &self[node_idx].name
    }

    /// Returns an iterator over all locations in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}

impl Index<NodeIndex> for LocationTable {
    type Output = Location;

    /// **Panics** if `node_idx` is not part of the table
    fn index(&self, node_idx: NodeIndex) -> &Location {
        &self.locations[node_idx.index()]
    }
}
