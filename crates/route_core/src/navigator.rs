use std::{fmt, path::Path};

use log::info;

use crate::constants::Weight;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::locations::LocationTable;
use crate::records::{self, ConnectionRecord, LocationRecord};
use crate::search::{dijkstra::Dijkstra, shortest_path::ShortestPath};

/// A shortest route between two named locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Location names from start to goal
    pub names: Vec<String>,
    pub distance: Weight,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Distance: {:.2}. Path: {}",
            self.distance,
            self.names.join(" -> ")
        )
    }
}

/// Location table and graph of one map. Built once, then only queried.
#[derive(Debug, Clone)]
pub struct Navigator {
    locations: LocationTable,
    graph: Graph,
}

impl Navigator {
    pub fn from_records(
        locations: &[LocationRecord],
        connections: &[ConnectionRecord],
    ) -> Result<Self> {
        let mut table = LocationTable::with_capacity(locations.len());
        for LocationRecord { name, x, y } in locations {
            table.add_location(name, *x, *y)?;
        }

        let graph = Graph::from_records(&table, connections)?;

        Ok(Navigator {
            locations: table,
            graph,
        })
    }

    /// Reads the locations and connections files, see [`records`] for the
    /// format.
    pub fn from_csv(path_to_locations: &Path, path_to_connections: &Path) -> Result<Self> {
        let locations = records::locations_from_path(path_to_locations)?;
        let connections = records::connections_from_path(path_to_connections)?;

        Self::from_records(&locations, &connections)
    }

    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Looks up a location by name, failing with [`Error::UnknownLocation`].
    pub fn resolve(&self, name: &str) -> Result<NodeIndex> {
        self.locations
            .index_of(name)
            .ok_or_else(|| Error::UnknownLocation(name.trim().to_string()))
    }

    pub fn shortest_path(
        &self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<ShortestPath>> {
        Dijkstra::new(&self.graph).search(source, target)
    }

    /// Shortest route from `start` to `goal`.
    ///
    /// Returns `Ok(None)` if both locations exist but are not connected.
    pub fn route(&self, start: &str, goal: &str) -> Result<Option<Route>> {
        let source = self.resolve(start)?;
        let target = self.resolve(goal)?;

        let route = self.shortest_path(source, target)?.map(|sp| Route {
            names: sp
                .nodes
                .iter()
                .map(|&node_idx| self.locations.name(node_idx).to_string())
                .collect(),
            distance: sp.weight,
        });

        match &route {
            Some(route) => info!("{}", route),
            None => info!(
                "No route between {} and {}",
                self.locations.name(source),
                self.locations.name(target)
            ),
        }

        Ok(route)
    }
}
