use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    edge,
    graph::Graph,
    locations::LocationTable,
    navigator::Navigator,
    records::{ConnectionRecord, LocationRecord},
};

/// A(0,0), B(3,0), C(3,4) and the isolated D(10,10)
pub fn triangle_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord::new("A", 0, 0),
        LocationRecord::new("B", 3, 0),
        LocationRecord::new("C", 3, 4),
        LocationRecord::new("D", 10, 10),
    ]
}

/// A - B - C
pub fn triangle_connections() -> Vec<ConnectionRecord> {
    vec![
        ConnectionRecord::new("A", "B"),
        ConnectionRecord::new("B", "C"),
    ]
}

pub fn triangle_table() -> LocationTable {
    let mut table = LocationTable::new();
    for LocationRecord { name, x, y } in triangle_locations() {
        table
            .add_location(&name, x, y)
            .expect("triangle locations are unique");
    }
    table
}

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::with_nodes(11);

    let [a, b, c, d, e, f, g, h, i, j, k]: [u32; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    graph.add_edges(edge!(a, b, 3.0)); // A <=> B
    graph.add_edges(edge!(a, c, 5.0)); // A <=> C
    graph.add_edges(edge!(a, k, 3.0)); // A <=> K

    graph.add_edges(edge!(b, d, 5.0)); // B <=> D
    graph.add_edges(edge!(b, c, 3.0)); // B <=> C

    graph.add_edges(edge!(c, d, 2.0)); // C <=> D
    graph.add_edges(edge!(c, j, 2.0)); // C <=> J

    graph.add_edges(edge!(d, j, 4.0)); // D <=> J
    graph.add_edges(edge!(d, e, 7.0)); // D <=> E

    graph.add_edges(edge!(e, j, 3.0)); // E <=> J
    graph.add_edges(edge!(e, f, 6.0)); // E <=> F

    graph.add_edges(edge!(f, h, 2.0)); // F <=> H
    graph.add_edges(edge!(f, g, 4.0)); // F <=> G

    graph.add_edges(edge!(g, h, 3.0)); // G <=> H
    graph.add_edges(edge!(g, i, 5.0)); // G <=> I

    graph.add_edges(edge!(h, i, 3.0)); // H <=> I
    graph.add_edges(edge!(h, j, 2.0)); // H <=> J

    graph.add_edges(edge!(i, j, 4.0)); // I <=> J
    graph.add_edges(edge!(i, k, 6.0)); // I <=> K

    graph.add_edges(edge!(j, k, 3.0)); // J <=> K

    graph
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = Graph::with_nodes(5);

    let [a, b, c, d, e]: [u32; 5] = [0, 1, 2, 3, 4];

    g.add_edge(edge!(a => c, 1.0));
    g.add_edge(edge!(a => d, 1.0));
    g.add_edge(edge!(e => a, 1.0));
    g.add_edges(edge!(c, b, 1.0));
    g.add_edges(edge!(c, d, 1.0));

    g
}

/// Random map with `num_locations` locations named `L0`, `L1`, ... on a
/// 1000x1000 plane. Every location is connected to its predecessor, the
/// remaining connections are random.
pub fn generate_random_navigator(
    num_locations: usize,
    num_connections: usize,
    seed: u64,
) -> Navigator {
    let mut rng = StdRng::seed_from_u64(seed);

    let locations: Vec<_> = (0..num_locations)
        .map(|i| {
            LocationRecord::new(
                format!("L{}", i),
                rng.gen_range(0..1000),
                rng.gen_range(0..1000),
            )
        })
        .collect();

    let mut connections: Vec<_> = (1..num_locations)
        .map(|i| ConnectionRecord::new(format!("L{}", i - 1), format!("L{}", i)))
        .collect();
    if num_locations > 0 {
        for _ in connections.len()..num_connections {
            let a = rng.gen_range(0..num_locations);
            let b = rng.gen_range(0..num_locations);
            connections.push(ConnectionRecord::new(format!("L{}", a), format!("L{}", b)));
        }
    }

    Navigator::from_records(&locations, &connections).expect("generated names are unique")
}
