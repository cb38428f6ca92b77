use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::{
    graph::node_index, search::dijkstra::Dijkstra, util::test_graphs::generate_random_navigator,
};

criterion_group!(benches, random_queries, by_map_size);
criterion_main!(benches);

pub fn random_queries(c: &mut Criterion) {
    let nav = generate_random_navigator(1_000, 3_000, 42);
    let g = nav.graph();

    let mut rng = StdRng::seed_from_u64(7);
    let queries: Vec<_> = (0..100)
        .map(|_| {
            (
                node_index(rng.gen_range(0..g.num_nodes())),
                node_index(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_random_map", "1000_locations"),
        &queries,
        |b, queries| {
            b.iter(|| {
                for &(s, t) in queries {
                    let mut dijkstra = Dijkstra::new(g);
                    black_box(dijkstra.search(s, t).unwrap());
                }
            })
        },
    );
}

fn by_map_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_by_map_size");
    for size in [10, 100, 1_000, 10_000].iter() {
        let nav = generate_random_navigator(*size, size * 3, 42);
        let goal = format!("L{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &nav, |b, nav| {
            b.iter(|| black_box(nav.route("L0", &goal).unwrap()));
        });
    }
    group.finish();
}
