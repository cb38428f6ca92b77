use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{node_index, Graph};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    g.num_edges() as f64 / g.num_nodes() as f64
}

/// Number of nodes without any outgoing edge
pub fn isolated_nodes(g: &Graph) -> usize {
    (0..g.num_nodes())
        .filter(|&node| g.neighbors(node_index(node)).is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use crate::{
        edge,
        graph::{node_index, Graph},
        search::dijkstra::Dijkstra,
        statistics::{average_out_degree, isolated_nodes},
    };

    #[test]
    fn stats_work() {
        //      7 -  8 -  9
        //      |         |
        // 0 -  5 -  6 -  |
        // |         |  \ |
        // 1 -  2 -  3 -  4
        let mut g = Graph::with_nodes(10);

        g.add_edges(edge!(0, 1, 1.0));
        g.add_edges(edge!(1, 2, 1.0));
        g.add_edges(edge!(2, 3, 1.0));
        g.add_edges(edge!(3, 4, 20.0));
        g.add_edges(edge!(0, 5, 5.0));
        g.add_edges(edge!(5, 6, 1.0));
        g.add_edges(edge!(6, 4, 20.0));
        g.add_edges(edge!(6, 3, 20.0));
        g.add_edges(edge!(5, 7, 5.0));
        g.add_edges(edge!(7, 8, 1.0));
        g.add_edges(edge!(8, 9, 1.0));
        g.add_edges(edge!(9, 4, 1.0));

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0), node_index(4)).unwrap();

        assert!(d.stats.duration.is_some());
        assert_eq!(d.stats.nodes_settled, 10);
    }

    #[test]
    fn degrees() {
        let mut g = Graph::with_nodes(4);
        g.add_edges(edge!(0, 1, 1.0));
        g.add_edges(edge!(1, 2, 1.0));

        assert_eq!(average_out_degree(&g), 1.0);
        assert_eq!(isolated_nodes(&g), 1);
        assert_eq!(average_out_degree(&Graph::new()), 0.0);
    }
}
