//! Interactive route planner
use std::path::PathBuf;

use anyhow::Context as _;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    error::Error,
    graph::node_index,
    navigator::Navigator,
    search::dijkstra::Dijkstra,
    statistics::{average_out_degree, isolated_nodes},
    util::cli,
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(graph_info(&context.nav)))
}

fn graph_info(nav: &Navigator) -> String {
    let g = nav.graph();
    format!(
        "Map has {} locations and {} connections (avg. degree {:.2}, {} isolated)",
        g.num_nodes(),
        g.num_edges() / 2,
        average_out_degree(g),
        isolated_nodes(g)
    )
}

/// List all locations
fn cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(list_locations(&context.nav)))
}

fn list_locations(nav: &Navigator) -> String {
    nav.locations()
        .locations()
        .map(|location| location.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = args.get_one::<String>("start").map_or("", String::as_str);
    let goal = args.get_one::<String>("goal").map_or("", String::as_str);

    Ok(Some(route_message(&context.nav, start, goal)))
}

/// Answer for a single query. Unknown names are reported so the user can
/// enter them again.
fn route_message(nav: &Navigator, start: &str, goal: &str) -> String {
    match nav.route(start, goal) {
        Ok(Some(route)) => route.to_string(),
        Ok(None) => "No path could be found".to_string(),
        Err(Error::UnknownLocation(name)) => format!(
            "City named '{}' not found. Please enter a valid city name.",
            name
        ),
        Err(e) => format!("Search failed: {}", e),
    }
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    Ok(Some(measure(&context.nav, n)))
}

/// Runs `n` queries between random locations and reports their durations
fn measure(nav: &Navigator, n: usize) -> String {
    use rand::Rng;

    if nav.locations().is_empty() {
        return "Map has no locations".to_string();
    }
    let g = nav.graph();

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<_> = (0..n)
        .map(|_| {
            (
                node_index(rng.gen_range(0..g.num_nodes())),
                node_index(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect();

    let mut res = String::new();
    for (src, dst) in pairs {
        let mut dijkstra = Dijkstra::new(g);
        match dijkstra.search(src, dst) {
            Ok(Some(sp)) => res.push_str(&format!(
                "{} -> {}: {:.2} in {:?}\n",
                nav.locations().name(src),
                nav.locations().name(dst),
                sp.weight,
                dijkstra.stats.duration.unwrap_or_default()
            )),
            Ok(None) => res.push_str(&format!(
                "{} -> {}: unreachable\n",
                nav.locations().name(src),
                nav.locations().name(dst)
            )),
            Err(e) => res.push_str(&format!("Search failed: {}\n", e)),
        }
    }

    res
}

struct Context {
    nav: Navigator,
}

impl Context {
    fn new(nav: Navigator) -> Self {
        Self { nav }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init map
    let files = cli::parse_data_files();
    let nav = Navigator::from_csv(&files.locations, &files.connections).with_context(|| {
        format!(
            "Failed to load map from {} and {}",
            files.locations.display(),
            files.connections.display()
        )
    })?;
    let context = Context::new(nav);

    let mut repl = Repl::new(context)
        .with_name("Navigator")
        .with_version("v0.1.0")
        .with_description("Find the shortest route between two cities")
        .with_banner("Welcome to Navigator")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print map info"), info)
        .with_command(Command::new("cities").about("List all cities"), cities)
        .with_command(
            Command::new("route")
                .arg(Arg::new("start").required(true).help("Starting city"))
                .arg(Arg::new("goal").required(true).help("Destination city"))
                .about("Calculate the shortest route between two cities"),
            run_route,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random shortest path calculations"),
            measure_dijkstra,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{}", e))
}
