use std::path::PathBuf;

use clap::{Args, Parser};

/// Location and connection files of a map
#[derive(Args, Debug, Clone)]
pub struct DataFiles {
    /// Path to the locations file (`name, x, y` per line)
    #[arg(short, long, value_name = "FILE", default_value = "city_coordinates.txt")]
    pub locations: PathBuf,

    /// Path to the connections file (`name, name` per line)
    #[arg(short, long, value_name = "FILE", default_value = "city_connections.txt")]
    pub connections: PathBuf,
}

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataFiles,

    /// Name of the starting location
    start: String,

    /// Name of the destination
    goal: String,
}

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about = "Interactive route planner", long_about = None)]
struct ReplCli {
    #[command(flatten)]
    data: DataFiles,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub data: DataFiles,
    pub start: String,
    pub goal: String,
}

/// Parses the arguments of the one-shot `route` command
pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        data: cli.data,
        start: cli.start,
        goal: cli.goal,
    }
}

/// Parses the arguments of the interactive front-end
pub fn parse_data_files() -> DataFiles {
    ReplCli::parse().data
}
