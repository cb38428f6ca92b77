use anyhow::Context;
use route_core::{error::Error, navigator::Navigator, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let nav = Navigator::from_csv(&cfg.data.locations, &cfg.data.connections).with_context(|| {
        format!(
            "Failed to load map from {} and {}",
            cfg.data.locations.display(),
            cfg.data.connections.display()
        )
    })?;

    match nav.route(&cfg.start, &cfg.goal) {
        Ok(Some(route)) => println!("{}", route),
        Ok(None) => println!("No path could be found"),
        Err(Error::UnknownLocation(name)) => {
            eprintln!("City named '{}' not found. Please enter a valid city name.", name);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
