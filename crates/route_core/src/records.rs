//! Raw location and connection records as read from disk.
//!
//! Both record files are plain comma separated lists without a header line:
//! ```text
//! Ankara, 1210, 560
//! Izmir, 120, 480
//! ```
//! and
//! ```text
//! Ankara, Izmir
//! ```
//! Fields are trimmed and empty lines are skipped.
use std::{io, path::Path};

use log::info;
use serde::Deserialize;

use crate::constants::Coord;
use crate::error::Result;

/// A named point, one line of the locations file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub x: Coord,
    pub y: Coord,
}

impl LocationRecord {
    pub fn new(name: impl Into<String>, x: Coord, y: Coord) -> Self {
        LocationRecord {
            name: name.into(),
            x,
            y,
        }
    }
}

/// An undirected connection between two named locations. The distance is
/// derived from the coordinates when the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
}

impl ConnectionRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        ConnectionRecord {
            from: from.into(),
            to: to.into(),
        }
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).trim(csv::Trim::All);
    builder
}

fn read_records<R, T>(reader: R) -> Result<Vec<T>>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    for result in reader_builder().from_reader(reader).deserialize() {
        records.push(result?);
    }
    Ok(records)
}

pub fn read_locations<R: io::Read>(reader: R) -> Result<Vec<LocationRecord>> {
    read_records(reader)
}

pub fn read_connections<R: io::Read>(reader: R) -> Result<Vec<ConnectionRecord>> {
    read_records(reader)
}

pub fn locations_from_path(path: &Path) -> Result<Vec<LocationRecord>> {
    let records: Vec<LocationRecord> = read_records(csv_file(path)?)?;
    info!("Read {} locations from {}", records.len(), path.display());
    Ok(records)
}

pub fn connections_from_path(path: &Path) -> Result<Vec<ConnectionRecord>> {
    let records: Vec<ConnectionRecord> = read_records(csv_file(path)?)?;
    info!("Read {} connections from {}", records.len(), path.display());
    Ok(records)
}

fn csv_file(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| csv::Error::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_trimmed_locations() {
        let input = "Ankara, 1210, 560\n\n Izmir ,120,480\n";

        let records = read_locations(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                LocationRecord::new("Ankara", 1210, 560),
                LocationRecord::new("Izmir", 120, 480),
            ]
        );
    }

    #[test]
    fn hash_prefixed_names_are_kept() {
        let input = "A, 0, 0\n#Hub, 5, 5\n";

        let records = read_locations(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                LocationRecord::new("A", 0, 0),
                LocationRecord::new("#Hub", 5, 5),
            ]
        );
    }

    #[test]
    fn read_trimmed_connections() {
        let input = "Ankara, Izmir\nIzmir,Bursa\n";

        let records = read_connections(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                ConnectionRecord::new("Ankara", "Izmir"),
                ConnectionRecord::new("Izmir", "Bursa"),
            ]
        );
    }

    #[test]
    fn malformed_coordinate_fails() {
        let input = "Ankara, 12x0, 560\n";

        assert!(read_locations(input.as_bytes()).is_err());
    }

    #[test]
    fn read_from_path() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let locations = locations_from_path(&dir.join("locations.csv")).unwrap();
        let connections = connections_from_path(&dir.join("connections.csv")).unwrap();

        assert_eq!(locations.len(), 4);
        assert_eq!(connections.len(), 2);
    }

    #[test]
    fn missing_file_fails() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/does_not_exist.csv");

        assert!(locations_from_path(&path).is_err());
    }
}
