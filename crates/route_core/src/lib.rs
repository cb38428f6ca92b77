//! Crate to find shortest routes between named locations on a 2D map.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! let locations = vec![
//!     LocationRecord::new("A", 0, 0),
//!     LocationRecord::new("B", 3, 0),
//!     LocationRecord::new("C", 3, 4),
//! ];
//! let connections = vec![
//!     ConnectionRecord::new("A", "B"),
//!     ConnectionRecord::new("B", "C"),
//! ];
//!
//! // Build the location table and graph once
//! let nav = Navigator::from_records(&locations, &connections).unwrap();
//!
//! // Query as often as needed
//! let route = nav.route("A", "C").unwrap().expect("A and C are connected");
//! assert_eq!(route.names, vec!["A", "B", "C"]);
//! assert_eq!(route.distance, 7.0);
//!```
//! [`Navigator`]: crate::navigator::Navigator
pub mod constants;
pub mod error;
pub mod graph;
pub mod locations;
pub mod navigator;
pub mod prelude;
pub mod records;
pub mod search;
pub mod statistics;
pub mod util;
