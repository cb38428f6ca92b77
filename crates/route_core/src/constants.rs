/// Edge weight type
pub type Weight = f64;
/// Type of a location coordinate on the map plane
pub type Coord = i32;
