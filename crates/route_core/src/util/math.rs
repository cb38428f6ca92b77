use crate::{constants::Weight, locations::Location};

/// Straight line distance between two locations on the map plane.
///
/// Coordinates are widened to `f64` before subtracting, so large coordinates
/// cannot overflow.
pub fn euclidean(src: &Location, dst: &Location) -> Weight {
    let dx = f64::from(dst.x) - f64::from(src.x);
    let dy = f64::from(dst.y) - f64::from(src.y);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_triple() {
        let a = Location::new("A", 0, 0);
        let c = Location::new("C", 3, 4);

        assert_eq!(euclidean(&a, &c), 5.0);
        assert_eq!(euclidean(&c, &a), 5.0);
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Location::new("A", i32::MIN, 0);
        let b = Location::new("B", i32::MAX, 0);

        assert_eq!(euclidean(&a, &b), u32::MAX as f64);
    }
}
