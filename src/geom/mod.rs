mod circle;
mod orientation;
mod polygon;
mod ray;

pub use circle::circle_inside_polygon;
pub(crate) use circle::{METERS_PER_DEG_LAT, circle_inside_ring_deg};
pub use orientation::orientation;
pub use polygon::{inside_polygon, line_in_polygon, polygon_inside};
pub use ray::{NORTH_POLE_LAT, RayHit, edge_crosses_polar_ray};

use tracing::debug;

use crate::types::Rectangle;

/// Union-of-rectangles membership test
///
/// True iff the point falls within the inclusive bounds of at least one
/// configured rectangle.
pub fn inside_any_rectangle(rectangles: &[Rectangle], lat: i32, lon: i32) -> bool {
    if rectangles.iter().any(|r| r.contains(lat, lon)) {
        return true;
    }

    debug!(lat, lon, "point outside every configured rectangle");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_membership() {
        let rectangles = [
            Rectangle::new(42, 20, 30, 1),
            Rectangle::new(60, 12, 93, 26),
            Rectangle::new(72, 37, 55, 18),
        ];

        // Inside all three, two, and one rectangle respectively.
        assert!(inside_any_rectangle(&rectangles, 40, 29));
        assert!(inside_any_rectangle(&rectangles, 40, 40));
        assert!(inside_any_rectangle(&rectangles, 40, 80));
        // On the boundary of one.
        assert!(inside_any_rectangle(&rectangles, 60, 93));
        // Outside all.
        assert!(!inside_any_rectangle(&rectangles, 100, 100));
    }

    #[test]
    fn empty_set_contains_nothing() {
        assert!(!inside_any_rectangle(&[], 0, 0));
    }
}
