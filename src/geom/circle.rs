use tracing::debug;

use crate::geom::polygon::inside_polygon;
use crate::types::{Coord, DegCoord, Ring};

/// One degree of latitude in meters, conservative spherical value
pub(crate) const METERS_PER_DEG_LAT: f64 = 111_320.0;

const MIN_POLYGON_POINTS: usize = 3;

/// A point in the local tangent plane, in meters, with the disc center at
/// the origin.
#[derive(Debug, Clone, Copy)]
struct PlanePoint {
    x: f64,
    y: f64,
}

/// Certify that a disc around `center` stays inside the ring
///
/// The center must lie inside the ring; that is checked here before the
/// disc test, matching the public contract (the degree-based worker below
/// leaves it to its caller).
pub fn circle_inside_polygon(ring: &Ring, center_lat: i32, center_lon: i32, radius_m: f64) -> bool {
    if !inside_polygon(ring, center_lat, center_lon) {
        return false;
    }

    let ring_deg: Vec<DegCoord> = ring.vertices().iter().map(|v| v.to_degrees()).collect();
    let center = Coord::new(center_lat, center_lon).to_degrees();

    circle_inside_ring_deg(&ring_deg, center, radius_m)
}

/// Disc-inside-ring test in floating-point degrees
///
/// Precondition: the center is already known to lie inside the ring; this
/// only certifies that the disc does not poke through any edge. Projects
/// the ring into a local tangent plane centered on the disc and compares
/// the minimum point-to-segment distance against the radius.
pub(crate) fn circle_inside_ring_deg(ring: &[DegCoord], center: DegCoord, radius_m: f64) -> bool {
    if ring.len() < MIN_POLYGON_POINTS || !(radius_m > 0.0) {
        debug!(vertices = ring.len(), radius_m, "invalid circle check input");
        return false;
    }

    // Local flat-Earth scale factors, valid near the center only.
    let meters_per_deg_lon = METERS_PER_DEG_LAT * center.lat.to_radians().cos();

    let radius2 = radius_m * radius_m;
    let mut min_distance2 = f64::INFINITY;

    for index in 0..ring.len() {
        let next = if index + 1 != ring.len() { index + 1 } else { 0 };

        let a = PlanePoint {
            x: (ring[index].lon - center.lon) * meters_per_deg_lon,
            y: (ring[index].lat - center.lat) * METERS_PER_DEG_LAT,
        };
        let b = PlanePoint {
            x: (ring[next].lon - center.lon) * meters_per_deg_lon,
            y: (ring[next].lat - center.lat) * METERS_PER_DEG_LAT,
        };

        min_distance2 = min_distance2.min(origin_segment_dist_squared(a, b));
        if min_distance2 < radius2 {
            // The disc already breaches this edge.
            return false;
        }
    }

    min_distance2 >= radius2
}

/// Squared distance from the origin to the nearest point of segment AB
///
/// Closed form: project the origin onto the supporting line and clamp the
/// projection parameter to [0, 1].
fn origin_segment_dist_squared(a: PlanePoint, b: PlanePoint) -> f64 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let vv = vx * vx + vy * vy;

    // Origin relative to A, projected onto AB. Degenerate zero-length
    // segments collapse onto A.
    let t = if vv > 0.0 {
        (-a.x * vx - a.y * vy) / vv
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);

    let cx = a.x + t * vx;
    let cy = a.y + t * vy;
    cx * cx + cy * cy
}
