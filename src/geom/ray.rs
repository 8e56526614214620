use crate::geom::orientation;
use crate::types::{Coord, Edge};

/// Latitude of the north pole in fixed-point degrees
pub const NORTH_POLE_LAT: i32 = 900_000_000;

/// Outcome of testing one polygon edge against the pole ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    /// The query point lies on the edge itself (boundary counts as inside)
    pub on_segment: bool,
    /// Crossing contribution of this edge to the ray-cast parity (0 or 1)
    pub crossings: u8,
}

const ON_SEGMENT: RayHit = RayHit {
    on_segment: true,
    crossings: 0,
};

const fn crossing(count: u8) -> RayHit {
    RayHit {
        on_segment: false,
        crossings: count,
    }
}

/// Test one polygon edge against the ray from the query point due north
/// to the pole along the query's own meridian.
///
/// The tricky part is a ray that passes through a vertex shared by two
/// edges: counted naively it would contribute two crossings and flip the
/// parity back. The tie-break compares the longitudes of the edge's
/// neighbors (`edge.prev_lon` / `edge.next_lon`) against the ray's
/// meridian: only when the polygon actually turns across the meridian at
/// that vertex does the touch count as a crossing.
pub fn edge_crosses_polar_ray(edge: &Edge, query: Coord) -> RayHit {
    let start = edge.start;
    let end = edge.end;
    let pole = Coord::new(NORTH_POLE_LAT, query.lon);

    let edge_vs_query = orientation(start, end, query) as i32;
    let edge_vs_pole = orientation(start, end, pole) as i32;
    let ray_vs_start = orientation(query, pole, start) as i32;
    let ray_vs_end = orientation(query, pole, end) as i32;

    if edge_vs_query * edge_vs_pole == 0 && ray_vs_start * ray_vs_end == 0 {
        // Edge and ray are collinear (the edge runs along the query
        // meridian). Cross-product signs carry no information here;
        // resolve by latitude span instead.
        return collinear_edge(edge, query);
    }

    if edge_vs_query * edge_vs_pole < 0 && ray_vs_start * ray_vs_end < 0 {
        // Endpoints on opposite sides of the meridian and the ray
        // separates the edge's latitudes: a proper crossing.
        return crossing(1);
    }

    if edge_vs_query == 0 {
        // Query collinear with the edge's supporting line.
        if query == start {
            return ON_SEGMENT;
        }
        if query == end {
            // The shared vertex is counted when it comes up as the start
            // of the next edge.
            return crossing(0);
        }
        let within_span = (start.lat < end.lat && query.lat >= start.lat && query.lat < end.lat)
            || (start.lat > end.lat && query.lat < start.lat && query.lat >= end.lat)
            || (start.lat == end.lat && start.lat == query.lat);
        return if within_span { ON_SEGMENT } else { crossing(0) };
    }

    if ray_vs_start == 0 {
        // The edge's start vertex sits exactly on the ray's meridian.
        if start == query {
            return ON_SEGMENT;
        }
        if query.lat <= start.lat {
            // Vertex on the ray: count it only if the polygon turns
            // across the meridian there (neighbors on opposite sides);
            // a tangential graze contributes nothing.
            let turn = (end.lon as i64 - start.lon as i64) as i128
                * (start.lon as i64 - edge.prev_lon as i64) as i128;
            return if turn < 0 { crossing(0) } else { crossing(1) };
        }
        return crossing(0);
    }

    crossing(0)
}

/// Edge collinear with the meridian ray: decide by latitude ranges.
fn collinear_edge(edge: &Edge, query: Coord) -> RayHit {
    let start = edge.start;
    let end = edge.end;

    let (low, high) = if start.lat < end.lat {
        (start.lat, end.lat)
    } else {
        (end.lat, start.lat)
    };

    if query.lat >= low && query.lat <= high {
        return ON_SEGMENT;
    }

    if query.lat < low {
        // Query below the whole edge: the ray runs through it. The
        // adjoining edge will report one crossing at the shared vertex;
        // with both neighbors on the same side of the meridian the
        // boundary comes back, so contribute 1 here for an even total.
        // With neighbors on opposite sides the boundary passes through,
        // so contribute 0 and let that single count flip the parity.
        let side = (query.lon as i64 - edge.prev_lon as i64) as i128
            * (edge.next_lon as i64 - query.lon as i64) as i128;
        return if side < 0 { crossing(1) } else { crossing(0) };
    }

    crossing(0)
}
