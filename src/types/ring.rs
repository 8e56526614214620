use crate::error::{Error, Result};
use crate::types::Coord;

/// A simple closed polygon in fixed-point degrees
///
/// The last vertex implicitly connects back to the first. Vertex winding
/// order is not required to be consistent; every predicate built on a ring
/// is winding-agnostic. Self-intersecting input is not detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring(Vec<Coord>);

/// One edge of a ring, together with its neighborhood
///
/// `prev_lon` and `next_lon` are the longitudes of the vertex before the
/// edge start and after the edge end. The polar-ray predicate needs them
/// to decide whether the ray merely grazes a shared vertex or actually
/// passes through the boundary there.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub prev_lon: i32,
    pub start: Coord,
    pub end: Coord,
    pub next_lon: i32,
}

impl Ring {
    /// Create a ring from its vertices
    ///
    /// Fails with [`Error::DegenerateRing`] for fewer than 3 vertices.
    pub fn new<C: Into<Coord>>(vertices: Vec<C>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegenerateRing(vertices.len()));
        }
        Ok(Self(vertices.into_iter().map(Into::into).collect()))
    }

    pub fn vertices(&self) -> &[Coord] {
        &self.0
    }

    /// Iterate over all edges, including the closing last-to-first edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| Edge {
            prev_lon: self.0[(i + n - 1) % n].lon,
            start: self.0[i],
            end: self.0[(i + 1) % n],
            next_lon: self.0[(i + 2) % n].lon,
        })
    }
}
