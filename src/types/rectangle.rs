/// An axis-aligned geographic rectangle in fixed-point degrees
///
/// A configured set of rectangles represents a union region; membership in
/// the union is tested with [`inside_any_rectangle`](crate::inside_any_rectangle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub north: i32,
    pub south: i32,
    pub east: i32,
    pub west: i32,
}

impl Rectangle {
    pub fn new(north: i32, south: i32, east: i32, west: i32) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Inclusive-bounds membership test
    pub fn contains(&self, lat: i32, lon: i32) -> bool {
        lat <= self.north && lat >= self.south && lon <= self.east && lon >= self.west
    }
}
