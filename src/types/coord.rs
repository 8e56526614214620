/// Scale factor between fixed-point and floating-point degrees
pub const LAT_LON_SCALE: f64 = 1e7;

const MIN_LAT: i32 = -900_000_000;
const MAX_LAT: i32 = 900_000_000;
const MIN_LON: i32 = -1_800_000_000;
const MAX_LON: i32 = 1_800_000_000;

/// A geographic coordinate in fixed-point degrees
///
/// Latitude and longitude are stored as integers scaled by 10^7
/// (degrees = value / 10^7) to avoid floating-point drift in the
/// exact comparisons the containment predicates rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Latitude in 10^-7 degrees
    pub lat: i32,
    /// Longitude in 10^-7 degrees
    pub lon: i32,
}

impl Coord {
    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// Check that both components are within the legal geographic range
    ///
    /// The internal predicates assume valid input; callers at the public
    /// boundary are expected to reject anything outside ±90°/±180°.
    pub fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lon)
    }

    /// Convert to floating-point degrees
    pub fn to_degrees(self) -> DegCoord {
        DegCoord {
            lat: self.lat as f64 / LAT_LON_SCALE,
            lon: self.lon as f64 / LAT_LON_SCALE,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((lat, lon): (i32, i32)) -> Self {
        Self { lat, lon }
    }
}

/// A geographic coordinate in floating-point degrees
///
/// The form the boundary database collaborator speaks; also used for the
/// local tangent-plane arithmetic of the circle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegCoord {
    pub lat: f64,
    pub lon: f64,
}

impl DegCoord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
