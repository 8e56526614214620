use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::types::DegCoord;

/// ISO 3166-1 alpha-3 country code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 3]);

impl CountryCode {
    /// Parse an alpha-3 code, case-insensitively
    ///
    /// Returns `None` for anything that is not exactly three ASCII
    /// letters.
    pub fn from_alpha3(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always ASCII uppercase by construction.
        for byte in self.0 {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}

/// Boundary information near a queried point
///
/// Produced by the boundary database: identifies the country polygon the
/// point falls in and a conservative safe-zone radius (in degrees of
/// latitude) within which the point is guaranteed not to be near any
/// national boundary. Valid near the queried point only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHint {
    pub polygon_id: u32,
    pub alpha3: CountryCode,
    pub safezone_deg: f64,
}

/// The external country-boundary database
///
/// The binary file format and its loader live outside this crate; the
/// containment engine consumes exactly these three operations. All
/// coordinates cross this interface in floating-point degrees.
pub trait BoundarySource: Sized {
    /// Open the database backing file
    fn open(path: &Path) -> Result<Self>;

    /// Find the boundary polygon containing the given point, scoped to
    /// the given country
    ///
    /// Returns `None` if the point does not fall inside (or on the border
    /// of) any polygon of that country.
    fn lookup(&self, lat_deg: f64, lon_deg: f64, country: CountryCode) -> Option<BoundaryHint>;

    /// Fetch the vertex ring of a polygon
    fn polygon_vertices(&self, polygon_id: u32) -> Option<Vec<DegCoord>>;
}

/// Process-wide handle to the boundary database
///
/// Constructed with a path; the underlying source is opened lazily,
/// exactly once, on first use. Concurrent first callers race safely to a
/// single stored source, after which the handle is read-only. It is never
/// reopened with a different path during the process lifetime.
#[derive(Debug)]
pub struct BoundaryDb<S> {
    path: PathBuf,
    source: OnceLock<S>,
}

impl<S: BoundarySource> BoundaryDb<S> {
    /// Create a handle without opening the database yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: OnceLock::new(),
        }
    }

    /// Wrap an already-open source
    ///
    /// Useful for in-memory sources and tests; `source()` never touches
    /// the filesystem on such a handle.
    pub fn with_source(source: S) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(source);
        Self {
            path: PathBuf::new(),
            source: cell,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the opened source, opening the database on the first call
    ///
    /// A missing or unreadable database file is a fatal configuration
    /// error and surfaces as `Err`; it is never folded into a containment
    /// verdict.
    pub fn source(&self) -> Result<&S> {
        if let Some(source) = self.source.get() {
            return Ok(source);
        }

        if !self.path.is_file() {
            return Err(Error::DatabaseNotFound(self.path.clone()));
        }

        // Two threads may both reach the open; get_or_init keeps one
        // source and drops the loser, which is harmless for a read-only
        // handle.
        let opened = S::open(&self.path)?;
        Ok(self.source.get_or_init(|| opened))
    }
}
