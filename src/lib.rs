#![doc = include_str!("../README.md")]

pub use crate::country::{FastCheckResult, circle_inside_country, fast_check};
pub use crate::db::{BoundaryDb, BoundaryHint, BoundarySource, CountryCode};
pub use crate::error::{Error, Result};
pub use crate::geom::*;
pub use crate::types::*;

mod country;
mod db;
mod error;
mod geom;
mod types;
