use tracing::debug;

use crate::db::{BoundaryDb, BoundarySource, CountryCode};
use crate::error::Result;
use crate::geom::{METERS_PER_DEG_LAT, circle_inside_ring_deg};
use crate::types::Coord;

/// Outcome of the cheap country pre-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastCheckResult {
    /// The disc fits inside the safe zone with a trustworthy margin
    Success,
    /// The margin is too small to trust the approximate safe zone;
    /// escalate to the exact polygon test
    NeedPreciseCheck,
    /// The disc reaches past the safe zone and may cross the border
    OutOfBorder,
}

/// Compare the disc against the database's safe-zone radius
///
/// The safe zone is an O(1) approximation: a latitude-degree radius within
/// which no national boundary can be reached. Its own edge is approximate
/// too, so a disc that fits with less than `promote_threshold_m` of margin
/// is escalated rather than trusted outright.
pub fn fast_check(
    radius_m: f64,
    padding_m: f64,
    safezone_deg: f64,
    promote_threshold_m: f64,
) -> FastCheckResult {
    let radius_deg_lat = (radius_m + padding_m) / METERS_PER_DEG_LAT;
    debug!(radius_deg_lat, safezone_deg, "safe-zone fast check");

    if radius_deg_lat <= safezone_deg {
        let margin_m = (safezone_deg - radius_deg_lat) * METERS_PER_DEG_LAT;
        debug!(margin_m, promote_threshold_m, "fast check margin");
        if margin_m >= promote_threshold_m {
            return FastCheckResult::Success;
        }
        return FastCheckResult::NeedPreciseCheck;
    }

    debug!("disc reaches past the safe zone");
    FastCheckResult::OutOfBorder
}

/// Decide whether a disc stays inside the territory of a country
///
/// Two-tier procedure: an O(1) safe-zone comparison disposes of discs far
/// from any border (or clearly reaching past one); only an inconclusive
/// margin escalates to the O(ring length) circle-in-polygon test against
/// the country polygon fetched from the database.
///
/// Fail-closed: every condition that cannot positively certify containment
/// (unresolvable country code, out-of-range center, lookup miss, missing
/// or degenerate polygon) resolves to `Ok(false)`. The only error is the
/// fatal database configuration failure raised at first use of `db`.
pub fn circle_inside_country<S: BoundarySource>(
    db: &BoundaryDb<S>,
    center: Coord,
    country: &str,
    radius_m: f64,
    padding_m: f64,
    promote_threshold_m: f64,
) -> Result<bool> {
    let source = db.source()?;

    // Also rejects NaN.
    if !(radius_m > 0.0) {
        debug!(radius_m, "non-positive radius cannot be contained");
        return Ok(false);
    }

    let Some(code) = CountryCode::from_alpha3(country) else {
        debug!(country, "unresolvable country code");
        return Ok(false);
    };

    if !center.is_valid() {
        debug!(lat = center.lat, lon = center.lon, "center out of range");
        return Ok(false);
    }

    let center_deg = center.to_degrees();
    let Some(hint) = source.lookup(center_deg.lat, center_deg.lon, code) else {
        debug!(%code, "no boundary polygon found at the center");
        return Ok(false);
    };

    match fast_check(radius_m, padding_m, hint.safezone_deg, promote_threshold_m) {
        FastCheckResult::Success => return Ok(true),
        FastCheckResult::OutOfBorder => return Ok(false),
        FastCheckResult::NeedPreciseCheck => {}
    }

    debug!(
        polygon_id = hint.polygon_id,
        radius_m, "running precise boundary check"
    );
    let Some(ring) = source.polygon_vertices(hint.polygon_id) else {
        return Ok(false);
    };

    Ok(circle_inside_ring_deg(&ring, center_deg, radius_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BoundaryHint;
    use crate::types::DegCoord;
    use claims::{assert_ok, assert_ok_eq};

    #[test]
    fn fast_check_success_with_comfortable_margin() {
        // 500 m + 1 m padding ≈ 0.0045°; safe zone 0.05° leaves ~5 km.
        assert_eq!(fast_check(500.0, 1.0, 0.05, 50.0), FastCheckResult::Success);
    }

    #[test]
    fn fast_check_out_of_border() {
        // 20 km ≈ 0.18°, past a 0.05° safe zone.
        assert_eq!(
            fast_check(20_000.0, 1.0, 0.05, 50.0),
            FastCheckResult::OutOfBorder
        );
    }

    #[test]
    fn fast_check_promotes_thin_margins() {
        // Fits, but with less margin than the promotion threshold.
        assert_eq!(
            fast_check(5_000.0, 1.0, 0.046, 200.0),
            FastCheckResult::NeedPreciseCheck
        );
        // An absurd threshold forces every fitting disc to precise.
        assert_eq!(
            fast_check(500.0, 1.0, 0.05, 1e12),
            FastCheckResult::NeedPreciseCheck
        );
    }

    #[test]
    fn fast_check_boundary_equality() {
        // Exactly at the safe zone edge: not out of border, zero margin.
        let safezone = (500.0 + 1.0) / METERS_PER_DEG_LAT;
        assert_eq!(
            fast_check(500.0, 1.0, safezone, 0.0),
            FastCheckResult::Success
        );
        assert_eq!(
            fast_check(500.0, 1.0, safezone, 1.0),
            FastCheckResult::NeedPreciseCheck
        );
    }

    /// An island country polygon: a regular octagon of roughly 10 km
    /// circumradius around the test center.
    struct IslandSource {
        center: DegCoord,
        safezone_deg: f64,
    }

    const POLYGON_ID: u32 = 7;

    impl IslandSource {
        fn ring(&self) -> Vec<DegCoord> {
            let radius_deg_lat = 10_000.0 / METERS_PER_DEG_LAT;
            let radius_deg_lon = radius_deg_lat / self.center.lat.to_radians().cos();
            (0..8)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / 8.0;
                    DegCoord::new(
                        self.center.lat + radius_deg_lat * angle.sin(),
                        self.center.lon + radius_deg_lon * angle.cos(),
                    )
                })
                .collect()
        }
    }

    impl BoundarySource for IslandSource {
        fn open(_path: &std::path::Path) -> Result<Self> {
            unreachable!("tests construct the source directly")
        }

        fn lookup(&self, lat_deg: f64, lon_deg: f64, country: CountryCode) -> Option<BoundaryHint> {
            let near = (lat_deg - self.center.lat).abs() < 0.2
                && (lon_deg - self.center.lon).abs() < 0.2;
            (near && country == CountryCode::from_alpha3("KOR").unwrap()).then_some(BoundaryHint {
                polygon_id: POLYGON_ID,
                alpha3: country,
                safezone_deg: self.safezone_deg,
            })
        }

        fn polygon_vertices(&self, polygon_id: u32) -> Option<Vec<DegCoord>> {
            (polygon_id == POLYGON_ID).then(|| self.ring())
        }
    }

    fn island_db() -> BoundaryDb<IslandSource> {
        BoundaryDb::with_source(IslandSource {
            center: DegCoord::new(33.4527, 126.847),
            safezone_deg: 0.05,
        })
    }

    fn island_center() -> Coord {
        Coord::new(334_527_000, 1_268_470_000)
    }

    #[test]
    fn small_disc_passes_the_fast_path() {
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 500.0, 1.0, 50.0),
            true
        );
    }

    #[test]
    fn large_disc_crosses_the_coastline() {
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 20_000.0, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn forced_precise_path_agrees() {
        // A promotion threshold no margin can meet pushes every fitting
        // disc to the exact polygon test; the verdicts must not change.
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 500.0, 1.0, 1e12),
            true
        );
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 20_000.0, 1.0, 1e12),
            false
        );
    }

    #[test]
    fn unresolvable_country_code_fails_closed() {
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KO1", 500.0, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn non_positive_radius_fails_closed() {
        // Rejected before the safe-zone comparison can certify anything.
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 0.0, 1.0, 50.0),
            false
        );
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", -500.0, 1.0, 50.0),
            false
        );
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", f64::NAN, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn wrong_country_fails_closed() {
        let db = island_db();
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "JPN", 500.0, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn out_of_range_center_fails_closed() {
        let db = island_db();
        let bogus = Coord::new(950_000_000, 1_268_470_000);
        assert_ok_eq!(
            circle_inside_country(&db, bogus, "KOR", 500.0, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn lookup_miss_fails_closed() {
        let db = island_db();
        let far_away = Coord::new(480_000_000, 20_000_000);
        assert_ok_eq!(
            circle_inside_country(&db, far_away, "KOR", 500.0, 1.0, 50.0),
            false
        );
    }

    #[test]
    fn missing_database_is_an_error_not_a_verdict() {
        let db: BoundaryDb<IslandSource> = BoundaryDb::new("/no/such/country.bin");
        let result = circle_inside_country(&db, island_center(), "KOR", 500.0, 1.0, 50.0);
        assert!(result.is_err());
    }

    #[test]
    fn precise_path_respects_the_actual_polygon() {
        // Generous safe zone, but the unreachable promotion threshold
        // sends every fitting disc to the exact test; the octagon's
        // apothem (~9.24 km) decides.
        let db = BoundaryDb::with_source(IslandSource {
            center: DegCoord::new(33.4527, 126.847),
            safezone_deg: 0.1,
        });
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 9_000.0, 1.0, 1e12),
            true
        );
        assert_ok_eq!(
            circle_inside_country(&db, island_center(), "KOR", 9_500.0, 1.0, 1e12),
            false
        );
        assert_ok!(circle_inside_country(
            &db,
            island_center(),
            "KOR",
            1.0,
            1.0,
            1e12
        ));
    }
}
