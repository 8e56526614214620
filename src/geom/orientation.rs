use crate::types::Coord;

/// Signed-area orientation of the turn a → b → c
///
/// Returns `+1` for counter-clockwise, `0` for collinear and `-1` for
/// clockwise, from the sign of the 2D cross product.
///
/// Fixed-point differences reach 1.8·10^9 in latitude and 3.6·10^9 in
/// longitude; the cross product then reaches 6.5·10^18, within 30% of
/// `i64::MAX`. It is taken in 128-bit arithmetic to keep the headroom
/// explicit instead of relying on that margin.
pub fn orientation(a: Coord, b: Coord, c: Coord) -> i8 {
    let cross = (b.lat as i64 - a.lat as i64) as i128 * (c.lon as i64 - a.lon as i64) as i128
        - (c.lat as i64 - a.lat as i64) as i128 * (b.lon as i64 - a.lon as i64) as i128;

    match cross {
        c if c > 0 => 1,
        c if c < 0 => -1,
        _ => 0,
    }
}
