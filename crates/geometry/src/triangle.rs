//! Interior angles of a triangle from its side lengths.

/// Interior angle between the sides `adjacent_a` and `adjacent_b`, opposite
/// the side `opposite`, in `[0, π]`.
///
/// The cosine is clamped into `[-1, 1]` before `acos` so rounding on nearly
/// degenerate triangles cannot produce `NaN`. When either adjacent side has
/// zero length the angle is undefined and `0` is returned.
pub fn triangle_angle(adjacent_a: f64, adjacent_b: f64, opposite: f64) -> f64 {
    let denominator = 2.0 * adjacent_a * adjacent_b;
    if !denominator.is_finite() || denominator.abs() <= f64::EPSILON {
        return 0.0;
    }
    let cosine = (adjacent_a * adjacent_a + adjacent_b * adjacent_b - opposite * opposite)
        / denominator;
    if cosine.is_nan() {
        return 0.0;
    }
    cosine.clamp(-1.0, 1.0).acos()
}
