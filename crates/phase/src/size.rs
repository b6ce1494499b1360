//! Apparent size of the target disk in the phase view.

/// Drawn diameter of the target, interpolated linearly between closest and
/// farthest approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentSize {
    /// Diameter at closest approach, in pixels.
    pub max_pixels: f64,
}

impl Default for ApparentSize {
    fn default() -> Self {
        Self { max_pixels: 275.0 }
    }
}

impl ApparentSize {
    /// Diameter at farthest approach for a pair whose smaller orbit is
    /// `min_radius_au`. Smaller orbits keep a larger minimum, from 200 px
    /// near 0.25 AU down to 50 px at 10 AU.
    pub fn min_pixels(min_radius_au: f64) -> f64 {
        200.0 - ((2.0 * min_radius_au - 0.5) / 19.5) * 150.0
    }

    /// Diameter of the target when it is `distance` from the observer.
    ///
    /// The distance is clamped into `[|rT - rO|, rT + rO]`. If that span is
    /// empty the maximum diameter is returned.
    pub fn diameter(&self, distance: f64, observer_radius_au: f64, target_radius_au: f64) -> f64 {
        let closest = (target_radius_au - observer_radius_au).abs();
        let farthest = target_radius_au + observer_radius_au;
        let span = farthest - closest;
        if !span.is_finite() || span <= f64::EPSILON {
            return self.max_pixels;
        }

        let min_pixels = Self::min_pixels(observer_radius_au.min(target_radius_au));
        let distance = if distance.is_nan() {
            closest
        } else {
            distance.clamp(closest, farthest)
        };
        self.max_pixels - ((distance - closest) / span) * (self.max_pixels - min_pixels)
    }

    /// Diameter as a fraction of the closest-approach diameter.
    pub fn scale(&self, diameter: f64) -> f64 {
        if self.max_pixels > 0.0 {
            diameter / self.max_pixels
        } else {
            0.0
        }
    }
}
