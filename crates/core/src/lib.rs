//! Core units, constants, and shared primitives for the planetary configurations workspace.

/// Simulation constants. Radii are in astronomical units, angles in radians.
pub mod constants {
    /// Length of the reference (Earth) year in days.
    pub const EARTH_YEAR_DAYS: f64 = 365.0;
    /// Kepler's third law for circular orbits: angular speed scales as `r^-1.5`.
    pub const KEPLER_EXPONENT: f64 = -1.5;
    /// Smallest orbital radius accepted from the controls (AU).
    pub const MIN_RADIUS_AU: f64 = 0.25;
    /// Largest orbital radius accepted from the controls (AU).
    pub const MAX_RADIUS_AU: f64 = 10.0;
    /// Angle advanced per animation frame at unit rate and unit multiplier.
    pub const BASE_STEP_RAD: f64 = 0.0115;
    /// Default animation speed multiplier.
    pub const DEFAULT_ANIMATION_RATE: f64 = 1.5;
    /// Slowest selectable animation speed.
    pub const MIN_ANIMATION_RATE: f64 = 0.1;
    /// Fastest selectable animation speed (1.5π).
    pub const MAX_ANIMATION_RATE: f64 = std::f64::consts::PI * 1.5;
    /// Pixel radius given to the larger of the two orbits in the orbit view.
    pub const MAX_PIXEL_RADIUS: f64 = 400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert radians to degrees.
    #[inline]
    pub fn degrees(radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn radians(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Convert a duration in days to (fractional) Earth years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / super::constants::EARTH_YEAR_DAYS
    }
}

/// Angle normalization shared by every solver.
///
/// All components go through these helpers so that the 0/2π seam is handled
/// the same way everywhere.
pub mod angle {
    use std::f64::consts::{PI, TAU};

    /// Reduce an angle into `[0, 2π)`.
    ///
    /// Non-finite input maps to `0`. A reduction that rounds up to exactly `2π`
    /// is reported as `0` so the half-open range always holds.
    pub fn normalize_to_two_pi(angle: f64) -> f64 {
        if !angle.is_finite() {
            return 0.0;
        }
        let wrapped = angle.rem_euclid(TAU);
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Shortest signed rotation taking `from` onto `to`, in `(-π, π]`.
    pub fn angle_delta(from: f64, to: f64) -> f64 {
        let delta = normalize_to_two_pi(to - from);
        if delta > PI { delta - TAU } else { delta }
    }

    /// Mirror a `[0, 2π)` angle around π so the result is a separation in `[0, π]`.
    ///
    /// Values already in `[0, π]` are returned unchanged.
    pub fn fold_to_pi(raw: f64) -> f64 {
        if raw > PI { PI - (raw - PI) } else { raw }
    }

    /// Express `angle` relative to `baseline`, lifted into `(0, 2π]`.
    ///
    /// A shifted angle of exactly zero reads as a full turn, so the first step
    /// off a fresh baseline lands in the cycle detector's fourth band.
    pub fn lift_from_baseline(angle: f64, baseline: f64) -> f64 {
        let shifted = normalize_to_two_pi(angle - baseline);
        if shifted > 0.0 { shifted } else { TAU }
    }
}

/// Minimal 2D vector helpers to avoid ad-hoc `(f64, f64)` math everywhere.
pub mod vector {
    use serde::{Deserialize, Serialize};

    /// A point or displacement in a plane.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Point2 {
        pub x: f64,
        pub y: f64,
    }

    impl Point2 {
        pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

        #[inline]
        pub const fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        /// Point at `radius` along `angle`, measured counter-clockwise from +x.
        #[inline]
        pub fn from_polar(radius: f64, angle: f64) -> Self {
            Self::new(radius * angle.cos(), radius * angle.sin())
        }

        /// Direction from `self` towards `other`, as returned by `atan2` (`[-π, π]`).
        #[inline]
        pub fn bearing_to(&self, other: &Point2) -> f64 {
            (other.y - self.y).atan2(other.x - self.x)
        }

        #[inline]
        pub fn distance_to(&self, other: &Point2) -> f64 {
            sub(other, self).norm()
        }

        #[inline]
        pub fn norm(&self) -> f64 {
            dot(self, self).sqrt()
        }
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Point2, b: &Point2) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Point2, b: &Point2) -> Point2 {
        Point2::new(a.x - b.x, a.y - b.y)
    }
}

/// Conversions between the screen frame (Y down, origin at the canvas corner)
/// and the sun-centred mathematical frame (Y up).
pub mod frame {
    use crate::vector::Point2;

    /// A screen frame described by where the sun sits and how many screen units
    /// make up one model unit.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Frame {
        pub origin: Point2,
        pub scale: f64,
    }

    impl Default for Frame {
        fn default() -> Self {
            Self::unit()
        }
    }

    impl Frame {
        /// Build a frame. A non-positive or non-finite scale falls back to `1`.
        pub fn new(origin: Point2, scale: f64) -> Self {
            let scale = if scale.is_finite() && scale > 0.0 {
                scale
            } else {
                1.0
            };
            Self { origin, scale }
        }

        /// Frame whose origin is the sun and whose scale is one.
        pub fn unit() -> Self {
            Self::new(Point2::ORIGIN, 1.0)
        }

        /// Screen point to sun-centred, Y-up model coordinates.
        pub fn to_math_frame(&self, screen: Point2) -> Point2 {
            Point2::new(
                (screen.x - self.origin.x) / self.scale,
                -(screen.y - self.origin.y) / self.scale,
            )
        }

        /// Sun-centred, Y-up model coordinates to a screen point.
        pub fn to_screen_frame(&self, math: Point2) -> Point2 {
            Point2::new(
                math.x * self.scale + self.origin.x,
                -math.y * self.scale + self.origin.y,
            )
        }

        /// Screen position of a body at `radius` (model units) and orbital `angle`.
        ///
        /// Positive angles run counter-clockwise on screen, which means clockwise
        /// in the raw Y-down coordinates.
        pub fn polar_to_screen(&self, radius: f64, angle: f64) -> Point2 {
            let r = radius * self.scale;
            Point2::new(
                r * (-angle).cos() + self.origin.x,
                r * (-angle).sin() + self.origin.y,
            )
        }

        /// Orbital angle of a screen point, as produced by a drag gesture.
        pub fn angle_from_screen(&self, screen: Point2) -> f64 {
            -(screen.y - self.origin.y).atan2(screen.x - self.origin.x)
        }
    }
}
