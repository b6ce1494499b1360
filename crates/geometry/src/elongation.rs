//! Elongation of a target body as seen from an observer, with the sun fixed
//! at the shared orbit centre.
//!
//! Body angles follow the screen convention: a body at `angle` is drawn at
//! `(r·cos(-angle), r·sin(-angle))` relative to the sun in Y-down screen
//! coordinates. Positions are taken into a sun-centred model frame before any
//! bearing is measured.

use std::f64::consts::PI;
use std::fmt;

use planetary_core::angle::{angle_delta, fold_to_pi, normalize_to_two_pi};
use planetary_core::frame::Frame;
use planetary_core::vector::Point2;
use serde::{Deserialize, Serialize};

/// Polar position of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalBody {
    pub radius_au: f64,
    /// Radius of the drawn orbit; only the orbit view uses it.
    pub radius_pixels: f64,
    /// Orbital angle in radians, nominally in `(-π, π]`.
    pub angle: f64,
}

impl OrbitalBody {
    pub fn new(radius_au: f64, radius_pixels: f64, angle: f64) -> Self {
        Self {
            radius_au,
            radius_pixels,
            angle,
        }
    }

    /// Body with its drawn radius equal to its radius in AU.
    pub fn at(radius_au: f64, angle: f64) -> Self {
        Self::new(radius_au, radius_au, angle)
    }

    /// Sun-centred model position, in AU.
    pub fn position(&self, convention: ElongationFrameConvention) -> Point2 {
        let frame = Frame::unit();
        convention.to_model(&frame, frame.polar_to_screen(self.radius_au, self.angle))
    }
}

/// How screen positions are taken into the frame bearings are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElongationFrameConvention {
    /// Subtract the centre and flip Y, giving a counter-clockwise angle sense.
    #[default]
    MathYUp,
    /// Subtract the centre only. Bearings keep the screen's clockwise sense,
    /// so east and west come out swapped relative to `MathYUp`.
    ScreenYDown,
}

impl ElongationFrameConvention {
    pub fn to_model(self, frame: &Frame, screen: Point2) -> Point2 {
        match self {
            ElongationFrameConvention::MathYUp => frame.to_math_frame(screen),
            ElongationFrameConvention::ScreenYDown => Point2::new(
                (screen.x - frame.origin.x) / frame.scale,
                (screen.y - frame.origin.y) / frame.scale,
            ),
        }
    }
}

/// Body at whose position the sun-body angle is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertex {
    /// Angle between the target and the sun as seen by the observer.
    Observer,
    /// Angle between the observer and the sun as seen from the target. This
    /// is the phase-angle configuration the linear phase strategy consumes.
    Target,
}

/// Side of the sun the target appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "E"),
            Direction::West => write!(f, "W"),
        }
    }
}

/// Elongation geometry for one configuration of the two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationResult {
    /// Angular separation between the far body and the sun, in `[0, π]`.
    pub elongation_angle: f64,
    /// Separation before folding, in `[0, 2π)`; above π means west.
    pub raw_elongation: f64,
    /// Bearing from the vertex body to the sun, straight from `atan2`.
    pub sun_angle_raw: f64,
    /// Bearing from the vertex body to the other body, straight from `atan2`.
    pub target_angle_raw: f64,
    /// `None` at exactly 0 or π.
    pub direction: Option<Direction>,
    /// Observer-target distance, in AU.
    pub distance: f64,
}

/// Solve the elongation at `vertex` for the given pair of bodies.
pub fn solve(
    observer: &OrbitalBody,
    target: &OrbitalBody,
    vertex: Vertex,
    convention: ElongationFrameConvention,
) -> ElongationResult {
    let sun = Point2::ORIGIN;
    let observer_pos = observer.position(convention);
    let target_pos = target.position(convention);

    let (from, towards) = match vertex {
        Vertex::Observer => (observer_pos, target_pos),
        Vertex::Target => (target_pos, observer_pos),
    };
    let target_angle_raw = from.bearing_to(&towards);
    let sun_angle_raw = from.bearing_to(&sun);

    let raw_elongation = normalize_to_two_pi(
        normalize_to_two_pi(target_angle_raw) - normalize_to_two_pi(sun_angle_raw),
    );

    ElongationResult {
        elongation_angle: fold_to_pi(raw_elongation),
        raw_elongation,
        sun_angle_raw,
        target_angle_raw,
        direction: direction_of(raw_elongation),
        distance: observer_pos.distance_to(&target_pos),
    }
}

fn direction_of(raw_elongation: f64) -> Option<Direction> {
    if raw_elongation == 0.0 || raw_elongation == PI {
        None
    } else if raw_elongation > PI {
        Some(Direction::West)
    } else {
        Some(Direction::East)
    }
}

/// Angle between the two bodies as seen from the sun, in `[0, π]`.
pub fn heliocentric_separation(observer: &OrbitalBody, target: &OrbitalBody) -> f64 {
    angle_delta(observer.angle, target.angle).abs()
}
