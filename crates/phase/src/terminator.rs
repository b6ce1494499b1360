//! Terminator shading for the phase view and the orbit view.
//!
//! The phase view draws the disk with two half-disk shades, left and right,
//! each stretched horizontally by a scale factor. A negative scale flips the
//! shade across the vertical diameter. Between the quarters a hidden copy of
//! the lit disk is masked by one of the shades to paint the gibbous bulge.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Shade used as the mask for the gibbous bulge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskSide {
    Left,
    Right,
}

/// Horizontal scales of the two shades and the optional gibbous mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminator {
    pub left_scale: f64,
    pub right_scale: f64,
    pub mask: Option<MaskSide>,
}

impl Terminator {
    /// Shade layout for a phase fraction.
    ///
    /// | phase          | left      | right     | mask  |
    /// |----------------|-----------|-----------|-------|
    /// | `[0, 0.25]`    | `1`       | `1 - 4p`  | none  |
    /// | `(0.25, 0.5]`  | `1`       | `1 - 4p`  | right |
    /// | `(0.5, 0.75)`  | `4p - 3`  | `1`       | left  |
    /// | `[0.75, 1)`    | `4p - 3`  | `1`       | none  |
    ///
    /// A phase of `1` or more, or one that is not finite, wraps to `0`.
    pub fn from_phase(phase: f64) -> Self {
        let phase = if phase.is_finite() && phase < 1.0 {
            phase.max(0.0)
        } else {
            0.0
        };

        if phase <= 0.5 {
            Self {
                left_scale: 1.0,
                right_scale: 1.0 - phase * 4.0,
                mask: (phase > 0.25).then_some(MaskSide::Right),
            }
        } else {
            let scale = 3.0 - phase * 4.0;
            Self {
                left_scale: -scale,
                right_scale: 1.0,
                mask: (phase < 0.75).then_some(MaskSide::Left),
            }
        }
    }

    /// Horizontal offset of a shade with the given scale, as a fraction of the
    /// disk centre's x coordinate.
    pub fn offset(scale: f64) -> f64 {
        1.0 - scale
    }

    pub fn left_offset(&self) -> f64 {
        Self::offset(self.left_scale)
    }

    pub fn right_offset(&self) -> f64 {
        Self::offset(self.right_scale)
    }
}

/// Arc covering the unlit half of a body in the orbit view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightSideArc {
    pub start: f64,
    pub end: f64,
}

impl NightSideArc {
    /// Night side of a body at orbital `angle`; the arc faces away from the sun.
    pub fn for_body_at(angle: f64) -> Self {
        Self {
            start: -FRAC_PI_2 - angle,
            end: FRAC_PI_2 - angle,
        }
    }
}
