//! Sun-observer-target geometry: elongation, direction, separation, and the
//! law-of-cosines triangle solve.

pub mod elongation;
pub mod triangle;

pub use elongation::{
    Direction, ElongationFrameConvention, ElongationResult, OrbitalBody, Vertex,
    heliocentric_separation, solve as solve_elongation,
};
pub use triangle::triangle_angle;
