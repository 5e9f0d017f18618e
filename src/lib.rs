//! Hermite-Curve-Engine.
//! Spline-Kern als Library exportiert für Editor-Frontends und Tests.

pub mod core;
pub mod shared;

pub use core::{ControlPoint, HermiteCurve};
pub use shared::{
    approx_segment_length, clamped_end_tangents_1d, interpolate_segment, interpolate_tangent,
    natural_spline_tangents_1d, solve_tridiagonal, CURVE_SAMPLES_PER_SEGMENT,
    MIN_POINTS_FOR_TANGENTS,
};
