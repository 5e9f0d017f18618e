//! Layer-neutrale Spline-Mathematik: Hermite-Basis, Tangentengenerierung,
//! Tridiagonal-Löser. Keine Abhängigkeit auf das Kurven-Aggregat.

pub mod hermite_geometry;
pub mod tangent_generation;
pub mod tridiagonal;

pub use hermite_geometry::{
    approx_segment_length, hermite_gradient, hermite_point, interpolate_segment,
    interpolate_tangent, CURVE_SAMPLES_PER_SEGMENT,
};
pub use tangent_generation::{
    clamped_end_tangents_1d, natural_spline_tangents_1d, MIN_POINTS_FOR_TANGENTS,
};
pub use tridiagonal::solve_tridiagonal;
