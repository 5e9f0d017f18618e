//! Core-Domänentypen: Kontrollpunkte und das Kurven-Aggregat.

pub mod control_point;
pub mod curve;

pub use control_point::ControlPoint;
pub use curve::{HermiteCurve, MIN_POINTS_FOR_CURVE};
