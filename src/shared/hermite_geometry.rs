//! Reine Geometrie-Funktionen für kubische Hermite-Segmente.
//!
//! Layer-neutral: arbeitet ausschließlich auf `glam::Vec2` bzw. Skalaren,
//! ohne Kenntnis des Kurven-Aggregats.

use glam::Vec2;

/// Unterteilungen pro Segment beim Sampling (11 Stützstellen inklusive beider Enden).
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 10;

/// Kubische Hermite-Basisfunktion für eine Achse.
///
/// `H(u) = (2u³−3u²+1)·P0 + (−2u³+3u²)·P1 + (u³−2u²+u)·PT0 + (u³−u²)·PT1`
pub fn hermite_point(u: f32, p0: f32, p1: f32, pt0: f32, pt1: f32) -> f32 {
    let u2 = u * u;
    let u3 = u2 * u;
    (2.0 * u3 - 3.0 * u2 + 1.0) * p0
        + (-2.0 * u3 + 3.0 * u2) * p1
        + (u3 - 2.0 * u2 + u) * pt0
        + (u3 - u2) * pt1
}

/// Erste Ableitung der Hermite-Basisfunktion für eine Achse.
///
/// `H'(u) = 3u²·(2·P0−2·P1+PT0+PT1) − 2u·(3·P0−3·P1+2·PT0+PT1) + PT0`
pub fn hermite_gradient(u: f32, p0: f32, p1: f32, pt0: f32, pt1: f32) -> f32 {
    let u2 = u * u;
    3.0 * u2 * (2.0 * p0 - 2.0 * p1 + pt0 + pt1)
        - 2.0 * u * (3.0 * p0 - 3.0 * p1 + 2.0 * pt0 + pt1)
        + pt0
}

/// Interpolierte Position auf dem Segment zwischen zwei Kontrollpunkten.
///
/// `u` wird auf `[0, 1]` geklemmt; beide Achsen werden unabhängig ausgewertet.
pub fn interpolate_segment(p0: Vec2, p1: Vec2, pt0: Vec2, pt1: Vec2, u: f32) -> Vec2 {
    let u = u.clamp(0.0, 1.0);
    Vec2::new(
        hermite_point(u, p0.x, p1.x, pt0.x, pt1.x),
        hermite_point(u, p0.y, p1.y, pt0.y, pt1.y),
    )
}

/// Einheits-Normale der Kurvenrichtung auf dem Segment.
///
/// Historischer Name aus dem Editor: Das Ergebnis ist nicht der Gradient
/// selbst, sondern die um −90° gedrehte Richtung `(gy, −gx)`, normalisiert
/// auf Länge 1. Abnehmer (Tangenten-Striche im Frontend) erwarten genau
/// diese Dreh-Konvention. Null-Gradient → Nullvektor.
pub fn interpolate_tangent(p0: Vec2, p1: Vec2, pt0: Vec2, pt1: Vec2, u: f32) -> Vec2 {
    let u = u.clamp(0.0, 1.0);
    let gradient = Vec2::new(
        hermite_gradient(u, p0.x, p1.x, pt0.x, pt1.x),
        hermite_gradient(u, p0.y, p1.y, pt0.y, pt1.y),
    );
    Vec2::new(gradient.y, -gradient.x).normalize_or_zero()
}

/// Approximierte Segmentlänge über die Polylinie der 11 Stützstellen.
///
/// Kein exaktes Bogenlängen-Integral; der Fehler wächst mit der Krümmung.
pub fn approx_segment_length(p0: Vec2, p1: Vec2, pt0: Vec2, pt1: Vec2) -> f32 {
    let mut length = 0.0;
    let mut prev = interpolate_segment(p0, p1, pt0, pt1, 0.0);
    for i in 1..=CURVE_SAMPLES_PER_SEGMENT {
        let u = i as f32 / CURVE_SAMPLES_PER_SEGMENT as f32;
        let p = interpolate_segment(p0, p1, pt0, pt1, u);
        length += prev.distance(p);
        prev = p;
    }
    length
}
