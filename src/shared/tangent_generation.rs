//! Tangentengenerierung für Hermite-Kurven über tridiagonale Gleichungssysteme.
//!
//! Beide Varianten arbeiten 1-dimensional auf Skalarfolgen und werden pro
//! Achse (x, y) getrennt aufgerufen; das Kurven-Aggregat kombiniert die
//! Ergebnisse wieder zu 2D-Tangenten.

use anyhow::Result;

use super::tridiagonal::solve_tridiagonal;

/// Mindestanzahl Kontrollpunkte, unterhalb derer keine Tangenten erzeugt werden.
pub const MIN_POINTS_FOR_TANGENTS: usize = 3;

/// Tangenten-Komponenten mit fest vorgegebenen Rand-Tangenten (Clamped-End).
///
/// Bandstruktur: `a = [0 1 … 1 0]`, `b = [1 4 … 4 1]`, `c = a`,
/// `d = [t_start, 3·(p[i+1] − p[i-1]), …, t_end]`.
/// Die Endpunkte übernehmen exakt die übergebenen Rand-Tangenten, innere
/// Punkte erhalten die glatte Ableitung.
///
/// Weniger als 3 Punkte → leeres Ergebnis; der Aufrufer lässt bestehende
/// Tangenten dann unverändert.
pub fn clamped_end_tangents_1d(
    points: &[f32],
    start_tangent: f32,
    end_tangent: f32,
) -> Result<Vec<f32>> {
    let n = points.len();
    if n < MIN_POINTS_FOR_TANGENTS {
        log::debug!(
            "Clamped-End-Tangenten übersprungen: {} Punkte (mindestens {} nötig)",
            n,
            MIN_POINTS_FOR_TANGENTS
        );
        return Ok(Vec::new());
    }

    let mut a = vec![1.0f32; n];
    a[0] = 0.0;
    a[n - 1] = 0.0;

    let mut b = vec![4.0f32; n];
    b[0] = 1.0;
    b[n - 1] = 1.0;

    let c = a.clone();

    let mut d = vec![0.0f32; n];
    d[0] = start_tangent;
    for i in 1..n - 1 {
        d[i] = 3.0 * (points[i + 1] - points[i - 1]);
    }
    d[n - 1] = end_tangent;

    solve_tridiagonal(&a, &b, &c, &d)
}

/// Natural-Spline-Tangenten-Komponenten (zweite Ableitung an den Enden = 0).
///
/// Bandstruktur: `a = [0 1 … 1]`, `b = [2 4 … 4 2]`, `c = [1 … 1 0]`,
/// `d = [3·(p1 − p0), 3·(p[i+1] − p[i-1]), …, 3·(p[n-1] − p[n-2])]`.
///
/// Weniger als 3 Punkte → leeres Ergebnis.
pub fn natural_spline_tangents_1d(points: &[f32]) -> Result<Vec<f32>> {
    let n = points.len();
    if n < MIN_POINTS_FOR_TANGENTS {
        log::debug!(
            "Natural-Spline-Tangenten übersprungen: {} Punkte (mindestens {} nötig)",
            n,
            MIN_POINTS_FOR_TANGENTS
        );
        return Ok(Vec::new());
    }

    let mut a = vec![1.0f32; n];
    a[0] = 0.0;

    let mut b = vec![4.0f32; n];
    b[0] = 2.0;
    b[n - 1] = 2.0;

    let mut c = vec![1.0f32; n];
    c[n - 1] = 0.0;

    let mut d = vec![0.0f32; n];
    d[0] = 3.0 * (points[1] - points[0]);
    for i in 1..n - 1 {
        d[i] = 3.0 * (points[i + 1] - points[i - 1]);
    }
    d[n - 1] = 3.0 * (points[n - 1] - points[n - 2]);

    solve_tridiagonal(&a, &b, &c, &d)
}
