//! Thomas-Algorithmus für tridiagonale Gleichungssysteme.
//!
//! Zugeschnitten auf die schmalen Bandmuster der Tangentengenerierung
//! (Diagonale 1/2/4, Nebendiagonalen 0/1) — kein allgemeiner Löser.

use anyhow::{bail, Result};

/// Löst `A·x = d` für eine tridiagonale Matrix A.
///
/// `a` ist die Sub-Diagonale, `b` die Diagonale, `c` die Super-Diagonale;
/// pro Zeile gilt `a[i]·x[i-1] + b[i]·x[i] + c[i]·x[i+1] = d[i]`.
/// `a[0]` und `c[n-1]` sind per Konvention 0 und werden nicht ausgewertet.
///
/// Kein Pivoting: Der Aufrufer garantiert Diagonaldominanz. Nähert sich
/// `b[i] − c'[i-1]·a[i]` der Null, kippt das Ergebnis in Inf/NaN.
pub fn solve_tridiagonal(a: &[f32], b: &[f32], c: &[f32], d: &[f32]) -> Result<Vec<f32>> {
    let n = a.len();
    if b.len() != n || c.len() != n || d.len() != n {
        bail!(
            "a, b, c und d müssen gleich lang sein (a={}, b={}, c={}, d={})",
            n,
            b.len(),
            c.len(),
            d.len()
        );
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Vorwärts-Elimination: modifizierte Koeffizienten c' und d'
    let mut c_dash = vec![0.0f32; n];
    c_dash[0] = c[0] / b[0];
    for i in 1..n {
        c_dash[i] = c[i] / (b[i] - c_dash[i - 1] * a[i]);
    }

    let mut d_dash = vec![0.0f32; n];
    d_dash[0] = d[0] / b[0];
    for i in 1..n {
        d_dash[i] = (d[i] - d_dash[i - 1] * a[i]) / (b[i] - c_dash[i - 1] * a[i]);
    }

    // Rückwärts-Substitution
    let mut x = vec![0.0f32; n];
    x[n - 1] = d_dash[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_dash[i] - c_dash[i] * x[i + 1];
    }

    Ok(x)
}
