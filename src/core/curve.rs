//! Das zentrale Kurven-Aggregat: Kontrollpunkte, Tangenten und Sampling-Caches.

use anyhow::Result;
use glam::Vec2;

use super::ControlPoint;
use crate::shared::hermite_geometry::{
    approx_segment_length, interpolate_segment, interpolate_tangent, CURVE_SAMPLES_PER_SEGMENT,
};
use crate::shared::tangent_generation::{
    clamped_end_tangents_1d, natural_spline_tangents_1d, MIN_POINTS_FOR_TANGENTS,
};

/// Mindestanzahl Kontrollpunkte, unterhalb derer das Sampling leere Caches liefert.
pub const MIN_POINTS_FOR_CURVE: usize = 2;

/// Callback-Slot für Änderungs-Benachrichtigungen (genau ein Abonnent).
type ChangeCallback = Box<dyn FnMut()>;

/// Eine stückweise kubische Hermite-Kurve über einer geordneten
/// Kontrollpunkt-Folge.
///
/// Das Aggregat besitzt die Punkte exklusiv und hält zwei abgeleitete Caches
/// (`curve_points`, `curve_tangents`), die erst nach `generate_curve` gültig
/// sind. Es gibt keine automatische Neuberechnung: Nach Mutationen muss der
/// Aufrufer Tangenten- und Kurvengenerierung explizit anstoßen, typisch aus
/// dem registrierten Change-Callback heraus.
pub struct HermiteCurve {
    /// Geordnete Kontrollpunkte; Reihenfolge = Segment-Nachbarschaft (append-only)
    points: Vec<ControlPoint>,
    /// Gesampelte Kurvenpositionen (11 Stützstellen pro Segment)
    curve_points: Vec<Vec2>,
    /// Gesampelte Einheits-Normalen, index-gleich zu `curve_points`
    curve_tangents: Vec<Vec2>,
    /// Änderungs-Callback; letzte Registrierung gewinnt
    on_change: Option<ChangeCallback>,
}

impl HermiteCurve {
    /// Erstellt eine leere Kurve ohne registrierten Callback
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            curve_points: Vec::new(),
            curve_tangents: Vec::new(),
            on_change: None,
        }
    }

    /// Hängt einen Kontrollpunkt ans Ende der Folge an und feuert den Callback
    pub fn add_point(&mut self, x: f32, y: f32, tangent_x: f32, tangent_y: f32) {
        self.points.push(ControlPoint::new(
            Vec2::new(x, y),
            Vec2::new(tangent_x, tangent_y),
        ));
        self.notify_change();
    }

    /// Leert Kontrollpunkte und beide Sampling-Caches und feuert den Callback
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.curve_points.clear();
        self.curve_tangents.clear();
        self.notify_change();
    }

    /// Registriert den einzigen Änderungs-Callback (ersetzt eine frühere Registrierung).
    ///
    /// Der Callback läuft synchron auf dem Stack der mutierenden Operation,
    /// nachdem die Mutation angewendet wurde. Er stößt keine Neuberechnung
    /// an — das bleibt dem Abonnenten überlassen.
    pub fn on_change_handler(&mut self, callback: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    fn notify_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }

    /// Berechnet alle Tangenten neu; Rand-Tangenten bleiben fest (Clamped-End).
    ///
    /// Als Randwerte dienen die *aktuellen* Tangenten-Komponenten des ersten
    /// und letzten Punkts. Bei weniger als 3 Punkten bleiben alle Tangenten
    /// unverändert (stiller No-op, kein Fehler).
    pub fn generate_tangents_clamped_end(&mut self) -> Result<()> {
        if self.points.len() < MIN_POINTS_FOR_TANGENTS {
            log::debug!(
                "Tangentengenerierung übersprungen: {} Punkte",
                self.points.len()
            );
            return Ok(());
        }

        let (xs, ys) = self.split_axes();
        let start = self.points[0].tangent;
        let end = self.points[self.points.len() - 1].tangent;

        let x_tangents = clamped_end_tangents_1d(&xs, start.x, end.x)?;
        let y_tangents = clamped_end_tangents_1d(&ys, start.y, end.y)?;

        self.apply_tangents(&x_tangents, &y_tangents);
        Ok(())
    }

    /// Berechnet alle Tangenten neu mit Natural-Spline-Randbedingung
    /// (zweite Ableitung an beiden Enden = 0).
    ///
    /// Bei weniger als 3 Punkten bleiben alle Tangenten unverändert.
    pub fn generate_tangents_natural_spline(&mut self) -> Result<()> {
        if self.points.len() < MIN_POINTS_FOR_TANGENTS {
            log::debug!(
                "Tangentengenerierung übersprungen: {} Punkte",
                self.points.len()
            );
            return Ok(());
        }

        let (xs, ys) = self.split_axes();
        let x_tangents = natural_spline_tangents_1d(&xs)?;
        let y_tangents = natural_spline_tangents_1d(&ys)?;

        self.apply_tangents(&x_tangents, &y_tangents);
        Ok(())
    }

    /// Sampelt die gesamte Kurve neu in `curve_points`/`curve_tangents`.
    ///
    /// Pro Segment entstehen 11 Stützstellen (`u = 0, 0.1, …, 1.0`);
    /// gemeinsame Segmentgrenzen werden bewusst doppelt gesampelt, jedes
    /// Segment liefert beide Endpunkte selbst. Bei weniger als 2 Punkten
    /// bleiben beide Caches leer.
    pub fn generate_curve(&mut self) {
        self.curve_points.clear();
        self.curve_tangents.clear();

        if self.points.len() < MIN_POINTS_FOR_CURVE {
            return;
        }

        let expected = (self.points.len() - 1) * (CURVE_SAMPLES_PER_SEGMENT + 1);
        self.curve_points.reserve(expected);
        self.curve_tangents.reserve(expected);

        for pair in self.points.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            for i in 0..=CURVE_SAMPLES_PER_SEGMENT {
                let u = i as f32 / CURVE_SAMPLES_PER_SEGMENT as f32;
                self.curve_points.push(interpolate_segment(
                    p0.position,
                    p1.position,
                    p0.tangent,
                    p1.tangent,
                    u,
                ));
                self.curve_tangents.push(interpolate_tangent(
                    p0.position,
                    p1.position,
                    p0.tangent,
                    p1.tangent,
                    u,
                ));
            }
        }

        log::debug!(
            "Kurve neu gesampelt: {} Segmente, {} Stützstellen",
            self.points.len() - 1,
            self.curve_points.len()
        );
    }

    /// Approximierte Gesamtlänge der Kurve über alle Segmente (Polylinien-Näherung).
    pub fn approx_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| {
                approx_segment_length(
                    pair[0].position,
                    pair[1].position,
                    pair[0].tangent,
                    pair[1].tangent,
                )
            })
            .sum()
    }

    /// Geordnete Kontrollpunkt-Folge (read-only)
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Gesampelte Kurvenpositionen; leer bis zum ersten `generate_curve`
    pub fn curve_points(&self) -> &[Vec2] {
        &self.curve_points
    }

    /// Gesampelte Einheits-Normalen, index-gleich zu `curve_points`
    pub fn curve_tangents(&self) -> &[Vec2] {
        &self.curve_tangents
    }

    /// Anzahl der Kontrollpunkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Kurven-Stützstellen
    pub fn sample_count(&self) -> usize {
        self.curve_points.len()
    }

    /// Koordinatenfolgen beider Achsen für die 1-D-Tangentengenerierung
    fn split_axes(&self) -> (Vec<f32>, Vec<f32>) {
        let xs = self.points.iter().map(|p| p.position.x).collect();
        let ys = self.points.iter().map(|p| p.position.y).collect();
        (xs, ys)
    }

    /// Schreibt pro Achse generierte Tangenten-Komponenten in die Punkte zurück.
    ///
    /// Leere Generator-Ergebnisse lassen alle Tangenten unverändert.
    fn apply_tangents(&mut self, x_tangents: &[f32], y_tangents: &[f32]) {
        for (i, (tx, ty)) in x_tangents.iter().zip(y_tangents.iter()).enumerate() {
            self.points[i].tangent = Vec2::new(*tx, *ty);
        }
    }
}

impl Default for HermiteCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HermiteCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HermiteCurve")
            .field("points", &self.points)
            .field("curve_points", &self.curve_points.len())
            .field("curve_tangents", &self.curve_tangents.len())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
