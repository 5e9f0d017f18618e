//! Repräsentiert einen Kontrollpunkt der Hermite-Kurve.

use glam::Vec2;

/// Ein vom Benutzer gesetzter Ankerpunkt mit Position und Tangente.
///
/// Die Position stammt aus der Punkt-Platzierung des Editors; die Tangente
/// ist entweder manuell gesetzt oder wird von der Tangentengenerierung
/// überschrieben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Bildkoordinaten
    pub position: Vec2,
    /// Tangente am Kontrollpunkt
    pub tangent: Vec2,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt
    pub fn new(position: Vec2, tangent: Vec2) -> Self {
        Self { position, tangent }
    }
}
