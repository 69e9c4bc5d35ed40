//! Ein kubisches Bézier-Segment zwischen zwei aufeinanderfolgenden Knoten.

use super::point::SplinePoint;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kontrollpunkt-Paar eines Segments.
///
/// Die Endpunkte (Knoten) sind nicht enthalten. Segment `i` verläuft von
/// `knots[i]` nach `knots[i + 1]`, der Aufrufer liefert die Endpunkte
/// über denselben Index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicCurveSegment<P = DVec2> {
    /// Erster Kontrollpunkt (Startseite)
    pub control_point1: P,
    /// Zweiter Kontrollpunkt (Endseite)
    pub control_point2: P,
}

impl<P> CubicCurveSegment<P> {
    /// Erstellt ein neues Segment
    pub fn new(control_point1: P, control_point2: P) -> Self {
        Self {
            control_point1,
            control_point2,
        }
    }
}

impl<P: SplinePoint> CubicCurveSegment<P> {
    /// Wandelt ein `f64`-Segment in den Punkttyp des Aufrufers um.
    pub fn from_dvec2(segment: CubicCurveSegment<DVec2>) -> Self {
        Self::new(
            P::from_dvec2(segment.control_point1),
            P::from_dvec2(segment.control_point2),
        )
    }

    /// Gleiches Segment in umgekehrter Laufrichtung (Kontrollpunkte vertauscht).
    pub fn reversed(self) -> Self {
        Self::new(self.control_point2, self.control_point1)
    }
}

impl CubicCurveSegment<DVec2> {
    /// Prüft, ob beide Kontrollpunkte endlich sind.
    pub fn is_finite(&self) -> bool {
        self.control_point1.is_finite() && self.control_point2.is_finite()
    }
}
