//! Punkt-Abstraktion für Knoten und Kontrollpunkte.
//!
//! Gerechnet wird immer in `f64` (`DVec2`). Eingaben in geringerer Präzision
//! werden vor dem Lösen hochkonvertiert und erst bei der Ausgabe wieder
//! in den Aufrufer-Typ zurückgewandelt.

use glam::{DVec2, Vec2};

/// Punkttyp, der vom Spline-Solver verarbeitet werden kann.
pub trait SplinePoint: Copy {
    /// Konvertiert in doppelte Genauigkeit.
    fn to_dvec2(self) -> DVec2;
    /// Konvertiert aus doppelter Genauigkeit zurück.
    fn from_dvec2(point: DVec2) -> Self;
}

impl SplinePoint for DVec2 {
    #[inline]
    fn to_dvec2(self) -> DVec2 {
        self
    }

    #[inline]
    fn from_dvec2(point: DVec2) -> Self {
        point
    }
}

impl SplinePoint for Vec2 {
    #[inline]
    fn to_dvec2(self) -> DVec2 {
        self.as_dvec2()
    }

    #[inline]
    fn from_dvec2(point: DVec2) -> Self {
        point.as_vec2()
    }
}

impl SplinePoint for [f64; 2] {
    #[inline]
    fn to_dvec2(self) -> DVec2 {
        DVec2::from_array(self)
    }

    #[inline]
    fn from_dvec2(point: DVec2) -> Self {
        point.to_array()
    }
}

impl SplinePoint for [f32; 2] {
    #[inline]
    fn to_dvec2(self) -> DVec2 {
        DVec2::new(self[0] as f64, self[1] as f64)
    }

    #[inline]
    fn from_dvec2(point: DVec2) -> Self {
        [point.x as f32, point.y as f32]
    }
}

impl SplinePoint for (f64, f64) {
    #[inline]
    fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.0, self.1)
    }

    #[inline]
    fn from_dvec2(point: DVec2) -> Self {
        (point.x, point.y)
    }
}
