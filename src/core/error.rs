//! Fehlertypen des Spline-Solvers.
//!
//! Leere Eingaben oder ein einzelner Knoten sind kein Fehler. Jede Variante
//! hier bedeutet, dass die Koeffizienten-Tabelle oder die Ableitung der
//! Kontrollpunkte defekt ist.

use thiserror::Error;

/// Verletzte interne Invariante beim Lösen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Pivot-Element der Elimination ist null oder nicht endlich.
    #[error("Pivot in Zeile {row} ist {pivot}, Tridiagonal-System nicht lösbar")]
    ZeroPivot { row: usize, pivot: f64 },

    /// Kontrollpunkt wurde gelesen, aber nie berechnet.
    #[error("Kontrollpunkt {index} fehlt nach der Rücksubstitution")]
    MissingControlPoint { index: usize },

    /// Anzahl der erzeugten Segmente passt nicht zur Knotenanzahl.
    #[error("{actual} Segmente erzeugt, erwartet {expected}")]
    SegmentCountMismatch { expected: usize, actual: usize },
}
