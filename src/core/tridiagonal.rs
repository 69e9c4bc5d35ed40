//! Tridiagonales Gleichungssystem mit zweikomponentiger rechter Seite.
//!
//! Die x- und y-Komponenten teilen sich dieselben Koeffizienten und werden
//! im Gleichschritt eliminiert (Thomas-Algorithmus).

use super::error::SplineError;
use glam::DVec2;

/// Tridiagonales System `A·x = r` mit Zeilen `(a, b, c | r)`.
///
/// `a` ist die Unterdiagonale (in Zeile 0 ignoriert), `b` die Hauptdiagonale,
/// `c` die Oberdiagonale (in der letzten Zeile ignoriert).
#[derive(Debug, Clone, Default)]
pub struct TridiagonalSystem {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
    rhs: Vec<DVec2>,
}

impl TridiagonalSystem {
    /// Leeres System mit reservierter Kapazität für `rows` Zeilen.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            lower: Vec::with_capacity(rows),
            diag: Vec::with_capacity(rows),
            upper: Vec::with_capacity(rows),
            rhs: Vec::with_capacity(rows),
        }
    }

    /// Hängt eine Zeile an.
    pub fn push_row(&mut self, lower: f64, diag: f64, upper: f64, rhs: DVec2) {
        self.lower.push(lower);
        self.diag.push(diag);
        self.upper.push(upper);
        self.rhs.push(rhs);
    }

    /// Anzahl der Zeilen (= Unbekannten).
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Löst das System per Vorwärts-Elimination und Rücksubstitution.
    ///
    /// Konsumiert das System, da Diagonale und rechte Seite in-place
    /// überschrieben werden.
    pub fn solve(mut self) -> Result<Vec<DVec2>, SplineError> {
        let n = self.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        // Vorwärts-Elimination
        for i in 1..n {
            let pivot = checked_pivot(self.diag[i - 1], i - 1)?;
            let m = self.lower[i] / pivot;
            self.diag[i] -= m * self.upper[i - 1];
            let prev = self.rhs[i - 1];
            self.rhs[i] -= m * prev;
        }

        // Rücksubstitution
        let mut solution = vec![DVec2::ZERO; n];
        let last = checked_pivot(self.diag[n - 1], n - 1)?;
        solution[n - 1] = self.rhs[n - 1] / last;
        for i in (0..n - 1).rev() {
            let pivot = checked_pivot(self.diag[i], i)?;
            solution[i] = (self.rhs[i] - self.upper[i] * solution[i + 1]) / pivot;
        }

        Ok(solution)
    }
}

/// Gibt das Pivot zurück, falls es als Divisor taugt.
fn checked_pivot(pivot: f64, row: usize) -> Result<f64, SplineError> {
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(SplineError::ZeroPivot { row, pivot });
    }
    Ok(pivot)
}
