//! Kontrollpunkt-Solver für glatte kubische Bézier-Splines.
//!
//! Zu einer geordneten Knotenfolge werden je Segment zwei Kontrollpunkte
//! bestimmt, sodass die Kurve durch alle Knoten läuft und an jedem inneren
//! Knoten C¹- (und C²-) stetig ist.
//!
//! Die ersten Kontrollpunkte aller Segmente ergeben sich aus einem
//! tridiagonalen System, die zweiten werden daraus direkt abgeleitet.

use super::error::SplineError;
use super::point::SplinePoint;
use super::segment::CubicCurveSegment;
use super::tridiagonal::TridiagonalSystem;
use glam::DVec2;

/// Koeffizienten `(a, b, c)` der ersten Zeile.
const FIRST_ROW: (f64, f64, f64) = (0.0, 2.0, 1.0);
/// Koeffizienten `(a, b, c)` der inneren Zeilen.
const INNER_ROW: (f64, f64, f64) = (1.0, 4.0, 1.0);
/// Koeffizienten `(a, b, c)` der letzten Zeile.
const LAST_ROW: (f64, f64, f64) = (2.0, 7.0, 0.0);

/// Berechnet Kontrollpunkte für eine Knotenfolge.
///
/// Zustandslos: jeder Aufruf allokiert eigene Puffer, daher beliebig
/// parallel aus mehreren Threads nutzbar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineSolver;

impl SplineSolver {
    /// Liefert `max(knots.len() - 1, 0)` Segmente.
    ///
    /// # Panics
    ///
    /// Bei einer verletzten internen Invariante (Null-Pivot, fehlender
    /// Kontrollpunkt). Das deutet auf einen Defekt der Koeffizienten hin,
    /// nicht auf ungültige Eingaben.
    pub fn solve<P: SplinePoint>(knots: &[P]) -> Vec<CubicCurveSegment<P>> {
        match Self::try_solve(knots) {
            Ok(segments) => segments,
            Err(e) => {
                log::error!("Spline-Solver: interne Invariante verletzt: {}", e);
                panic!("Spline-Solver: interne Invariante verletzt: {e}");
            }
        }
    }

    /// Wie [`SplineSolver::solve`], gibt Invarianten-Verletzungen aber als
    /// Fehler zurück.
    pub fn try_solve<P: SplinePoint>(
        knots: &[P],
    ) -> Result<Vec<CubicCurveSegment<P>>, SplineError> {
        let knots: Vec<DVec2> = knots.iter().map(|k| k.to_dvec2()).collect();
        let segments = solve_dvec2(&knots)?;
        Ok(segments
            .into_iter()
            .map(CubicCurveSegment::from_dvec2)
            .collect())
    }
}

/// Kern-Algorithmus in doppelter Genauigkeit.
fn solve_dvec2(knots: &[DVec2]) -> Result<Vec<CubicCurveSegment>, SplineError> {
    let count = knots.len().saturating_sub(1);

    let segments = match count {
        0 => Vec::new(),
        1 => vec![single_segment(knots[0], knots[1])],
        _ => {
            let first = first_control_points(knots)?;
            let second = second_control_points(knots, &first)?;
            first
                .into_iter()
                .zip(second)
                .map(|(cp1, cp2)| CubicCurveSegment::new(cp1, cp2))
                .collect()
        }
    };

    if segments.len() != count {
        return Err(SplineError::SegmentCountMismatch {
            expected: count,
            actual: segments.len(),
        });
    }

    log::trace!(
        "Spline-Solver: {} Knoten → {} Segmente",
        knots.len(),
        segments.len()
    );
    Ok(segments)
}

/// Geschlossene Lösung für genau ein Segment.
///
/// 3·P1 = 2·P0 + P3, P2 = 2·P1 − P0
fn single_segment(p0: DVec2, p3: DVec2) -> CubicCurveSegment {
    let p1 = (2.0 * p0 + p3) / 3.0;
    let p2 = 2.0 * p1 - p0;
    CubicCurveSegment::new(p1, p2)
}

/// Baut das tridiagonale System für `count >= 2` Segmente auf.
fn build_system(knots: &[DVec2]) -> TridiagonalSystem {
    let count = knots.len() - 1;
    let mut system = TridiagonalSystem::with_capacity(count);

    for (i, pair) in knots.windows(2).enumerate() {
        let (p0, p3) = (pair[0], pair[1]);
        let ((a, b, c), rhs) = if i == 0 {
            (FIRST_ROW, p0 + 2.0 * p3)
        } else if i == count - 1 {
            (LAST_ROW, 8.0 * p0 + p3)
        } else {
            (INNER_ROW, 4.0 * p0 + 2.0 * p3)
        };
        system.push_row(a, b, c, rhs);
    }

    system
}

/// Erste Kontrollpunkte aller Segmente (Thomas-Algorithmus).
fn first_control_points(knots: &[DVec2]) -> Result<Vec<DVec2>, SplineError> {
    build_system(knots).solve()
}

/// Zweite Kontrollpunkte, abgeleitet aus den ersten.
fn second_control_points(knots: &[DVec2], first: &[DVec2]) -> Result<Vec<DVec2>, SplineError> {
    let count = knots.len() - 1;
    let mut second = Vec::with_capacity(count);

    for i in 0..count {
        let p3 = knots[i + 1];
        let cp2 = if i == count - 1 {
            let p1 = control_point(first, i)?;
            (p3 + p1) / 2.0
        } else {
            let next_p1 = control_point(first, i + 1)?;
            2.0 * p3 - next_p1
        };
        second.push(cp2);
    }

    Ok(second)
}

fn control_point(points: &[DVec2], index: usize) -> Result<DVec2, SplineError> {
    points
        .get(index)
        .copied()
        .ok_or(SplineError::MissingControlPoint { index })
}
