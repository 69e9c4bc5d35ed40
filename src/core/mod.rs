//! Core-Domänentypen: Punkte, Segmente, Solver, Pfad, Knoten-Lieferanten.

pub mod error;
pub mod knot_source;
pub mod path;
pub mod point;
pub mod segment;
/// Kontrollpunkt-Berechnung für glatte kubische Splines
///
/// Der Solver ist zustandslos und rein funktional:
/// - Knotenfolge rein, Segmentfolge raus
/// - `solve` panict bei verletzter interner Invariante, `try_solve` liefert sie als Fehler
pub mod solver;
pub mod tridiagonal;

pub use error::SplineError;
pub use knot_source::{ChartSeries, KnotSource, ScaledChart, DEFAULT_VALUE_MAX, DEMO_VALUES};
pub use path::{BezierPath, PathCommand};
pub use point::SplinePoint;
pub use segment::CubicCurveSegment;
pub use solver::SplineSolver;
pub use tridiagonal::TridiagonalSystem;
