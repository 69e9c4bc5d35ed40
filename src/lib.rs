//! smooth-bezier Library.
//! Berechnet Kontrollpunkte für glatte kubische Bézier-Kurven durch eine Knotenfolge.

pub mod core;
pub mod io;
pub mod shared;

pub use crate::core::{
    BezierPath, ChartSeries, CubicCurveSegment, KnotSource, PathCommand, SplineError,
    SplinePoint, SplineSolver,
};
pub use crate::io::{parse_knots, write_segments};
pub use crate::shared::{OutputFormat, SolverOptions};
