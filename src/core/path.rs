//! Zusammenbau einer durchgehenden Bézier-Kurve aus Knoten und Segmenten.
//!
//! Backend-neutral: erzeugt nur eine Befehlsliste (`MoveTo`/`CurveTo`),
//! die ein Zeichen-Backend abarbeiten kann. Zusätzlich als SVG-Pfaddaten
//! exportierbar.

use super::point::SplinePoint;
use super::segment::CubicCurveSegment;
use super::solver::SplineSolver;
use crate::shared::bezier_geometry::flatten_cubic_chain;
use glam::DVec2;

/// Einzelner Pfadbefehl
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Neuer Startpunkt
    MoveTo(DVec2),
    /// Kubisches Segment vom aktuellen Punkt nach `to`
    CurveTo {
        control_point1: DVec2,
        control_point2: DVec2,
        to: DVec2,
    },
}

/// Geordnete Liste von Pfadbefehlen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierPath {
    commands: Vec<PathCommand>,
}

impl BezierPath {
    /// Erstellt einen leeren Pfad
    pub fn new() -> Self {
        Self::default()
    }

    /// Löst die Knotenfolge und baut daraus den Pfad.
    pub fn from_knots<P: SplinePoint>(knots: &[P]) -> Self {
        let segments = SplineSolver::solve(knots);
        Self::from_parts(knots, &segments)
    }

    /// Baut den Pfad aus bereits berechneten Segmenten.
    ///
    /// `moveTo(knots[0])`, danach je Segment `curveTo(knots[i + 1], cp1, cp2)`.
    /// Überzählige Knoten oder Segmente werden ignoriert.
    pub fn from_parts<P: SplinePoint>(knots: &[P], segments: &[CubicCurveSegment<P>]) -> Self {
        let mut path = Self::new();
        let Some(first) = knots.first() else {
            return path;
        };

        path.move_to(first.to_dvec2());
        for (knot, segment) in knots[1..].iter().zip(segments) {
            path.curve_to(
                segment.control_point1.to_dvec2(),
                segment.control_point2.to_dvec2(),
                knot.to_dvec2(),
            );
        }

        if segments.len() + 1 != knots.len() {
            log::debug!(
                "BezierPath: {} Knoten, {} Segmente — Überschuss ignoriert",
                knots.len(),
                segments.len()
            );
        }
        path
    }

    pub fn move_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn curve_to(&mut self, control_point1: DVec2, control_point2: DVec2, to: DVec2) {
        self.commands.push(PathCommand::CurveTo {
            control_point1,
            control_point2,
            to,
        });
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Anzahl der kubischen Segmente im Pfad.
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count()
    }

    /// Zerlegt den Pfad in `(start, cp1, cp2, end)`-Tupel.
    ///
    /// `CurveTo` ohne vorheriges `MoveTo` wird übersprungen.
    pub fn cubic_segments(&self) -> Vec<(DVec2, DVec2, DVec2, DVec2)> {
        let mut result = Vec::with_capacity(self.commands.len());
        let mut current: Option<DVec2> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => current = Some(p),
                PathCommand::CurveTo {
                    control_point1,
                    control_point2,
                    to,
                } => {
                    if let Some(start) = current {
                        result.push((start, control_point1, control_point2, to));
                    }
                    current = Some(to);
                }
            }
        }
        result
    }

    /// Tastet den Pfad zu einer Polyline ab (für Backends ohne Bézier-Support).
    pub fn flatten(&self, samples_per_segment: usize) -> Vec<DVec2> {
        let segments = self.cubic_segments();
        if segments.is_empty() {
            // Einzelner Knoten: nur der Startpunkt
            return self
                .commands
                .iter()
                .find_map(|c| match c {
                    PathCommand::MoveTo(p) => Some(*p),
                    PathCommand::CurveTo { .. } => None,
                })
                .into_iter()
                .collect();
        }
        flatten_cubic_chain(&segments, samples_per_segment)
    }

    /// SVG-Pfaddaten (`M x y C x1 y1 x2 y2 x y …`) mit `precision` Nachkommastellen.
    pub fn to_svg_path_data(&self, precision: usize) -> String {
        self.commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => format!("M {}", fmt_point(p, precision)),
                PathCommand::CurveTo {
                    control_point1,
                    control_point2,
                    to,
                } => format!(
                    "C {} {} {}",
                    fmt_point(control_point1, precision),
                    fmt_point(control_point2, precision),
                    fmt_point(to, precision)
                ),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn fmt_point(p: DVec2, precision: usize) -> String {
    format!(
        "{} {}",
        fmt_number(p.x, precision),
        fmt_number(p.y, precision)
    )
}

/// Formatiert ohne überflüssige Nullen und ohne `-0`.
fn fmt_number(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}
