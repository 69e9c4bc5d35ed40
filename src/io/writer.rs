//! Writer für berechnete Segmente.

use crate::core::{BezierPath, CubicCurveSegment};
use crate::shared::{OutputFormat, SolverOptions};
use anyhow::Result;
use glam::DVec2;

/// Formatiert Knoten und Segmente im gewünschten Format.
///
/// # Parameter
/// - `knots`: Die Knotenfolge, aus der `segments` berechnet wurde
/// - `segments`: Ergebnis des Solvers
/// - `format`: Ausgabeformat
/// - `options`: Präzision und Abtastdichte
pub fn write_segments(
    knots: &[DVec2],
    segments: &[CubicCurveSegment],
    format: OutputFormat,
    options: &SolverOptions,
) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(segments)?,
        OutputFormat::Text => segments_as_text(segments, options.precision),
        OutputFormat::Svg => BezierPath::from_parts(knots, segments)
            .to_svg_path_data(options.precision),
        OutputFormat::Polyline => {
            let points = BezierPath::from_parts(knots, segments)
                .flatten(options.effective_samples());
            points_as_text(&points, options.precision)
        }
    };
    Ok(output)
}

/// Eine Zeile pro Segment: `cp1.x cp1.y cp2.x cp2.y`.
fn segments_as_text(segments: &[CubicCurveSegment], precision: usize) -> String {
    segments
        .iter()
        .map(|seg| {
            format!(
                "{:.p$} {:.p$} {:.p$} {:.p$}\n",
                seg.control_point1.x,
                seg.control_point1.y,
                seg.control_point2.x,
                seg.control_point2.y,
                p = precision
            )
        })
        .collect()
}

fn points_as_text(points: &[DVec2], precision: usize) -> String {
    points
        .iter()
        .map(|p| format!("{:.p$} {:.p$}\n", p.x, p.y, p = precision))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SplineSolver;

    fn sample() -> (Vec<DVec2>, Vec<CubicCurveSegment>) {
        let knots = vec![DVec2::new(0.0, 0.0), DVec2::new(9.0, 0.0)];
        let segments = SplineSolver::solve(&knots);
        (knots, segments)
    }

    #[test]
    fn test_text_output_one_line_per_segment() {
        let (knots, segments) = sample();
        let out =
            write_segments(&knots, &segments, OutputFormat::Text, &SolverOptions::default())
                .unwrap();
        assert_eq!(out, "3.000 0.000 6.000 0.000\n");
    }

    #[test]
    fn test_json_output_uses_field_names() {
        let (knots, segments) = sample();
        let out =
            write_segments(&knots, &segments, OutputFormat::Json, &SolverOptions::default())
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["control_point1"][0], 3.0);
        assert_eq!(value[0]["control_point2"][0], 6.0);
    }

    #[test]
    fn test_svg_output() {
        let (knots, segments) = sample();
        let out =
            write_segments(&knots, &segments, OutputFormat::Svg, &SolverOptions::default())
                .unwrap();
        assert_eq!(out, "M 0 0 C 3 0 6 0 9 0");
    }

    #[test]
    fn test_polyline_output_point_count() {
        let (knots, segments) = sample();
        let options = SolverOptions {
            samples_per_segment: 4,
            precision: 1,
            ..SolverOptions::default()
        };
        let out = write_segments(&knots, &segments, OutputFormat::Polyline, &options).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert_eq!(out.lines().last(), Some("9.0 0.0"));
    }

    #[test]
    fn test_empty_segments() {
        let out = write_segments(&[], &[], OutputFormat::Json, &SolverOptions::default()).unwrap();
        assert_eq!(out, "[]");
    }
}
