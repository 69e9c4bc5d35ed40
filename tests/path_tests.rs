//! Integrationstests für Pfad-Aufbau, Knoten-Lieferanten und Ein-/Ausgabe.

use approx::assert_relative_eq;
use glam::DVec2;
use smooth_bezier::core::{ChartSeries, KnotSource, DEMO_VALUES};
use smooth_bezier::io::{parse_knots, write_segments};
use smooth_bezier::shared::bezier_geometry::polyline_length;
use smooth_bezier::{BezierPath, OutputFormat, PathCommand, SolverOptions, SplineSolver};

#[test]
fn test_path_follows_move_then_curve_contract() {
    let knots = [
        DVec2::new(0.0, 100.0),
        DVec2::new(50.0, 20.0),
        DVec2::new(100.0, 100.0),
    ];
    let segments = SplineSolver::solve(&knots);
    let path = BezierPath::from_knots(&knots);

    let commands = path.commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], PathCommand::MoveTo(knots[0]));
    for i in 0..segments.len() {
        assert_eq!(
            commands[i + 1],
            PathCommand::CurveTo {
                control_point1: segments[i].control_point1,
                control_point2: segments[i].control_point2,
                to: knots[i + 1],
            }
        );
    }
}

#[test]
fn test_curve_count_matches_knots() {
    for n in 0usize..12 {
        let knots: Vec<DVec2> = (0..n).map(|i| DVec2::new(i as f64, (i % 3) as f64)).collect();
        let path = BezierPath::from_knots(&knots);
        assert_eq!(path.curve_count(), n.saturating_sub(1));
    }
}

#[test]
fn test_flattened_demo_chart_passes_through_knots() {
    let series = ChartSeries::demo();
    let knots = series.in_view(600.0, 255.0).knots();
    let path = BezierPath::from_knots(&knots);

    let samples = 10;
    let polyline = path.flatten(samples);
    assert_eq!(polyline.len(), (knots.len() - 1) * samples + 1);
    for (i, knot) in knots.iter().enumerate() {
        let p = polyline[i * samples];
        assert!(p.abs_diff_eq(*knot, 1e-9), "Knoten {i}: {:?} vs {:?}", p, knot);
    }
}

#[test]
fn test_flattened_curve_is_not_shorter_than_knot_polygon() {
    let knots = ChartSeries::demo().knots_in(600.0, 255.0);
    let curve = BezierPath::from_knots(&knots).flatten(32);

    let chord = polyline_length(&knots);
    let length = polyline_length(&curve);
    assert!(length >= chord - 1e-9, "{length} < {chord}");
    // Das Tal ist weich, die Kurve bleibt nahe am Polygon
    assert!(length < chord * 1.2, "{length} vs {chord}");
}

#[test]
fn test_demo_chart_is_mirror_symmetric() {
    // Beispiel-Reihe ist symmetrisch → Kurve spiegelt sich an x = width/2
    let width = 600.0;
    let knots = ChartSeries::demo().knots_in(width, 255.0);
    let segments = SplineSolver::solve(&knots);
    let n = segments.len();
    assert_eq!(n, DEMO_VALUES.len() - 1);

    for i in 0..n {
        let a = segments[i];
        let b = segments[n - 1 - i];
        assert_relative_eq!(a.control_point1.x, width - b.control_point2.x, epsilon = 1e-9);
        assert_relative_eq!(a.control_point1.y, b.control_point2.y, epsilon = 1e-9);
    }
}

#[test]
fn test_fixture_file_to_svg() {
    let content = include_str!("fixtures/peak_knots.txt");
    let knots = parse_knots(content).expect("Fixture muss parsebar sein");
    assert_eq!(knots.len(), 3);

    let segments = SplineSolver::solve(&knots);
    let options = SolverOptions {
        precision: 2,
        ..SolverOptions::default()
    };
    let svg = write_segments(&knots, &segments, OutputFormat::Svg, &options).unwrap();
    assert_eq!(
        svg,
        "M 0 100 C 16.67 60 33.33 20 50 20 C 66.67 20 83.33 60 100 100"
    );
}

#[test]
fn test_closure_source_feeds_solver() {
    let source = || vec![DVec2::new(0.0, 0.0), DVec2::new(6.0, 3.0)];
    let segments = SplineSolver::solve(&source.knots());
    assert_eq!(segments.len(), 1);
    assert!(segments[0].control_point1.abs_diff_eq(DVec2::new(2.0, 1.0), 1e-12));
}

#[test]
fn test_options_file_roundtrip() {
    let dir = std::env::temp_dir().join(format!("smooth_bezier_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("smooth_bezier.toml");

    let options = SolverOptions {
        view_width: 1024.0,
        output_format: OutputFormat::Polyline,
        ..SolverOptions::default()
    };
    options.save_to_file(&path).expect("Speichern muss klappen");
    let loaded = SolverOptions::load_from_file(&path);
    assert_eq!(loaded, options);

    std::fs::remove_dir_all(&dir).ok();
}
