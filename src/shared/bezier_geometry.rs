//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird vom Pfad-Aufbau, von der CLI und von Tests genutzt,
//! ohne vom Solver abzuhängen.

use glam::DVec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn cubic_bezier_derivative(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// B''(t) = 6(1-t)·(P2 - 2P1 + P0) + 6t·(P3 - 2P2 + P1)
pub fn cubic_bezier_second_derivative(
    p0: DVec2,
    p1: DVec2,
    p2: DVec2,
    p3: DVec2,
    t: f64,
) -> DVec2 {
    6.0 * (1.0 - t) * (p2 - 2.0 * p1 + p0) + 6.0 * t * (p3 - 2.0 * p2 + p1)
}

/// Tastet eine Kette kubischer Segmente zu einer Polyline ab.
///
/// `segments` liefert je Segment `(start, cp1, cp2, end)`.
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn flatten_cubic_chain(
    segments: &[(DVec2, DVec2, DVec2, DVec2)],
    samples_per_segment: usize,
) -> Vec<DVec2> {
    let Some(&(first, ..)) = segments.first() else {
        return Vec::new();
    };
    let samples = samples_per_segment.max(1);

    let mut result = Vec::with_capacity(segments.len() * samples + 1);
    result.push(first);
    for &(p0, p1, p2, p3) in segments {
        for i in 1..=samples {
            let t = i as f64 / samples as f64;
            result.push(cubic_bezier_point(p0, p1, p2, p3, t));
        }
    }
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Prüft, ob zwei Richtungen parallel und gleich orientiert sind.
///
/// Nullvektoren gelten als parallel zu allem.
pub fn same_direction(a: DVec2, b: DVec2, tolerance: f64) -> bool {
    let scale = a.length() * b.length();
    if scale <= f64::EPSILON {
        return true;
    }
    a.perp_dot(b).abs() <= tolerance * scale && a.dot(b) >= 0.0
}
