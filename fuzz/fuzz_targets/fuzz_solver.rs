#![no_main]

use libfuzzer_sys::fuzz_target;
use smooth_bezier::SplineSolver;

// Beliebige Koordinaten (auch NaN/Inf) dürfen keine Invariante verletzen:
// Die Pivots hängen nur von der Knotenanzahl ab, nicht von den Werten.
fuzz_target!(|coords: Vec<(f64, f64)>| {
    let knots: Vec<[f64; 2]> = coords.into_iter().map(|(x, y)| [x, y]).collect();
    let segments = SplineSolver::try_solve(&knots).expect("Invariante verletzt");
    assert_eq!(segments.len(), knots.len().saturating_sub(1));
});
