//! Helper functions for integration tests

use pinnprep_rs::data::TrainingSet;
use pinnprep_rs::problem::{AxisBounds, ProblemSpec};

/// 2D steady specification on the unit square
pub fn unit_square_spec() -> ProblemSpec {
    ProblemSpec::steady(2, vec![AxisBounds::new(0.0, 1.0), AxisBounds::new(0.0, 1.0)]).unwrap()
}

/// Boundary samples of a 1D problem on [0, 1]: endpoints plus targets
pub fn boundary_rows_1d() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let x = vec![vec![0.0], vec![1.0]];
    let y = vec![vec![0.0], vec![1.0]];
    (x, y)
}

/// Boundary/initial samples for a 1D transient problem (x, t) with
/// target u(x, t) = x + t
pub fn boundary_rows_2d_transient(samples: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut x = Vec::with_capacity(samples);
    let mut y = Vec::with_capacity(samples);
    for i in 0..samples {
        let coord = i as f64 / samples.max(1) as f64;
        // Alternate between the spatial boundary and the initial slice
        let row = if i % 2 == 0 {
            vec![0.0, coord]
        } else {
            vec![coord, 0.0]
        };
        y.push(vec![row[0] + row[1]]);
        x.push(row);
    }
    (x, y)
}

/// Count rows per provenance flag: `(observed, collocation)`
pub fn count_by_provenance(set: &TrainingSet) -> (usize, usize) {
    let mut observed = 0;
    let mut collocation = 0;
    for row in 0..set.num_points() {
        if set.labels.is_observed(row) {
            observed += 1;
        } else {
            collocation += 1;
        }
    }
    (observed, collocation)
}
