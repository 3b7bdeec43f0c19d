//! 1D Poisson Problem Data Preparation
//!
//! -u''(x) = f(x) on [0, 1], u(0) = u(1) = 0
//!
//! Prepares a PINN training set from the two Dirichlet boundary samples
//! plus uniformly generated interior collocation points, then exports the
//! combined labels for inspection.

use pinnprep_rs::assembly::{CollocationSpec, TrainingSetAssembler};
use pinnprep_rs::error::PrepError;
use pinnprep_rs::io::save_to_csv;
use pinnprep_rs::problem::{AxisBounds, ProblemSpec};

fn main() -> Result<(), PrepError> {
    env_logger::init();

    // 1D spatial domain [0, 1], no time axis
    let spec = ProblemSpec::steady(1, vec![AxisBounds::new(0.0, 1.0)])?;
    let assembler = TrainingSetAssembler::with_seed(spec, 2024);

    // Homogeneous Dirichlet boundary samples
    let x_data = vec![vec![0.0], vec![1.0]];
    let y_data = vec![vec![0.0], vec![0.0]];

    let training = assembler.assemble(&x_data, &y_data, CollocationSpec::Count(64), None)?;

    println!("prepared {}", training.points);
    println!("         {}", training.labels);
    println!(
        "observed rows: {}",
        (0..training.num_points())
            .filter(|&row| training.labels.is_observed(row))
            .count()
    );

    let path = save_to_csv(training.labels.as_matrix(), "poisson_1d_labels")?;
    println!("labels written to {}", path.display());

    Ok(())
}
