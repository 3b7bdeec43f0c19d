//! pinnprep-rs: PINN Training Data Preparation Framework
//!
//! A library for assembling training-ready datasets for physics-informed
//! neural network (PINN) solvers. Built with Rust for performance and
//! safety.
//!
//! # Architecture
//!
//! pinnprep-rs is built on two core principles:
//!
//! 1. **Separation of Shape and Randomness**
//!    - The problem specification fixes the shapes (what a valid row is)
//!    - Sampling distributions fill the interior (where points come from)
//!
//! 2. **Explicit Provenance**
//!    - Every label row carries a trailing flag: `1.0` for genuine
//!      observed data, `0.0` for synthetic collocation points
//!    - The training loss reads the flag to choose between a data-fitting
//!      term and a physics-residual term per row
//!
//! # Quick Start
//!
//! ```rust
//! use pinnprep_rs::prelude::*;
//!
//! fn main() -> Result<(), PrepError> {
//!     // 1. Describe the problem: 1D spatial domain [0, 1], steady
//!     let spec = ProblemSpec::steady(1, vec![AxisBounds::new(0.0, 1.0)])?;
//!
//!     // 2. Boundary condition samples
//!     let x_data = vec![vec![0.0], vec![1.0]];
//!     let y_data = vec![vec![0.0], vec![0.0]];
//!
//!     // 3. Assemble: observed rows plus 8 generated interior points
//!     let assembler = TrainingSetAssembler::new(spec);
//!     let training = assembler.assemble(
//!         &x_data,
//!         &y_data,
//!         CollocationSpec::Count(8),
//!         None,
//!     )?;
//!
//!     // 4. One column per coordinate, provenance-tagged labels
//!     assert_eq!(training.num_features(), 1);
//!     assert_eq!(training.num_points(), 10);
//!     assert!(training.labels.is_observed(0));
//!     assert!(!training.labels.is_observed(9));
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`problem`]: Problem specification (dimensions, domain bounds)
//! - [`data`]: Canonical batch containers and the input formatter
//! - [`assembly`]: Collocation sampling and training-set assembly
//! - [`io`]: CSV persistence adapters (outside the assembly core)
//! - [`error`]: The error taxonomy

pub mod assembly;
pub mod data;
pub mod error;
pub mod io;
pub mod problem;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use pinnprep_rs::prelude::*;
    //! ```
    pub use crate::assembly::{
        AssemblyOptions, CollocationSpec, Distribution, TrainingSetAssembler,
    };
    pub use crate::data::{
        InputFormatter, LabelBatch, PointBatch, TrainingSet, PROVENANCE_COLLOCATION,
        PROVENANCE_OBSERVED,
    };
    pub use crate::error::PrepError;
    pub use crate::problem::{AxisBounds, ProblemSpec};
}
