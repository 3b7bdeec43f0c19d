//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    boundary_rows_1d, boundary_rows_2d_transient, count_by_provenance, unit_square_spec,
};
