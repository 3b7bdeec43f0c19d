//! Raw input formatting
//!
//! Converts raw row-oriented input (anything the caller can hand over as
//! `&[Vec<f64>]`) into the canonical column-split [`PointBatch`], and
//! optionally pairs it with a provenance-tagged [`LabelBatch`].
//!
//! The formatter is a pure transformation: no side effects, every call
//! validates its input eagerly and either returns fresh batches or the
//! specific shape error.

use nalgebra::{DMatrix, DVector};

use crate::data::batch::{LabelBatch, PointBatch, PROVENANCE_OBSERVED};
use crate::error::PrepError;
use crate::problem::ProblemSpec;

/// Formats raw feature/label rows into prepared batches
///
/// # Modes
///
/// - **Training mode** (`prepare` with labels): points plus a label batch
///   whose trailing provenance column is all [`PROVENANCE_OBSERVED`].
/// - **Prediction-only mode** (`prepare` without labels, or
///   [`prepare_points`](InputFormatter::prepare_points)): points alone,
///   for submitting coordinates to inference.
///
/// # Examples
///
/// ```rust
/// use pinnprep_rs::data::InputFormatter;
/// use pinnprep_rs::problem::ProblemSpec;
///
/// let spec = ProblemSpec::unbounded(1, true).unwrap(); // x and t
/// let formatter = InputFormatter::new(&spec);
///
/// let x = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
/// let y = vec![vec![2.0], vec![3.0]];
///
/// let (points, labels) = formatter.prepare(&x, Some(&y)).unwrap();
/// let labels = labels.unwrap();
///
/// assert_eq!(points.num_features(), 2);
/// assert_eq!(labels.as_matrix().shape(), (2, 2));
/// assert_eq!(labels.provenance(0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct InputFormatter {
    spec: ProblemSpec,
}

impl InputFormatter {
    /// Create a formatter for one problem specification
    pub fn new(spec: &ProblemSpec) -> Self {
        Self { spec: spec.clone() }
    }

    /// The specification this formatter validates against
    pub fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    /// Convert raw rows into prepared batches
    ///
    /// # Arguments
    ///
    /// * `x_data` - `m` rows of exactly `problem_dim` coordinates each
    /// * `y_data` - optional `m` rows of target values, all the same width
    ///
    /// # Errors
    ///
    /// - [`PrepError::DimensionMismatch`]: a feature row does not have
    ///   `problem_dim` entries, or the label rows are ragged
    /// - [`PrepError::RowCountMismatch`]: label row count differs from the
    ///   feature row count
    pub fn prepare(
        &self,
        x_data: &[Vec<f64>],
        y_data: Option<&[Vec<f64>]>,
    ) -> Result<(PointBatch, Option<LabelBatch>), PrepError> {
        let points = self.split_columns(x_data)?;

        match y_data {
            Some(labels) if !labels.is_empty() => {
                let labels = self.tag_labels(x_data.len(), labels)?;
                Ok((points, Some(labels)))
            }
            _ => Ok((points, None)),
        }
    }

    /// Prediction-only mode: prepare coordinates without labels
    pub fn prepare_points(&self, x_data: &[Vec<f64>]) -> Result<PointBatch, PrepError> {
        self.split_columns(x_data)
    }

    // ===================================== Internal helpers ======================================

    /// Split rows into one column vector per feature, preserving order
    fn split_columns(&self, x_data: &[Vec<f64>]) -> Result<PointBatch, PrepError> {
        let expected = self.spec.problem_dim();

        for (row, entries) in x_data.iter().enumerate() {
            if entries.len() != expected {
                return Err(PrepError::DimensionMismatch {
                    row,
                    expected,
                    found: entries.len(),
                });
            }
        }

        let num_points = x_data.len();
        let columns = (0..expected)
            .map(|feature| {
                DVector::from_iterator(num_points, x_data.iter().map(|entries| entries[feature]))
            })
            .collect();

        Ok(PointBatch::from_columns(columns))
    }

    /// Append the observed-data provenance column to raw label rows
    fn tag_labels(&self, x_rows: usize, y_data: &[Vec<f64>]) -> Result<LabelBatch, PrepError> {
        if y_data.len() != x_rows {
            return Err(PrepError::RowCountMismatch {
                x_rows,
                y_rows: y_data.len(),
            });
        }

        let output_dim = y_data[0].len();
        for (row, entries) in y_data.iter().enumerate() {
            if entries.len() != output_dim {
                return Err(PrepError::DimensionMismatch {
                    row,
                    expected: output_dim,
                    found: entries.len(),
                });
            }
        }

        let values = DMatrix::from_fn(y_data.len(), output_dim + 1, |row, col| {
            if col == output_dim {
                PROVENANCE_OBSERVED
            } else {
                y_data[row][col]
            }
        });

        Ok(LabelBatch::new(values))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn formatter(space_dim: usize, time_dependent: bool) -> InputFormatter {
        let spec = ProblemSpec::unbounded(space_dim, time_dependent).unwrap();
        InputFormatter::new(&spec)
    }

    #[test]
    fn test_column_split_preserves_order_and_length() {
        let formatter = formatter(2, true);
        let x = vec![
            vec![1.0, 10.0, 100.0],
            vec![2.0, 20.0, 200.0],
            vec![3.0, 30.0, 300.0],
            vec![4.0, 40.0, 400.0],
        ];

        let batch = formatter.prepare_points(&x).unwrap();

        assert_eq!(batch.num_features(), 3);
        assert_eq!(batch.num_points(), 4);
        assert_eq!(batch.column(0).as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(batch.column(2).as_slice(), &[100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_reassembly_round_trip() {
        let formatter = formatter(2, false);
        let x = vec![vec![0.1, 0.9], vec![0.4, 0.6], vec![0.8, 0.2]];

        let matrix = formatter.prepare_points(&x).unwrap().to_matrix();

        for (row, entries) in x.iter().enumerate() {
            for (col, &value) in entries.iter().enumerate() {
                assert_relative_eq!(matrix[(row, col)], value);
            }
        }
    }

    #[test]
    fn test_wrong_row_width_is_dimension_mismatch() {
        let formatter = formatter(2, false);
        let x = vec![vec![0.0, 1.0], vec![0.5, 0.5, 0.5]];

        let err = formatter.prepare_points(&x).unwrap_err();
        assert!(matches!(
            err,
            PrepError::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 3,
            }
        ));
    }

    #[test]
    fn test_labels_get_provenance_column() {
        let formatter = formatter(1, false);
        let x = vec![vec![0.0], vec![0.5], vec![1.0]];
        let y = vec![vec![1.0, -1.0], vec![2.0, -2.0], vec![3.0, -3.0]];

        let (_, labels) = formatter.prepare(&x, Some(&y)).unwrap();
        let labels = labels.unwrap();

        assert_eq!(labels.as_matrix().shape(), (3, 3));
        assert_eq!(labels.output_dim(), 2);
        for row in 0..3 {
            assert_eq!(labels.provenance(row), PROVENANCE_OBSERVED);
        }
        assert_eq!(labels.targets()[(2, 1)], -3.0);
    }

    #[test]
    fn test_row_count_mismatch() {
        let formatter = formatter(1, false);
        let x = vec![vec![0.0], vec![1.0]];
        let y = vec![vec![1.0]];

        let err = formatter.prepare(&x, Some(&y)).unwrap_err();
        assert!(matches!(
            err,
            PrepError::RowCountMismatch {
                x_rows: 2,
                y_rows: 1,
            }
        ));
    }

    #[test]
    fn test_ragged_label_rows_rejected() {
        let formatter = formatter(1, false);
        let x = vec![vec![0.0], vec![1.0]];
        let y = vec![vec![1.0], vec![2.0, 3.0]];

        let err = formatter.prepare(&x, Some(&y)).unwrap_err();
        assert!(matches!(err, PrepError::DimensionMismatch { row: 1, .. }));
    }

    #[test]
    fn test_empty_labels_mean_prediction_only() {
        let formatter = formatter(1, false);
        let x = vec![vec![0.0], vec![1.0]];
        let empty: Vec<Vec<f64>> = vec![];

        let (points, labels) = formatter.prepare(&x, Some(&empty)).unwrap();
        assert!(labels.is_none());
        assert_eq!(points.num_points(), 2);

        let (_, labels) = formatter.prepare(&x, None).unwrap();
        assert!(labels.is_none());
    }

    #[test]
    fn test_empty_points_keep_feature_count() {
        let formatter = formatter(3, false);
        let batch = formatter.prepare_points(&[]).unwrap();
        assert_eq!(batch.num_features(), 3);
        assert_eq!(batch.num_points(), 0);
    }
}
