//! Point, label, and training-set containers
//!
//! All three containers are transient values: created per call, owned by
//! the caller, never mutated in place. Every transformation produces a new
//! batch.

use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Provenance flag for genuine observed data (boundary/initial condition)
pub const PROVENANCE_OBSERVED: f64 = 1.0;

/// Provenance flag for physics-residual collocation points
pub const PROVENANCE_COLLOCATION: f64 = 0.0;

// =================================================================================================
// Point Batch
// =================================================================================================

/// A batch of data points in the canonical column-split layout
///
/// Logically a rectangular table of `m` rows (points) × `p` columns
/// (features), stored as `p` column vectors of length `m` in the same
/// left-to-right order as the source columns. `p` always equals the
/// problem dimension of the [`ProblemSpec`](crate::problem::ProblemSpec)
/// that produced the batch.
///
/// # Examples
///
/// ```rust
/// use pinnprep_rs::data::InputFormatter;
/// use pinnprep_rs::problem::ProblemSpec;
///
/// let spec = ProblemSpec::unbounded(2, false).unwrap();
/// let formatter = InputFormatter::new(&spec);
///
/// let rows = vec![vec![0.0, 1.0], vec![0.5, 2.0], vec![1.0, 3.0]];
/// let batch = formatter.prepare_points(&rows).unwrap();
///
/// assert_eq!(batch.num_features(), 2);
/// assert_eq!(batch.num_points(), 3);
/// assert_eq!(batch.column(1)[2], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    columns: Vec<DVector<f64>>,
}

impl PointBatch {
    /// Build from pre-split columns
    ///
    /// Callers must pass columns of equal length; the formatter and the
    /// sampler are the only producers and both guarantee it.
    pub(crate) fn from_columns(columns: Vec<DVector<f64>>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "point batch columns must have equal length"
        );
        Self { columns }
    }

    /// Number of feature columns (the problem dimension)
    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// Number of data points (rows)
    pub fn num_points(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    /// Column vector for one feature
    ///
    /// # Panics
    ///
    /// Panics if `feature >= num_features()`.
    pub fn column(&self, feature: usize) -> &DVector<f64> {
        &self.columns[feature]
    }

    /// All feature columns, in source order
    pub fn columns(&self) -> &[DVector<f64>] {
        &self.columns
    }

    /// Reassemble the batch into a single `m × p` matrix
    ///
    /// Inverse of the column split: row `i` of the result is the i-th
    /// data point with its features in source order.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.num_points(), self.num_features(), |row, col| {
            self.columns[col][row]
        })
    }
}

impl fmt::Display for PointBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PointBatch({} points × {} features)",
            self.num_points(),
            self.num_features()
        )
    }
}

// =================================================================================================
// Label Batch
// =================================================================================================

/// A batch of target values with a trailing provenance column
///
/// Rectangular table of `m` rows × `(o + 1)` columns: the first `o` columns
/// are the output/target values, the final column is the provenance flag
/// ([`PROVENANCE_OBSERVED`] or [`PROVENANCE_COLLOCATION`], nothing else).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBatch {
    values: DMatrix<f64>,
}

impl LabelBatch {
    /// Build from a matrix whose last column is already the provenance flag
    pub(crate) fn new(values: DMatrix<f64>) -> Self {
        debug_assert!(values.ncols() >= 1, "label batch needs a provenance column");
        Self { values }
    }

    /// Number of data points (rows)
    pub fn num_points(&self) -> usize {
        self.values.nrows()
    }

    /// Output dimension `o` (column count minus the provenance column)
    pub fn output_dim(&self) -> usize {
        self.values.ncols() - 1
    }

    /// Provenance flag of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_points()`.
    pub fn provenance(&self, row: usize) -> f64 {
        self.values[(row, self.output_dim())]
    }

    /// True when the row is genuine observed data
    pub fn is_observed(&self, row: usize) -> bool {
        self.provenance(row) == PROVENANCE_OBSERVED
    }

    /// The target values without the provenance column (`m × o`)
    pub fn targets(&self) -> DMatrix<f64> {
        self.values.columns(0, self.output_dim()).into_owned()
    }

    /// Full `m × (o + 1)` matrix including the provenance column
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

impl fmt::Display for LabelBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LabelBatch({} points × {} outputs + provenance)",
            self.num_points(),
            self.output_dim()
        )
    }
}

// =================================================================================================
// Training Set
// =================================================================================================

/// A prepared training set: point batch plus label batch, equal row counts
///
/// Formed by concatenating a labeled subset and a collocation subset,
/// labeled rows first, unless a shuffle was requested at assembly time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    /// Prepared feature columns
    pub points: PointBatch,

    /// Targets with provenance flags, row-aligned with `points`
    pub labels: LabelBatch,
}

impl TrainingSet {
    pub(crate) fn new(points: PointBatch, labels: LabelBatch) -> Self {
        debug_assert_eq!(
            points.num_points(),
            labels.num_points(),
            "points and labels must have the same row count"
        );
        Self { points, labels }
    }

    /// Number of data points (labeled plus collocation)
    pub fn num_points(&self) -> usize {
        self.points.num_points()
    }

    /// Number of feature columns
    pub fn num_features(&self) -> usize {
        self.points.num_features()
    }

    /// Output dimension of the labels (provenance column excluded)
    pub fn output_dim(&self) -> usize {
        self.labels.output_dim()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
