//! Training-set assembler
//!
//! Orchestrates the full preparation pipeline: format the labeled subset,
//! obtain the collocation subset (generated or externally supplied), build
//! the zero-residual collocation labels, and concatenate everything into a
//! single [`TrainingSet`].

use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::assembly::sampler::Distribution;
use crate::data::batch::{LabelBatch, PointBatch, TrainingSet};
use crate::data::formatter::InputFormatter;
use crate::error::PrepError;
use crate::problem::ProblemSpec;

/// Default seed for the internal generator
pub const DEFAULT_SEED: u64 = 42;

// =================================================================================================
// Collocation Specification
// =================================================================================================

/// How the collocation subset is obtained
///
/// An explicit tagged choice made by the caller, replacing any runtime
/// "is it a count or an array" inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum CollocationSpec {
    /// Generate this many interior points by sampling each axis
    /// independently from the domain bounds
    Count(usize),

    /// Use these rows as collocation points verbatim; same per-row shape
    /// as the feature data, no sampling occurs
    ExplicitPoints(Vec<Vec<f64>>),
}

impl From<usize> for CollocationSpec {
    fn from(count: usize) -> Self {
        CollocationSpec::Count(count)
    }
}

// =================================================================================================
// Assembly Options
// =================================================================================================

/// Options for one assembly call
///
/// # Examples
///
/// ```rust
/// use pinnprep_rs::assembly::{AssemblyOptions, Distribution};
///
/// // Defaults: uniform sampling, no shuffle
/// let options = AssemblyOptions::default();
/// assert_eq!(options.distribution, Distribution::Uniform);
///
/// // Builder pattern
/// let options = AssemblyOptions::default()
///     .distribution(Distribution::Normal)
///     .shuffle(true);
/// assert!(options.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyOptions {
    /// Distribution for generated collocation points (default: uniform)
    pub distribution: Distribution,

    /// Permute the combined rows after concatenation (default: false)
    ///
    /// When set, one permutation drawn from the assembly generator is
    /// applied identically to every point column and to the label rows,
    /// so provenance flags travel with their rows.
    pub shuffle: bool,
}

impl AssemblyOptions {
    /// Builder pattern: set the sampling distribution
    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Builder pattern: enable or disable the post-concatenation shuffle
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

// =================================================================================================
// Training Set Assembler
// =================================================================================================

/// Produces merged training sets for one problem specification
///
/// Owns an immutable [`ProblemSpec`] and a seed. Each
/// [`assemble`](TrainingSetAssembler::assemble) call constructs a fresh
/// generator from the seed, so repeated calls with the same inputs yield
/// identical training sets; callers needing their own randomness use
/// [`assemble_with_rng`](TrainingSetAssembler::assemble_with_rng).
///
/// # Examples
///
/// ```rust
/// use pinnprep_rs::assembly::{CollocationSpec, TrainingSetAssembler};
/// use pinnprep_rs::problem::{AxisBounds, ProblemSpec};
///
/// let spec = ProblemSpec::steady(1, vec![AxisBounds::new(0.0, 1.0)]).unwrap();
/// let assembler = TrainingSetAssembler::new(spec);
///
/// let x = vec![vec![0.1], vec![0.5]];
/// let y = vec![vec![2.0], vec![3.0]];
///
/// let set = assembler
///     .assemble(&x, &y, CollocationSpec::Count(3), None)
///     .unwrap();
///
/// assert_eq!(set.num_points(), 5);
/// assert_eq!(set.labels.as_matrix().shape(), (5, 2));
/// ```
#[derive(Debug, Clone)]
pub struct TrainingSetAssembler {
    spec: ProblemSpec,
    formatter: InputFormatter,
    seed: u64,
}

impl TrainingSetAssembler {
    /// Create an assembler with the default seed
    pub fn new(spec: ProblemSpec) -> Self {
        Self::with_seed(spec, DEFAULT_SEED)
    }

    /// Create an assembler with an explicit seed
    pub fn with_seed(spec: ProblemSpec, seed: u64) -> Self {
        let formatter = InputFormatter::new(&spec);
        Self {
            spec,
            formatter,
            seed,
        }
    }

    /// The problem specification this assembler serves
    pub fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    /// Seed of the internal generator
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Assemble a training set using the internal seeded generator
    ///
    /// See [`assemble_with_rng`](TrainingSetAssembler::assemble_with_rng)
    /// for arguments and errors.
    pub fn assemble(
        &self,
        x_data: &[Vec<f64>],
        y_data: &[Vec<f64>],
        collocation: CollocationSpec,
        options: Option<&AssemblyOptions>,
    ) -> Result<TrainingSet, PrepError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        self.assemble_with_rng(x_data, y_data, collocation, options, &mut rng)
    }

    /// Assemble a training set drawing randomness from `rng`
    ///
    /// # Arguments
    ///
    /// * `x_data` - observed coordinates, `m` rows of `problem_dim` entries
    /// * `y_data` - observed targets, `m` rows of one common width `o`
    /// * `collocation` - [`CollocationSpec::Count`] to generate points, or
    ///   [`CollocationSpec::ExplicitPoints`] to reuse external ones
    /// * `options` - distribution and shuffle flags (defaults if `None`)
    ///
    /// # Errors
    ///
    /// - [`PrepError::DimensionMismatch`] / [`PrepError::RowCountMismatch`]:
    ///   malformed observed data
    /// - [`PrepError::InvalidDomainSpec`]: point generation requested
    ///   without usable domain bounds
    /// - [`PrepError::ColumnCountMismatch`]: labeled and collocation
    ///   subsets disagree on the feature column count
    pub fn assemble_with_rng<R: Rng + ?Sized>(
        &self,
        x_data: &[Vec<f64>],
        y_data: &[Vec<f64>],
        collocation: CollocationSpec,
        options: Option<&AssemblyOptions>,
        rng: &mut R,
    ) -> Result<TrainingSet, PrepError> {
        let defaults = AssemblyOptions::default();
        let options = options.unwrap_or(&defaults);

        // The output dimension comes from the observed labels; without at
        // least one label row the collocation labels have no defined width.
        if y_data.is_empty() {
            return Err(PrepError::RowCountMismatch {
                x_rows: x_data.len(),
                y_rows: 0,
            });
        }

        let (observed_points, observed_labels) = self.formatter.prepare(x_data, Some(y_data))?;
        let observed_labels = observed_labels.ok_or(PrepError::RowCountMismatch {
            x_rows: x_data.len(),
            y_rows: 0,
        })?;

        let collocation_points = self.collocation_points(&collocation, options, rng)?;

        if observed_points.num_features() != collocation_points.num_features() {
            return Err(PrepError::ColumnCountMismatch {
                labeled: observed_points.num_features(),
                collocation: collocation_points.num_features(),
            });
        }

        // Zero targets AND zero provenance: the loss reads the trailing 0.0
        // and applies the physics-residual term to these rows.
        let output_dim = observed_labels.output_dim();
        let collocation_labels = LabelBatch::new(DMatrix::zeros(
            collocation_points.num_points(),
            output_dim + 1,
        ));

        let points = concat_points(&observed_points, &collocation_points);
        let labels = concat_labels(&observed_labels, &collocation_labels);

        let set = TrainingSet::new(points, labels);
        if options.shuffle {
            Ok(shuffle_rows(set, rng))
        } else {
            Ok(set)
        }
    }

    // ===================================== Internal helpers ======================================

    /// Obtain the collocation subset in canonical column layout
    fn collocation_points<R: Rng + ?Sized>(
        &self,
        collocation: &CollocationSpec,
        options: &AssemblyOptions,
        rng: &mut R,
    ) -> Result<PointBatch, PrepError> {
        match collocation {
            CollocationSpec::Count(count) => {
                let bounds = self.spec.domain_bounds();
                if bounds.is_empty() {
                    return Err(PrepError::InvalidDomainSpec(
                        "domain bounds are required to generate collocation points".to_string(),
                    ));
                }

                debug!(
                    "generating {} collocation points per axis over {} axes ({} distribution)",
                    count,
                    bounds.len(),
                    options.distribution,
                );

                let columns = bounds
                    .iter()
                    .map(|axis| options.distribution.sample_axis(axis, *count, rng))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(PointBatch::from_columns(columns))
            }
            CollocationSpec::ExplicitPoints(rows) => {
                debug!("reusing {} externally supplied collocation points", rows.len());
                self.formatter.prepare_points(rows)
            }
        }
    }
}

// =================================================================================================
// Concatenation and shuffling
// =================================================================================================

/// Concatenate per-feature columns, observed rows first
fn concat_points(observed: &PointBatch, collocation: &PointBatch) -> PointBatch {
    let columns = observed
        .columns()
        .iter()
        .zip(collocation.columns())
        .map(|(head, tail)| {
            DVector::from_iterator(
                head.len() + tail.len(),
                head.iter().chain(tail.iter()).copied(),
            )
        })
        .collect();
    PointBatch::from_columns(columns)
}

/// Concatenate label rows, observed rows first
fn concat_labels(observed: &LabelBatch, collocation: &LabelBatch) -> LabelBatch {
    let head = observed.as_matrix();
    let tail = collocation.as_matrix();
    let split = head.nrows();

    let values = DMatrix::from_fn(head.nrows() + tail.nrows(), head.ncols(), |row, col| {
        if row < split {
            head[(row, col)]
        } else {
            tail[(row - split, col)]
        }
    });
    LabelBatch::new(values)
}

/// Apply one random permutation to the point columns and label rows
fn shuffle_rows<R: Rng + ?Sized>(set: TrainingSet, rng: &mut R) -> TrainingSet {
    let num_points = set.num_points();
    if num_points == 0 {
        warn!("shuffle requested on an empty training set");
        return set;
    }

    let mut order: Vec<usize> = (0..num_points).collect();
    order.shuffle(rng);

    let columns = set
        .points
        .columns()
        .iter()
        .map(|column| DVector::from_iterator(num_points, order.iter().map(|&row| column[row])))
        .collect();

    let labels = set.labels.as_matrix();
    let values = DMatrix::from_fn(num_points, labels.ncols(), |row, col| {
        labels[(order[row], col)]
    });

    TrainingSet::new(PointBatch::from_columns(columns), LabelBatch::new(values))
}

// =================================================================================================
// Tests
// =================================================================================================
