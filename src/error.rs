//! Error taxonomy for the data preparation pipeline
//!
//! Every failure in this crate is a precondition violation detected eagerly,
//! before any transformation runs. There are no transient failure modes and
//! no retries: the first incompatible shape, bound, or path aborts the call
//! and surfaces the specific mismatch to the caller.

use thiserror::Error;

/// Errors raised by the data preparation pipeline
///
/// # Categories
///
/// - **Shape errors**: [`DimensionMismatch`](PrepError::DimensionMismatch),
///   [`RowCountMismatch`](PrepError::RowCountMismatch),
///   [`ColumnCountMismatch`](PrepError::ColumnCountMismatch)
/// - **Configuration errors**: [`InvalidDomainSpec`](PrepError::InvalidDomainSpec),
///   [`UnsupportedDistribution`](PrepError::UnsupportedDistribution)
/// - **I/O boundary errors**: [`EmptyArray`](PrepError::EmptyArray),
///   [`InvalidExtension`](PrepError::InvalidExtension),
///   [`Io`](PrepError::Io), [`MalformedCsv`](PrepError::MalformedCsv)
#[derive(Debug, Error)]
pub enum PrepError {
    /// A data row does not have the expected number of entries
    #[error("row {row} has {found} entries, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending row
        row: usize,
        /// Expected entry count
        expected: usize,
        /// Actual entry count
        found: usize,
    },

    /// Feature and label tables disagree on the number of data points
    #[error("feature table has {x_rows} rows but label table has {y_rows}, they must match")]
    RowCountMismatch { x_rows: usize, y_rows: usize },

    /// Domain bounds are incompatible with the problem dimension,
    /// or unusable for the requested sampling
    #[error("invalid domain specification: {0}")]
    InvalidDomainSpec(String),

    /// Unknown collocation sampling distribution key
    #[error("unsupported collocation distribution \"{0}\", expected \"uniform\" or \"normal\"")]
    UnsupportedDistribution(String),

    /// Labeled and collocation subsets disagree on the feature column count
    #[error("labeled data has {labeled} feature columns but collocation points have {collocation}")]
    ColumnCountMismatch { labeled: usize, collocation: usize },

    /// An empty array was given where data is required
    #[error("empty array: nothing to export")]
    EmptyArray,

    /// A CSV path without the `.csv` extension
    #[error("expected a path ending in \".csv\", got \"{0}\"")]
    InvalidExtension(String),

    /// Underlying I/O failure while reading or writing a file
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV file whose content cannot be parsed into a rectangular
    /// numeric array
    #[error("malformed CSV at line {line}: {message}")]
    MalformedCsv { line: usize, message: String },
}

// =================================================================================================
// Tests
// =================================================================================================
