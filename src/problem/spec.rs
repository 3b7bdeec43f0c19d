//! Space-time problem specification
//!
//! # Design Philosophy
//!
//! Instead of enumerating 1D, 2D, 3D problems separately, a single generic
//! structure covers n spatial dimensions plus an optional time axis:
//!
//! - `space_dim`: number of spatial coordinates
//! - `time_dependent`: whether a time axis is appended (always last)
//! - `Vec<AxisBounds>`: one interval per axis of the rectangular domain
//!
//! The specification is validated once at construction and never mutated,
//! so it can be shared read-only across threads and pipeline stages.

use std::fmt;

use crate::error::PrepError;

// =================================================================================================
// Axis Bounds
// =================================================================================================

/// A two-number interval attached to one coordinate axis
///
/// The same pair of numbers is read in two ways depending on the sampling
/// distribution, and both readings are kept explicit rather than implied:
///
/// - [`range`](AxisBounds::range) → `(low, high)` for uniform sampling
/// - [`location_scale`](AxisBounds::location_scale) → `(loc, scale)` for
///   normal sampling
///
/// Reusing the interval endpoints positionally as a normal distribution's
/// location and scale is inherited behavior, not a natural fit: bounds like
/// `[-1.0, 1.0]` make a fine uniform range and a questionable `(loc, scale)`
/// pair. Callers mixing normal sampling with geometric bounds should supply
/// bounds meant as `(loc, scale)` from the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower endpoint (location, for normal sampling)
    pub low: f64,
    /// Upper endpoint (scale, for normal sampling)
    pub high: f64,
}

impl AxisBounds {
    /// Create bounds for one axis
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Interval reading: `(low, high)` for uniform sampling
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Positional reading: `(loc, scale)` for normal sampling
    pub fn location_scale(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// True when both endpoints are finite numbers
    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    /// True when `value` lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for AxisBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

// =================================================================================================
// Problem Specification
// =================================================================================================

/// Immutable description of the problem's space-time layout
///
/// # Invariants
///
/// - `space_dim > 0`
/// - when bounds are supplied (non-empty), exactly one [`AxisBounds`] per
///   problem dimension, spatial axes first, time axis last
/// - all supplied endpoints are finite
///
/// Violations surface as [`PrepError::InvalidDomainSpec`] at construction.
///
/// # Examples
///
/// ```rust
/// use pinnprep_rs::problem::{AxisBounds, ProblemSpec};
///
/// // 1D steady problem on [0, 1]
/// let spec = ProblemSpec::steady(1, vec![AxisBounds::new(0.0, 1.0)]).unwrap();
/// assert_eq!(spec.problem_dim(), 1);
///
/// // 2D transient problem: x, y, then time
/// let spec = ProblemSpec::transient(2, vec![
///     AxisBounds::new(0.0, 1.0),
///     AxisBounds::new(0.0, 1.0),
///     AxisBounds::new(0.0, 10.0),
/// ]).unwrap();
/// assert_eq!(spec.problem_dim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSpec {
    space_dim: usize,
    time_dependent: bool,
    domain_bounds: Vec<AxisBounds>,
}

impl ProblemSpec {
    /// Create a specification
    ///
    /// `domain_bounds` may be empty when no collocation points will be
    /// generated (externally supplied points only); otherwise it must hold
    /// one interval per problem dimension.
    pub fn new(
        space_dim: usize,
        domain_bounds: Vec<AxisBounds>,
        time_dependent: bool,
    ) -> Result<Self, PrepError> {
        if space_dim == 0 {
            return Err(PrepError::InvalidDomainSpec(
                "space dimension must be at least 1".to_string(),
            ));
        }

        let problem_dim = space_dim + usize::from(time_dependent);

        if !domain_bounds.is_empty() && domain_bounds.len() != problem_dim {
            return Err(PrepError::InvalidDomainSpec(format!(
                "{} bound pairs given for a problem of dimension {} \
                 (space dimension {} plus {} time axis)",
                domain_bounds.len(),
                problem_dim,
                space_dim,
                if time_dependent { "one" } else { "no" },
            )));
        }

        for (axis, bounds) in domain_bounds.iter().enumerate() {
            if !bounds.is_finite() {
                return Err(PrepError::InvalidDomainSpec(format!(
                    "bounds {} on axis {} are not finite",
                    bounds, axis
                )));
            }
        }

        Ok(Self {
            space_dim,
            time_dependent,
            domain_bounds,
        })
    }

    // ====================================== Factory methods ======================================

    /// Create a steady (time-independent) specification
    pub fn steady(space_dim: usize, domain_bounds: Vec<AxisBounds>) -> Result<Self, PrepError> {
        Self::new(space_dim, domain_bounds, false)
    }

    /// Create a transient specification; the last bound pair is the time axis
    pub fn transient(space_dim: usize, domain_bounds: Vec<AxisBounds>) -> Result<Self, PrepError> {
        Self::new(space_dim, domain_bounds, true)
    }

    /// Create a specification without domain bounds
    ///
    /// Collocation points can then only be supplied externally, never
    /// generated.
    pub fn unbounded(space_dim: usize, time_dependent: bool) -> Result<Self, PrepError> {
        Self::new(space_dim, Vec::new(), time_dependent)
    }

    // ========================================= Accessors =========================================

    /// Number of spatial coordinates
    pub fn space_dim(&self) -> usize {
        self.space_dim
    }

    /// True when a time axis is appended after the spatial axes
    pub fn is_time_dependent(&self) -> bool {
        self.time_dependent
    }

    /// Spatial dimension plus one if time dependent
    pub fn problem_dim(&self) -> usize {
        self.space_dim + usize::from(self.time_dependent)
    }

    /// Domain bounds, one per axis; empty when unbounded
    pub fn domain_bounds(&self) -> &[AxisBounds] {
        &self.domain_bounds
    }

    /// True when domain bounds were supplied
    pub fn has_bounds(&self) -> bool {
        !self.domain_bounds.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
