//! Collocation point sampling distributions
//!
//! Each coordinate axis is sampled independently (no correlation across
//! dimensions) from the axis's [`AxisBounds`], so generating `n` points in
//! a `p`-dimensional domain means `p` independent draws of `n` values.
//!
//! # Bound Interpretation
//!
//! The same bound pair is read differently per distribution, and the two
//! readings are kept explicit on [`AxisBounds`]:
//!
//! | Distribution | Reading                                   |
//! |--------------|-------------------------------------------|
//! | `Uniform`    | `range()` → closed interval `[low, high]` |
//! | `Normal`     | `location_scale()` → `(loc, scale)`       |

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;
use rand::Rng;
use rand_distr::{Distribution as _, Normal, Uniform};

use crate::error::PrepError;
use crate::problem::AxisBounds;

/// Sampling distribution for generated collocation points
///
/// Parsed from configuration keys via [`FromStr`]; anything outside
/// `"uniform"` and `"normal"` is rejected with
/// [`PrepError::UnsupportedDistribution`]:
///
/// ```rust
/// use pinnprep_rs::assembly::Distribution;
///
/// let dist: Distribution = "uniform".parse().unwrap();
/// assert_eq!(dist, Distribution::Uniform);
/// assert!("gaussian".parse::<Distribution>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Uniform over the closed interval `[low, high]` of each axis
    #[default]
    Uniform,

    /// Normal with the axis bounds read positionally as `(loc, scale)`
    Normal,
}

impl Distribution {
    /// Configuration key for this distribution
    pub fn key(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
        }
    }

    /// Draw `count` values for one axis
    ///
    /// Degenerate parameters (inverted uniform range, negative or
    /// non-finite normal scale) surface as
    /// [`PrepError::InvalidDomainSpec`].
    pub(crate) fn sample_axis<R: Rng + ?Sized>(
        &self,
        bounds: &AxisBounds,
        count: usize,
        rng: &mut R,
    ) -> Result<DVector<f64>, PrepError> {
        match self {
            Distribution::Uniform => {
                let (low, high) = bounds.range();
                let sampler = Uniform::new_inclusive(low, high).map_err(|source| {
                    PrepError::InvalidDomainSpec(format!(
                        "bounds {} unusable as a uniform range: {}",
                        bounds, source
                    ))
                })?;
                Ok(DVector::from_iterator(
                    count,
                    (0..count).map(|_| sampler.sample(rng)),
                ))
            }
            Distribution::Normal => {
                let (loc, scale) = bounds.location_scale();
                let sampler = Normal::new(loc, scale).map_err(|source| {
                    PrepError::InvalidDomainSpec(format!(
                        "bounds {} unusable as (loc, scale) of a normal distribution: {}",
                        bounds, source
                    ))
                })?;
                Ok(DVector::from_iterator(
                    count,
                    (0..count).map(|_| sampler.sample(rng)),
                ))
            }
        }
    }
}

impl FromStr for Distribution {
    type Err = PrepError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "uniform" => Ok(Distribution::Uniform),
            "normal" => Ok(Distribution::Normal),
            other => Err(PrepError::UnsupportedDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
