//! Problem definition
//!
//! This module defines WHAT the downstream solver is learning on:
//! the spatial dimension, the time convention, and the rectangular
//! domain the collocation points are drawn from.
//!
//! # Core Concepts
//!
//! - [`ProblemSpec`]: immutable space/time/domain description, created once
//!   and shared read-only by every pipeline stage.
//! - [`AxisBounds`]: a `[low, high]` interval for one coordinate axis.
//!
//! The "problem dimension" is the spatial dimension plus one when the
//! equation is time dependent; the time axis is always the LAST axis.

pub mod spec;

pub use spec::{AxisBounds, ProblemSpec};
