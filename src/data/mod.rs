//! Canonical data containers and input formatting
//!
//! This module provides the containers that flow through the preparation
//! pipeline and the formatter that produces them from raw row-oriented
//! input.
//!
//! # Architecture
//!
//! ```text
//! data/
//! ├── mod.rs        ← This file
//! ├── batch.rs      ← PointBatch, LabelBatch, TrainingSet
//! └── formatter.rs  ← InputFormatter (rows → column layout)
//! ```
//!
//! # The Column-Split Layout
//!
//! The downstream learning model consumes each spatial/time coordinate as a
//! separate named input, so the canonical "prepared" form of a point table
//! is NOT a single matrix but an ordered sequence of single-column vectors,
//! one per feature. [`PointBatch`] owns that layout; [`InputFormatter`]
//! builds it from raw rows and enforces the shape invariants.
//!
//! # Provenance
//!
//! Every label row carries a trailing provenance flag:
//!
//! - [`PROVENANCE_OBSERVED`] (`1.0`): genuine boundary/initial condition data
//! - [`PROVENANCE_COLLOCATION`] (`0.0`): synthetic interior point, target
//!   values are zero placeholders
//!
//! The training loss reads this flag to decide between a data-fitting term
//! and a physics-residual term for each row.

pub mod batch;
pub mod formatter;

pub use batch::{LabelBatch, PointBatch, TrainingSet, PROVENANCE_COLLOCATION, PROVENANCE_OBSERVED};
pub use formatter::InputFormatter;
