//! Training-set assembly
//!
//! This module turns user-labeled data plus a collocation request into one
//! merged, training-ready [`TrainingSet`](crate::data::TrainingSet).
//!
//! # Architecture
//!
//! ```text
//! assembly/
//! ├── mod.rs        ← This file
//! ├── sampler.rs    ← Distribution (per-axis collocation sampling)
//! └── assembler.rs  ← TrainingSetAssembler, CollocationSpec, AssemblyOptions
//! ```
//!
//! # Workflow
//!
//! ```text
//! ┌──────────────────┐   ┌───────────────────────┐
//! │ X_data, Y_data   │   │ CollocationSpec       │
//! │ (observed rows)  │   │ Count(n) | Explicit   │
//! └────────┬─────────┘   └──────────┬────────────┘
//!          │                        │
//! ┌────────▼─────────┐   ┌──────────▼────────────┐
//! │ InputFormatter   │   │ Distribution sampler  │
//! │ (+ provenance 1) │   │ or InputFormatter     │
//! └────────┬─────────┘   │ (+ zero labels, 0)    │
//!          │             └──────────┬────────────┘
//!          └─────────┬──────────────┘
//!                    │
//!          ┌─────────▼─────────┐
//!          │ Concatenation     │  labeled rows first,
//!          │ (+ opt. shuffle)  │  collocation second
//!          └─────────┬─────────┘
//!                    │
//!          ┌─────────▼─────────┐
//!          │ TrainingSet       │
//!          └───────────────────┘
//! ```
//!
//! Random draws come from an explicit seedable generator
//! (`Xoshiro256PlusPlus` by default), so assembly is reproducible and
//! callers can inject their own source.

pub mod assembler;
pub mod sampler;

pub use assembler::{AssemblyOptions, CollocationSpec, TrainingSetAssembler, DEFAULT_SEED};
pub use sampler::Distribution;
