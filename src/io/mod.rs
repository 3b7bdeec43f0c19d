//! File-format adapters for prepared arrays
//!
//! Boundary-only helpers around delimited text files. The assembly core
//! never calls into this module; it exists so callers can persist raw or
//! prepared arrays and load them back.
//!
//! ```text
//! io/
//! ├── mod.rs   ← This file
//! └── csv.rs   ← save_to_csv / load_from_csv / load_from_csv_split
//! ```

pub mod csv;

pub use csv::{load_from_csv, load_from_csv_split, save_to_csv};
