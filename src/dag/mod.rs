// src/dag/mod.rs

//! Dependency resolution over the task store.
//!
//! - [`order`] computes a dependency-respecting visitation order
//!   (topological sort) with explicit cycle detection.
//! - [`status`] derives the per-task timeline status (`blocked` etc.)
//!   from a store snapshot.

pub mod order;
pub mod status;

pub use order::topological_order;
pub use status::{DerivedStatus, derived_status, progress_percent};
