// src/plan/mod.rs

//! Onboarding plan files.
//!
//! A plan is a TOML file describing the process start date and the task set
//! for one wizard session:
//!
//! - [`model`] is the serde mapping of the file format.
//! - [`loader`] reads and validates a plan from disk.
//! - [`validate`] runs semantic checks (self-dependencies, cycles).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{PlanFile, PlanSection, TaskSpec};
pub use validate::{parse_start_date, validate_plan};
