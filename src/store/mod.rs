// src/store/mod.rs

//! The task store: the single source of truth for a wizard session.
//!
//! - [`model`] defines the task record itself plus the default seed list
//!   used when a session starts with no tasks.
//! - [`snapshot`] holds the copy-on-write [`TaskStore`] and its mutation API.

pub mod model;
pub mod snapshot;

pub use model::{Category, Priority, Task, TaskId, TaskStatus, default_onboarding_tasks};
pub use snapshot::TaskStore;
