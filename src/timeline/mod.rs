// src/timeline/mod.rs

//! Timeline projection of a task store.
//!
//! - [`model`] derives per-task timeline records (dates, progress, derived
//!   status) from a snapshot and a process start date.
//! - [`axis`] collects the distinct calendar days spanned by those records.
//! - [`layout`] positions each task's bar as fractions of the axis.

pub mod axis;
pub mod layout;
pub mod model;

pub use axis::timeline_dates;
pub use layout::{BarLayout, layout};
pub use model::{TimelineTask, timeline_tasks};
