// src/engine/mod.rs

//! Automation engine for simulated provisioning steps.
//!
//! This module ties together:
//! - the cancellable per-task timers that stand in for real SaaS
//!   provisioning calls ([`provision`])
//! - the event loop that owns the current store snapshot and merges timer
//!   completions into it copy-on-write ([`runtime`])

pub mod provision;
pub mod runtime;

pub use provision::{PROVISION_DELAY, spawn_automation_timer};
pub use runtime::{Engine, EngineEvent, EngineOptions};
