// src/errors.rs

//! Typed errors for the task store and dependency resolver.
//!
//! Application-level plumbing (plan loading, CLI wiring) uses `anyhow`
//! directly; the errors here are the ones callers are expected to match on.

use thiserror::Error;

use crate::store::TaskId;

/// Errors from dependency ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The dependency graph contains a cycle. Ordering is refused for the
    /// whole set; `task_id` names a task on the cycle.
    #[error("dependency cycle detected involving task '{task_id}'")]
    CycleDetected { task_id: TaskId },
}

/// Errors from store mutations driven by direct user input.
///
/// These are returned, not raised: the store is left unchanged and the
/// caller surfaces the message next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A task may not depend on itself.
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(TaskId),

    /// The mutated task id is not present in the store.
    #[error("unknown task id '{0}'")]
    UnknownTask(TaskId),

    /// A dependency id in the replacement list is not present in the store.
    #[error("task '{task}' references unknown dependency '{dep}'")]
    UnknownDependency { task: TaskId, dep: TaskId },
}
