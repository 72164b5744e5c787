// src/dag/status.rs

use tracing::warn;

use crate::store::{Task, TaskStatus};

/// Derived, non-persisted status layered on top of the stored status.
///
/// `Blocked` exists only here: it means "some dependency of this task is not
/// completed yet" and is recomputed from the snapshot on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    Completed,
    InProgress,
    Blocked,
    Pending,
}

impl DerivedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DerivedStatus::Completed => "completed",
            DerivedStatus::InProgress => "in_progress",
            DerivedStatus::Blocked => "blocked",
            DerivedStatus::Pending => "pending",
        }
    }
}

/// Compute the derived status of `task` against a store snapshot.
///
/// Pure function of the snapshot:
/// - `completed` if the stored status is completed;
/// - else `blocked` if any dependency's stored status is not completed. A
///   dependency id absent from the snapshot counts as not completed
///   (conservatively blocking) and is surfaced as a warning;
/// - else `in_progress` if the stored status is in_progress;
/// - else `pending`.
pub fn derived_status(task: &Task, all_tasks: &[Task]) -> DerivedStatus {
    if task.status == TaskStatus::Completed {
        return DerivedStatus::Completed;
    }

    for dep_id in &task.depends_on {
        match all_tasks.iter().find(|t| t.id == *dep_id) {
            Some(dep) => {
                if dep.status != TaskStatus::Completed {
                    return DerivedStatus::Blocked;
                }
            }
            None => {
                warn!(task = %task.id, dep = %dep_id, "dependency not found; treating as unsatisfied");
                return DerivedStatus::Blocked;
            }
        }
    }

    match task.status {
        TaskStatus::InProgress => DerivedStatus::InProgress,
        _ => DerivedStatus::Pending,
    }
}

/// Completion progress shown inside a timeline bar.
pub fn progress_percent(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Completed => 100,
        TaskStatus::InProgress => 50,
        TaskStatus::Pending | TaskStatus::Failed => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Task;

    fn task(id: &str, status: TaskStatus, deps: &[&str]) -> Task {
        let mut t = Task::new(id, format!("task {id}"));
        t.status = status;
        t.depends_on = deps.iter().map(|s| s.to_string()).collect();
        t
    }

    #[test]
    fn incomplete_dependency_blocks_even_when_in_progress() {
        let tasks = vec![
            task("a", TaskStatus::Pending, &[]),
            task("b", TaskStatus::InProgress, &["a"]),
        ];
        assert_eq!(derived_status(&tasks[1], &tasks), DerivedStatus::Blocked);
    }

    #[test]
    fn completing_dependency_unblocks() {
        let tasks = vec![
            task("a", TaskStatus::Completed, &[]),
            task("b", TaskStatus::InProgress, &["a"]),
        ];
        assert_eq!(derived_status(&tasks[1], &tasks), DerivedStatus::InProgress);
    }

    #[test]
    fn completed_wins_over_blocked() {
        let tasks = vec![
            task("a", TaskStatus::Pending, &[]),
            task("b", TaskStatus::Completed, &["a"]),
        ];
        assert_eq!(derived_status(&tasks[1], &tasks), DerivedStatus::Completed);
    }

    #[test]
    fn dangling_dependency_blocks_indefinitely() {
        let tasks = vec![task("b", TaskStatus::Pending, &["ghost"])];
        assert_eq!(derived_status(&tasks[0], &tasks), DerivedStatus::Blocked);
    }

    #[test]
    fn no_dependencies_maps_stored_status_through() {
        let tasks = vec![task("a", TaskStatus::Pending, &[])];
        assert_eq!(derived_status(&tasks[0], &tasks), DerivedStatus::Pending);
    }

    #[test]
    fn progress_percent_matches_stored_status() {
        assert_eq!(progress_percent(TaskStatus::Pending), 0);
        assert_eq!(progress_percent(TaskStatus::InProgress), 50);
        assert_eq!(progress_percent(TaskStatus::Completed), 100);
        assert_eq!(progress_percent(TaskStatus::Failed), 0);
    }
}
