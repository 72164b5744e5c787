// src/store/snapshot.rs

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::EditError;
use crate::store::model::{Category, Priority, Task, TaskId, TaskStatus, default_onboarding_tasks};

/// Copy-on-write snapshot of the task list.
///
/// Every mutation produces a *new* store and leaves the receiver untouched,
/// so a snapshot handed to an in-flight automation timer stays valid no
/// matter what the user edits in the meantime. Cloning a store is cheap
/// (one `Arc` bump); the task vector is only copied when a mutation runs.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Arc<Vec<Task>>,
}

impl TaskStore {
    /// Create a store from a caller-supplied task list.
    ///
    /// An empty list is substituted with the fixed default onboarding seed,
    /// matching how a fresh wizard session starts.
    pub fn new(tasks: Vec<Task>) -> Self {
        let tasks = if tasks.is_empty() {
            info!("empty task list; substituting default onboarding seed");
            default_onboarding_tasks()
        } else {
            tasks
        };
        Self {
            tasks: Arc::new(tasks),
        }
    }

    /// All tasks in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Flip a task's stored status between `completed` and `pending`.
    ///
    /// Any non-completed status flips to `completed`; `completed` flips back
    /// to `pending`. Dependents are not touched here; their `blocked` state
    /// is recomputed from the new snapshot on the next read.
    pub fn toggle_completion(&self, id: &str) -> Result<TaskStore, EditError> {
        if self.get(id).is_none() {
            return Err(EditError::UnknownTask(id.to_string()));
        }

        Ok(self.map_task(id, |task| {
            task.status = if task.status == TaskStatus::Completed {
                TaskStatus::Pending
            } else {
                TaskStatus::Completed
            };
            debug!(task = %task.id, status = task.status.as_str(), "toggled completion");
        }))
    }

    /// Replace one task's dependency list.
    ///
    /// Rejected without changing the store when the list contains the task's
    /// own id or an id not present in the store.
    pub fn set_dependencies(
        &self,
        id: &str,
        depends_on: Vec<TaskId>,
    ) -> Result<TaskStore, EditError> {
        if self.get(id).is_none() {
            return Err(EditError::UnknownTask(id.to_string()));
        }

        for dep in &depends_on {
            if dep == id {
                return Err(EditError::SelfDependency(id.to_string()));
            }
            if self.get(dep).is_none() {
                return Err(EditError::UnknownDependency {
                    task: id.to_string(),
                    dep: dep.clone(),
                });
            }
        }

        Ok(self.map_task(id, |task| {
            debug!(task = %task.id, deps = depends_on.len(), "replaced dependency list");
            task.depends_on = depends_on.clone();
        }))
    }

    /// Set one task's stored status.
    ///
    /// Used by the automation engine to mark automated steps `in_progress`
    /// when their timer starts and `completed` when it fires. The write is a
    /// replace-with-merge against this snapshot, so applying it to the
    /// *current* store at fire time never clobbers unrelated edits.
    pub fn with_status(&self, id: &str, status: TaskStatus) -> Result<TaskStore, EditError> {
        if self.get(id).is_none() {
            return Err(EditError::UnknownTask(id.to_string()));
        }
        Ok(self.map_task(id, |task| {
            task.status = status;
        }))
    }

    /// Tasks matching the optional category/priority filters, in store order.
    pub fn filtered(
        &self,
        category: Option<Category>,
        priority: Option<Priority>,
    ) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| priority.is_none_or(|p| t.priority == p))
            .collect()
    }

    /// Overall completion as a rounded percentage (0 for an empty store).
    pub fn completion_percentage(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let completed = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        ((completed as f64 / self.tasks.len() as f64) * 100.0).round() as u8
    }

    /// Copy the task vector, apply `f` to the task with the given id, and
    /// wrap the result in a fresh snapshot.
    fn map_task(&self, id: &str, mut f: impl FnMut(&mut Task)) -> TaskStore {
        let mut tasks: Vec<Task> = self.tasks.as_ref().clone();
        for task in tasks.iter_mut() {
            if task.id == id {
                f(task);
            }
        }
        TaskStore {
            tasks: Arc::new(tasks),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new(Vec::new())
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskStore::new(iter.into_iter().collect())
    }
}
