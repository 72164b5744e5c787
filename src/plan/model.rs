// src/plan/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::store::{Category, Priority, Task, TaskStatus};

/// Top-level plan as read from a TOML file.
///
/// ```toml
/// [plan]
/// start_date = "2026-09-01"
///
/// [task.i9]
/// title = "Complete I-9 Form"
/// category = "hr"
/// priority = "high"
/// due_in_days = 3
///
/// [task.handbook]
/// title = "Sign Employee Handbook"
/// automated = true
/// depends_on = ["i9"]
/// ```
///
/// An empty (or absent) `[task.*]` table means "use the default onboarding
/// seed list"; the store substitutes it when constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    /// Process-wide settings from `[plan]`.
    #[serde(default)]
    pub plan: PlanSection,

    /// All tasks from `[task.<id>]`. Keys are the task ids.
    #[serde(default)]
    pub task: BTreeMap<String, TaskSpec>,
}

impl PlanFile {
    /// Materialise the plan's tasks in file order.
    pub fn tasks(&self) -> Vec<Task> {
        self.task
            .iter()
            .map(|(id, spec)| spec.to_task(id))
            .collect()
    }
}

/// `[plan]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlanSection {
    /// Process start date, ISO `YYYY-MM-DD` as a quoted string.
    ///
    /// If absent, the CLI falls back to today's date.
    #[serde(default)]
    pub start_date: Option<String>,
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSpec {
    /// Display title. The only mandatory field.
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// One of `hr`, `it`, `training`, `team`, `finance`, `other`.
    #[serde(default = "default_category")]
    pub category: Category,

    /// One of `low`, `medium`, `high`.
    #[serde(default = "default_priority")]
    pub priority: Priority,

    /// Due offset in days from the process start date.
    #[serde(default)]
    pub due_in_days: u32,

    /// Whether this step auto-completes via the automation engine.
    #[serde(default)]
    pub automated: bool,

    /// Informational flag shown in the task list.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Ids of tasks that must be completed first.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

fn default_category() -> Category {
    Category::Other
}

fn default_priority() -> Priority {
    Priority::Medium
}

fn default_required() -> bool {
    true
}

impl TaskSpec {
    /// Build the store task for this spec. Plan tasks always start pending.
    pub fn to_task(&self, id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            priority: self.priority,
            status: TaskStatus::Pending,
            due_in_days: self.due_in_days,
            automated: self.automated,
            required: self.required,
            depends_on: self.depends_on.clone(),
        }
    }
}
