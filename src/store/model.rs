// src/store/model.rs

use serde::{Deserialize, Serialize};

/// Public type alias for task identifiers throughout the crate.
///
/// Ids are opaque strings, unique within one store, stable for the lifetime
/// of an onboarding/offboarding session.
pub type TaskId = String;

/// Coarse grouping used only for filtering in the task list UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hr,
    It,
    Training,
    Team,
    Finance,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hr => "HR",
            Category::It => "IT",
            Category::Training => "Training",
            Category::Team => "Team",
            Category::Finance => "Finance",
            Category::Other => "Other",
        }
    }
}

/// Task priority as shown in the list and timeline badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// *Stored* status of a task.
///
/// This is what mutations write. It is distinct from the derived status
/// computed by [`crate::dag::derived_status`], which additionally folds in
/// dependency state (`blocked`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }
}

/// One unit of onboarding/offboarding work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Due offset in days from the process start date.
    pub due_in_days: u32,
    /// Whether this step is simulated as auto-completing.
    pub automated: bool,
    /// Informational only; not enforced by any validation rule.
    pub required: bool,
    /// Ids of tasks that must be completed before this one can start.
    /// May be empty. Must not contain the task's own id.
    pub depends_on: Vec<TaskId>,
}

impl Task {
    /// Convenience constructor for a pending, non-automated, required task
    /// with no dependencies.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: Category::Other,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            due_in_days: 0,
            automated: false,
            required: true,
            depends_on: Vec::new(),
        }
    }
}

/// The fixed seed list substituted when a wizard session starts with no tasks.
pub fn default_onboarding_tasks() -> Vec<Task> {
    fn seed(
        id: &str,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        due_in_days: u32,
        automated: bool,
    ) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            priority,
            status: TaskStatus::Pending,
            due_in_days,
            automated,
            required: true,
            depends_on: Vec::new(),
        }
    }

    vec![
        seed(
            "1",
            "Complete I-9 Form",
            "Submit employment eligibility verification",
            Category::Hr,
            Priority::High,
            3,
            false,
        ),
        seed(
            "2",
            "Sign Employee Handbook",
            "Review and sign company policies",
            Category::Hr,
            Priority::High,
            5,
            true,
        ),
        seed(
            "3",
            "Complete Security Training",
            "Mandatory security awareness training",
            Category::It,
            Priority::High,
            7,
            true,
        ),
        seed(
            "4",
            "Setup Development Environment",
            "Configure local development tools and environments",
            Category::It,
            Priority::High,
            2,
            false,
        ),
        seed(
            "5",
            "Team Introduction Meeting",
            "Meet with team members and get introduced to the team",
            Category::Team,
            Priority::Medium,
            5,
            false,
        ),
        seed(
            "6",
            "Setup Payroll Information",
            "Complete direct deposit and tax forms",
            Category::Hr,
            Priority::High,
            3,
            true,
        ),
        seed(
            "7",
            "Company Overview Training",
            "Complete company overview and culture training",
            Category::Training,
            Priority::Medium,
            10,
            true,
        ),
        seed(
            "8",
            "Benefits Enrollment",
            "Select and enroll in company benefits",
            Category::Hr,
            Priority::High,
            14,
            false,
        ),
    ]
}
