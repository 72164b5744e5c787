// src/timeline/model.rs

use chrono::{Days, NaiveDate};

use crate::dag::{DerivedStatus, derived_status, progress_percent};
use crate::store::Task;

/// A task projected onto the timeline. Never persisted; recomputed from the
/// store snapshot whenever it changes.
#[derive(Debug, Clone)]
pub struct TimelineTask {
    pub task: Task,
    /// Day the bar starts on.
    pub start_date: NaiveDate,
    /// Day the bar ends on (inclusive).
    ///
    /// Both dates currently resolve to `process_start + due_in_days`, so
    /// every bar occupies a single axis unit. Spanning bars from a task's
    /// unlock date to its due date is deliberately left for a product
    /// decision; the layout math below already handles multi-day spans.
    pub end_date: NaiveDate,
    /// Completion progress shown inside the bar: 0 / 50 / 100.
    pub progress: u8,
    /// Dependency-aware status driving the bar colour.
    pub derived: DerivedStatus,
}

/// Project every task in the snapshot onto the date axis anchored at
/// `process_start`.
pub fn timeline_tasks(process_start: NaiveDate, tasks: &[Task]) -> Vec<TimelineTask> {
    tasks
        .iter()
        .map(|task| {
            let due = due_date(process_start, task.due_in_days);
            TimelineTask {
                start_date: due,
                end_date: due,
                progress: progress_percent(task.status),
                derived: derived_status(task, tasks),
                task: task.clone(),
            }
        })
        .collect()
}

/// `process_start + due_in_days`, saturating at the calendar boundary.
fn due_date(process_start: NaiveDate, due_in_days: u32) -> NaiveDate {
    process_start
        .checked_add_days(Days::new(u64::from(due_in_days)))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Task, TaskStatus};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[test]
    fn due_offset_sets_both_dates() {
        let mut task = Task::new("1", "I-9");
        task.due_in_days = 3;
        let projected = timeline_tasks(start(), &[task]);

        let expected = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        assert_eq!(projected[0].start_date, expected);
        assert_eq!(projected[0].end_date, expected);
    }

    #[test]
    fn progress_follows_stored_status() {
        let mut a = Task::new("a", "a");
        a.status = TaskStatus::InProgress;
        let mut b = Task::new("b", "b");
        b.status = TaskStatus::Completed;

        let projected = timeline_tasks(start(), &[a, b]);
        assert_eq!(projected[0].progress, 50);
        assert_eq!(projected[1].progress, 100);
    }
}
