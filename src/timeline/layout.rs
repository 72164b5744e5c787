// src/timeline/layout.rs

use chrono::NaiveDate;
use tracing::warn;

use crate::timeline::model::TimelineTask;

/// Horizontal placement of one task's bar, as fractions of the full axis.
///
/// Multiplied by the chart width at render time: `offset_fraction` is where
/// the bar starts, `width_fraction` how wide it is. A task whose start and
/// end fall on the same axis day gets exactly one axis unit of width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub offset_fraction: f64,
    pub width_fraction: f64,
}

/// Position a task's bar on the given axis.
///
/// Returns `None` when a date is missing from the axis or the axis is empty.
/// That cannot happen for an axis built by [`crate::timeline::timeline_dates`]
/// over the same tasks; it is reported as a warning rather than a panic so a
/// stale axis degrades to a missing bar, not a crash.
pub fn layout(task: &TimelineTask, axis: &[NaiveDate]) -> Option<BarLayout> {
    let start_index = index_of(task, task.start_date, axis)?;
    let end_index = index_of(task, task.end_date, axis)?;

    let len = axis.len() as f64;
    let duration = end_index.saturating_sub(start_index) + 1;

    Some(BarLayout {
        offset_fraction: start_index as f64 / len,
        width_fraction: duration as f64 / len,
    })
}

fn index_of(task: &TimelineTask, date: NaiveDate, axis: &[NaiveDate]) -> Option<usize> {
    let index = axis.iter().position(|d| *d == date);
    if index.is_none() {
        warn!(task = %task.task.id, %date, "date missing from timeline axis; bar not placed");
    }
    index
}
