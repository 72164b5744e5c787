// src/timeline/axis.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::timeline::model::TimelineTask;

/// Collect the distinct calendar days the timeline must show.
///
/// The axis is the process start date plus every task's start and end date,
/// ascending, deduplicated by day. Every task projected with the same start
/// date is therefore guaranteed to find both of its dates on the axis, so
/// position lookups in [`crate::timeline::layout`] never miss.
pub fn timeline_dates(process_start: NaiveDate, tasks: &[TimelineTask]) -> Vec<NaiveDate> {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    days.insert(process_start);

    for task in tasks {
        days.insert(task.start_date);
        days.insert(task.end_date);
    }

    days.into_iter().collect()
}
