use std::error::Error;

use chrono::NaiveDate;
use taskdag::dag::DerivedStatus;
use taskdag::store::TaskStore;
use taskdag::timeline::{layout, timeline_dates, timeline_tasks};

type TestResult = Result<(), Box<dyn Error>>;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

#[test]
fn axis_covers_every_seeded_task() -> TestResult {
    let store = TaskStore::new(Vec::new());
    let projected = timeline_tasks(start(), store.tasks());
    let axis = timeline_dates(start(), &projected);

    for t in &projected {
        assert!(axis.contains(&t.start_date), "missing start for {}", t.task.id);
        assert!(axis.contains(&t.end_date), "missing end for {}", t.task.id);
    }

    // Seed due offsets are 3, 5, 7, 2, 5, 3, 10, 14 days plus the start day:
    // six distinct offsets -> seven axis days.
    assert_eq!(axis.len(), 7);
    Ok(())
}

#[test]
fn every_bar_lands_on_the_axis() -> TestResult {
    let store = TaskStore::new(Vec::new());
    let projected = timeline_tasks(start(), store.tasks());
    let axis = timeline_dates(start(), &projected);

    for t in &projected {
        let bar = layout(t, &axis).expect("bar should place on its own axis");
        assert!(bar.offset_fraction >= 0.0 && bar.offset_fraction < 1.0);
        assert!(bar.width_fraction > 0.0 && bar.width_fraction <= 1.0);
        // Coincident start/end means exactly one axis unit of width.
        assert_eq!(bar.width_fraction, 1.0 / axis.len() as f64);
    }
    Ok(())
}

#[test]
fn seeded_tasks_start_pending_and_unblocked() -> TestResult {
    let store = TaskStore::new(Vec::new());
    let projected = timeline_tasks(start(), store.tasks());

    // Seed tasks carry no dependencies, so nothing is blocked up front.
    assert!(projected.iter().all(|t| t.derived == DerivedStatus::Pending));
    assert!(projected.iter().all(|t| t.progress == 0));
    Ok(())
}

#[test]
fn blocked_task_still_gets_a_bar() -> TestResult {
    let store = TaskStore::new(Vec::new());
    let store = store.set_dependencies("2", vec!["1".to_string()])?;

    let projected = timeline_tasks(start(), store.tasks());
    let axis = timeline_dates(start(), &projected);

    let handbook = projected.iter().find(|t| t.task.id == "2").unwrap();
    assert_eq!(handbook.derived, DerivedStatus::Blocked);
    assert!(layout(handbook, &axis).is_some());
    Ok(())
}
