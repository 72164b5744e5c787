use std::time::Duration;

use tokio::sync::mpsc;

use taskdag::engine::{Engine, EngineEvent, EngineOptions};
use taskdag::store::{Task, TaskStatus, TaskStore};

fn fast_options() -> EngineOptions {
    EngineOptions {
        exit_when_idle: true,
        automation_delay: Duration::from_millis(20),
    }
}

fn automated(id: &str, title: &str) -> Task {
    let mut t = Task::new(id, title);
    t.automated = true;
    t
}

#[tokio::test]
async fn automated_tasks_complete_when_timers_fire() {
    let store = TaskStore::new(vec![
        automated("handbook", "Sign Employee Handbook"),
        Task::new("i9", "Complete I-9 Form"),
    ]);

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(16);
    let engine = Engine::new(store, fast_options(), events_rx);
    let final_store = engine.run(events_tx).await.unwrap();

    assert_eq!(
        final_store.get("handbook").unwrap().status,
        TaskStatus::Completed
    );
    // Manual tasks are untouched by automation.
    assert_eq!(final_store.get("i9").unwrap().status, TaskStatus::Pending);
}

#[tokio::test]
async fn user_edits_survive_a_pending_timer() {
    // A toggle arriving while the automation timer is still pending must not
    // be clobbered when the timer's completion is merged in.
    let store = TaskStore::new(vec![
        automated("training", "Security Training"),
        Task::new("i9", "Complete I-9 Form"),
    ]);

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(16);
    events_tx
        .send(EngineEvent::ToggleRequested {
            task: "i9".to_string(),
        })
        .await
        .unwrap();

    let engine = Engine::new(store, fast_options(), events_rx);
    let final_store = engine.run(events_tx).await.unwrap();

    assert_eq!(
        final_store.get("i9").unwrap().status,
        TaskStatus::Completed
    );
    assert_eq!(
        final_store.get("training").unwrap().status,
        TaskStatus::Completed
    );
}

#[tokio::test]
async fn shutdown_cancels_outstanding_timers() {
    let mut options = fast_options();
    options.automation_delay = Duration::from_secs(30);

    let store = TaskStore::new(vec![automated("payroll", "Setup Payroll Information")]);

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(16);
    events_tx
        .send(EngineEvent::ShutdownRequested)
        .await
        .unwrap();

    let engine = Engine::new(store, options, events_rx);

    // Must return promptly despite the 30s timer: shutdown aborts it.
    let final_store = tokio::time::timeout(Duration::from_secs(2), engine.run(events_tx))
        .await
        .expect("engine did not stop on shutdown")
        .unwrap();

    // The step was started but never completed.
    assert_eq!(
        final_store.get("payroll").unwrap().status,
        TaskStatus::InProgress
    );
}

#[tokio::test]
async fn engine_is_idle_without_automated_tasks() {
    let store = TaskStore::new(vec![Task::new("i9", "Complete I-9 Form")]);

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(16);
    let engine = Engine::new(store, fast_options(), events_rx);

    let final_store = tokio::time::timeout(Duration::from_secs(2), engine.run(events_tx))
        .await
        .expect("engine should return immediately when idle")
        .unwrap();

    assert_eq!(final_store.get("i9").unwrap().status, TaskStatus::Pending);
}

#[tokio::test]
async fn already_completed_automated_tasks_are_not_restarted() {
    let store = TaskStore::new(vec![automated("handbook", "Sign Employee Handbook")]);
    let store = store.toggle_completion("handbook").unwrap();

    let (events_tx, events_rx) = mpsc::channel::<EngineEvent>(16);
    let engine = Engine::new(store, fast_options(), events_rx);
    let final_store = engine.run(events_tx).await.unwrap();

    assert_eq!(
        final_store.get("handbook").unwrap().status,
        TaskStatus::Completed
    );
}
