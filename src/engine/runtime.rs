// src/engine/runtime.rs

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::engine::provision::{PROVISION_DELAY, spawn_automation_timer};
use crate::store::{TaskId, TaskStatus, TaskStore};

/// Events sent into the engine from timers, the UI layer, or signals.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// An automation timer elapsed; the task's simulated provisioning is done.
    AutomationFired { task: TaskId },
    /// The user toggled a task's completion checkbox.
    ToggleRequested { task: TaskId },
    /// Navigation away or Ctrl-C: cancel outstanding timers and stop.
    ShutdownRequested,
}

/// Options that influence how the engine behaves.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// If true, return as soon as no automation timers are outstanding.
    pub exit_when_idle: bool,
    /// Delay for automation timers. Tests shrink this; the wizard uses
    /// [`PROVISION_DELAY`].
    pub automation_delay: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            exit_when_idle: true,
            automation_delay: PROVISION_DELAY,
        }
    }
}

/// The automation event loop.
///
/// Owns the current store snapshot for the session. Automated pending tasks
/// are marked `in_progress` and given a timer at startup; every event is
/// merged into whatever the snapshot is *at that moment*, so an edit racing
/// a pending timer is never lost. On shutdown all outstanding timers are
/// aborted, which is what keeps a discarded session from being resurrected
/// by a late write.
pub struct Engine {
    store: TaskStore,
    options: EngineOptions,

    /// Unified event stream from timers, UI writes, and the signal handler.
    events_rx: mpsc::Receiver<EngineEvent>,

    /// Outstanding automation timers keyed by task id.
    timers: HashMap<TaskId, JoinHandle<()>>,
}

impl Engine {
    pub fn new(store: TaskStore, options: EngineOptions, events_rx: mpsc::Receiver<EngineEvent>) -> Self {
        Self {
            store,
            options,
            events_rx,
            timers: HashMap::new(),
        }
    }

    /// Main event loop. Returns the final store snapshot.
    ///
    /// `events_tx` is handed to the automation timers and dropped here once
    /// they are spawned; external producers (UI, signal handler) keep their
    /// own clones.
    pub async fn run(mut self, events_tx: mpsc::Sender<EngineEvent>) -> Result<TaskStore> {
        info!("automation engine started");

        self.start_automated_tasks(&events_tx);
        drop(events_tx);

        if self.is_idle() && self.options.exit_when_idle {
            info!("no automated tasks to run; engine idle");
            return Ok(self.store);
        }

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "engine received event");

            match event {
                EngineEvent::AutomationFired { task } => {
                    self.timers.remove(&task);
                    self.merge_completion(&task);
                }
                EngineEvent::ToggleRequested { task } => match self.store.toggle_completion(&task) {
                    Ok(next) => self.store = next,
                    Err(err) => warn!(task = %task, error = %err, "toggle rejected"),
                },
                EngineEvent::ShutdownRequested => {
                    self.cancel_outstanding();
                    break;
                }
            }

            if self.is_idle() && self.options.exit_when_idle {
                info!("all automation timers resolved; engine idle");
                break;
            }
        }

        Ok(self.store)
    }

    /// Mark every automated pending task `in_progress` and start its timer.
    fn start_automated_tasks(&mut self, events_tx: &mpsc::Sender<EngineEvent>) {
        let automated: Vec<TaskId> = self
            .store
            .tasks()
            .iter()
            .filter(|t| t.automated && t.status == TaskStatus::Pending)
            .map(|t| t.id.clone())
            .collect();

        for id in automated {
            match self.store.with_status(&id, TaskStatus::InProgress) {
                Ok(next) => self.store = next,
                Err(err) => {
                    warn!(task = %id, error = %err, "could not mark automated task in_progress");
                    continue;
                }
            }

            info!(task = %id, delay = ?self.options.automation_delay, "starting automated step");
            let handle =
                spawn_automation_timer(id.clone(), self.options.automation_delay, events_tx.clone());
            self.timers.insert(id, handle);
        }
    }

    /// Merge an automation completion into the current snapshot.
    ///
    /// The write is replace-with-merge by id: whatever else changed since the
    /// timer was spawned stays intact, and a task edited out of the store in
    /// the meantime degrades to a warning.
    fn merge_completion(&mut self, task: &str) {
        match self.store.with_status(task, TaskStatus::Completed) {
            Ok(next) => {
                info!(task = %task, "automated step completed");
                self.store = next;
            }
            Err(err) => {
                warn!(task = %task, error = %err, "automation fired for task no longer in store");
            }
        }
    }

    fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Abort all outstanding timers so a discarded session cannot receive a
    /// late completion.
    fn cancel_outstanding(&mut self) {
        if self.timers.is_empty() {
            return;
        }
        info!(outstanding = self.timers.len(), "cancelling outstanding automation timers");
        for (task, handle) in self.timers.drain() {
            debug!(task = %task, "aborting automation timer");
            handle.abort();
        }
    }
}
