// src/engine/provision.rs

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::engine::runtime::EngineEvent;
use crate::store::TaskId;

/// Flat delay standing in for a real asynchronous provisioning call.
pub const PROVISION_DELAY: Duration = Duration::from_secs(2);

/// Spawn the timer simulating one automated step.
///
/// After `delay` it emits [`EngineEvent::AutomationFired`] for the task and
/// exits. The returned handle is kept by the runtime keyed by task id;
/// aborting it (navigation away, shutdown) is the only cancellation path —
/// a fired-but-unreceived event is still harmless because the runtime merges
/// against its *current* snapshot, never against the one this timer saw.
pub fn spawn_automation_timer(
    task: TaskId,
    delay: Duration,
    events_tx: mpsc::Sender<EngineEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        debug!(task = %task, "automation timer elapsed; emitting AutomationFired");
        let _ = events_tx.send(EngineEvent::AutomationFired { task }).await;
    })
}
