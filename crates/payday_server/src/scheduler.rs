//! # Payday Scheduler
//!
//! One repeating timer owns the scheduled-payday signal. On every tick it
//! enumerates the currently connected players and dispatches one independent
//! task per player, so a slow store call or a failure for one player never
//! blocks or aborts processing for the rest.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::manager::PaydayManager;

/// Spawner for the repeating payday task.
pub struct PaydayScheduler;

impl PaydayScheduler {
    /// Starts the repeating payday timer on the current runtime.
    ///
    /// The interval comes from the manager's configuration. The first payday
    /// fires one full interval after startup, not immediately.
    #[must_use]
    pub fn spawn(manager: Arc<PaydayManager>) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let interval = Duration::from_millis(manager.config().payments.interval_ms.max(1));
        // Anchor the timer at spawn time, one full interval out, so startup
        // does not count as a payday even if the task is first polled late.
        let mut ticker =
            tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = ticker.tick() => fan_out(&manager),
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        SchedulerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Dispatches one detached processing task per connected player.
fn fan_out(manager: &Arc<PaydayManager>) {
    for player in manager.registry().connected() {
        let manager = Arc::clone(manager);
        tokio::spawn(async move {
            if let Err(err) = manager.process_scheduled(player).await {
                tracing::warn!(
                    target: "payday",
                    %player,
                    error = %err,
                    "scheduled payday processing failed"
                );
            }
        });
    }
}

/// Handle to the running scheduler task.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Stops the timer and waits for the scheduler task to exit.
    ///
    /// Per-player tasks already in flight run to completion; no payment is
    /// cancelled mid-pipeline.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
