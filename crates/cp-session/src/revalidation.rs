use crate::SessionManager;

use std::time::Duration;

use log::{debug, info};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Owns the periodic revalidation task.
///
/// Dropping the handle stops the timer too: the task watches the shutdown
/// channel, which closes when the sender goes away.
pub struct RevalidationHandle {
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl RevalidationHandle {
    pub(crate) fn spawn(manager: SessionManager, period: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("Session revalidation every {}s", period.as_secs_f64());

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = ticker.tick() => {}
                }

                // An in-flight refresh is dropped on shutdown, aborting the request.
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = manager.revalidate() => {}
                }
            }

            debug!("Session revalidation stopped");
        });

        Self {
            shutdown_tx,
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the timer and wait for the task to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}
