//! Delayed Message Delivery
//!
//! `message/sendlater` and `message/sendlaterdm` reserve a message id inside
//! the request and hand the rest to the [`Scheduler`]: one tokio task per
//! message that sleeps until `time_sent` and then appends the message under
//! the store's write lock. The task reports the outcome on a oneshot channel
//! and the request waits for it, so the message is visible once the response
//! arrives. The task runs to completion even if the caller goes away.
//! Pending deliveries live only in memory and are lost on restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::backend::error::BackendError;
use crate::backend::messages::ops;
use crate::backend::store::model::now;
use crate::backend::store::{DataStore, Target};
use crate::shared::{MessageId, UserId};

/// A reserved message waiting for its send time
#[derive(Debug, Clone)]
pub struct ScheduledMessage {
    pub message_id: MessageId,
    pub u_id: UserId,
    pub target: Target,
    pub text: String,
    /// Unix timestamp in seconds; also becomes `time_created`
    pub time_sent: i64,
}

/// Tracks the tasks of pending deliveries
#[derive(Clone, Default)]
pub struct Scheduler {
    tasks: Arc<Mutex<HashMap<MessageId, JoinHandle<()>>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<MessageId, JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawn the delivery task for a reserved message
    ///
    /// The returned receiver yields the delivery result. It closes without a
    /// value when the delivery is cancelled by [`Scheduler::cancel_all`].
    pub fn schedule(
        &self,
        store: DataStore,
        scheduled: ScheduledMessage,
    ) -> oneshot::Receiver<Result<(), BackendError>> {
        let delay = Duration::from_secs((scheduled.time_sent - now()).max(0) as u64);
        let message_id = scheduled.message_id;
        tracing::info!(
            "Message {} from user {} scheduled in {}s",
            message_id,
            scheduled.u_id,
            delay.as_secs()
        );

        let (report, delivery) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let ScheduledMessage {
                message_id,
                u_id,
                target,
                text,
                time_sent,
            } = scheduled;
            let delivered = store
                .mutate(|document| {
                    ops::deliver_scheduled(document, u_id, target, message_id, &text, time_sent)
                })
                .await;
            match &delivered {
                Ok(()) => tracing::info!("Delivered scheduled message {}", message_id),
                Err(e) => tracing::warn!("Dropped scheduled message {}: {}", message_id, e),
            }
            // the caller may have disconnected
            let _ = report.send(delivered);
        });

        let mut tasks = self.lock();
        tasks.retain(|_, task| !task.is_finished());
        tasks.insert(message_id, handle);
        delivery
    }

    /// Number of deliveries that have not run yet
    pub fn pending(&self) -> usize {
        self.lock().values().filter(|task| !task.is_finished()).count()
    }

    /// Abort every pending delivery
    pub fn cancel_all(&self) {
        let mut tasks = self.lock();
        for (_, task) in tasks.drain() {
            task.abort();
        }
    }
}
