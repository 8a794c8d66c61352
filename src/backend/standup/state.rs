//! Standup State
//!
//! At most one standup runs per channel. While it runs, `standup/send`
//! buffers `"{handle}: {message}"` lines; when it expires a tokio task joins
//! the lines with `"\n"` and posts them as one message from the starter.
//! Nothing is posted for an empty buffer.
//!
//! The map is guarded by a `std::sync::Mutex` that is never held across an
//! `.await`; store access happens before or after taking it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::backend::error::BackendError;
use crate::backend::messages::ops as messages;
use crate::backend::store::model::now;
use crate::backend::store::DataStore;
use crate::shared::channel::StandupActiveResponse;
use crate::shared::validation::validate_message;
use crate::shared::{ChannelId, UserId};

struct ActiveStandup {
    starter: UserId,
    time_finish: i64,
    lines: Vec<String>,
    task: Option<JoinHandle<()>>,
}

/// All running standups, keyed by channel
#[derive(Clone, Default)]
pub struct Standups {
    active: Arc<Mutex<HashMap<ChannelId, ActiveStandup>>>,
}

impl Standups {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ChannelId, ActiveStandup>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a standup lasting `length` seconds
    ///
    /// # Returns
    ///
    /// The Unix time at which the standup finishes.
    ///
    /// # Errors
    ///
    /// * `InputError` - unknown channel, `length` out of range, or a standup is already running
    /// * `AccessError` - the caller is not a member of the channel
    pub async fn start(
        &self,
        store: &DataStore,
        u_id: UserId,
        channel_id: ChannelId,
        length: i64,
    ) -> Result<i64, BackendError> {
        let time_finish = store
            .read(|document| -> Result<i64, BackendError> {
                let channel = document.channel(channel_id)?;
                if length < 1 {
                    return Err(BackendError::input("Standup length must be at least 1 second"));
                }
                let time_finish = now()
                    .checked_add(length)
                    .ok_or_else(|| BackendError::input("Standup length is too large"))?;
                if self.is_active(channel_id) {
                    return Err(BackendError::input(format!(
                        "A standup is already running in channel {}",
                        channel_id
                    )));
                }
                if !channel.is_member(u_id) {
                    return Err(BackendError::access(format!(
                        "You are not a member of channel {}",
                        channel_id
                    )));
                }
                Ok(time_finish)
            })
            .await?;

        {
            let mut active = self.lock();
            if active.contains_key(&channel_id) {
                return Err(BackendError::input(format!(
                    "A standup is already running in channel {}",
                    channel_id
                )));
            }
            active.insert(
                channel_id,
                ActiveStandup {
                    starter: u_id,
                    time_finish,
                    lines: Vec::new(),
                    task: None,
                },
            );
        }

        let standups = self.clone();
        let store = store.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(length as u64)).await;
            standups.finish(&store, channel_id).await;
        });
        if let Some(entry) = self.lock().get_mut(&channel_id) {
            entry.task = Some(task);
        }

        tracing::info!(
            "User {} started a {}s standup in channel {}",
            u_id,
            length,
            channel_id
        );
        Ok(time_finish)
    }

    fn is_active(&self, channel_id: ChannelId) -> bool {
        self.lock().contains_key(&channel_id)
    }

    /// Report whether a standup is running in a channel
    pub async fn active(
        &self,
        store: &DataStore,
        channel_id: ChannelId,
    ) -> Result<StandupActiveResponse, BackendError> {
        store
            .read(|document| document.channel(channel_id).map(|_| ()))
            .await?;
        let time_finish = self.lock().get(&channel_id).map(|s| s.time_finish);
        Ok(StandupActiveResponse {
            is_active: time_finish.is_some(),
            time_finish,
        })
    }

    /// Buffer a line in the running standup
    pub async fn send(
        &self,
        store: &DataStore,
        u_id: UserId,
        channel_id: ChannelId,
        message: &str,
    ) -> Result<(), BackendError> {
        let handle = store
            .read(|document| -> Result<String, BackendError> {
                let channel = document.channel(channel_id)?;
                validate_message(message)?;
                if !self.is_active(channel_id) {
                    return Err(BackendError::input(format!(
                        "No standup is running in channel {}",
                        channel_id
                    )));
                }
                if !channel.is_member(u_id) {
                    return Err(BackendError::access(format!(
                        "You are not a member of channel {}",
                        channel_id
                    )));
                }
                Ok(document.handle_of(u_id))
            })
            .await?;

        match self.lock().get_mut(&channel_id) {
            Some(standup) => {
                standup.lines.push(format!("{}: {}", handle, message));
                Ok(())
            }
            None => Err(BackendError::input(format!(
                "No standup is running in channel {}",
                channel_id
            ))),
        }
    }

    /// End a standup and post its summary
    async fn finish(&self, store: &DataStore, channel_id: ChannelId) {
        let Some(standup) = self.lock().remove(&channel_id) else {
            return;
        };
        if standup.lines.is_empty() {
            tracing::info!("Standup in channel {} ended with no messages", channel_id);
            return;
        }

        let summary = standup.lines.join("\n");
        let posted = store
            .mutate(|document| {
                messages::post_standup(document, standup.starter, channel_id, &summary, standup.time_finish)
            })
            .await;
        match posted {
            Ok(message_id) => tracing::info!(
                "Standup in channel {} posted as message {}",
                channel_id,
                message_id
            ),
            Err(e) => tracing::warn!("Standup in channel {} could not be posted: {}", channel_id, e),
        }
    }

    /// Abort every running standup without posting
    pub fn clear(&self) {
        for (_, standup) in self.lock().drain() {
            if let Some(task) = standup.task {
                task.abort();
            }
        }
    }
}
