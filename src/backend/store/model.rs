//! Store Document Model
//!
//! The records held in the single Dreams document and the lookups every
//! operation module shares. Lookups return `BackendError::InputError` for
//! unknown (or removed) ids so operations can use `?` directly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::shared::message::{page_end, MessagesPage, ReactView, PAGE_SIZE};
use crate::shared::{
    ChannelId, DmId, MessageId, MessageView, Notification, Permission, UserId, UserProfile,
};

/// Name and message text given to users removed by an admin
pub const REMOVED_USER: &str = "Removed user";

/// A registered user, including credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub u_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub name_first: String,
    pub name_last: String,
    pub handle_str: String,
    pub permission: Permission,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub reset_code: Option<String>,
}

impl UserRecord {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            u_id: self.u_id,
            email: self.email.clone(),
            name_first: self.name_first.clone(),
            name_last: self.name_last.clone(),
            handle_str: self.handle_str.clone(),
        }
    }

    pub fn is_owner(&self) -> bool {
        self.permission == Permission::Owner
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_public: bool,
    pub owner_members: Vec<UserId>,
    pub all_members: Vec<UserId>,
    /// Message ids in delivery order (oldest first)
    pub messages: Vec<MessageId>,
}

impl ChannelRecord {
    pub fn is_member(&self, u_id: UserId) -> bool {
        self.all_members.contains(&u_id)
    }

    pub fn is_owner(&self, u_id: UserId) -> bool {
        self.owner_members.contains(&u_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmRecord {
    pub dm_id: DmId,
    pub name: String,
    pub creator: UserId,
    pub members: Vec<UserId>,
    /// Cleared by `dm/remove`; inactive DMs behave as unknown ids
    pub active: bool,
    pub messages: Vec<MessageId>,
}

impl DmRecord {
    pub fn is_member(&self, u_id: UserId) -> bool {
        self.members.contains(&u_id)
    }
}

/// The container a message was posted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Target {
    Channel(ChannelId),
    Dm(DmId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct React {
    pub react_id: u32,
    pub u_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub message_id: MessageId,
    pub u_id: UserId,
    pub message: String,
    pub time_created: i64,
    pub target: Target,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub reacts: Vec<React>,
    #[serde(default)]
    pub is_pinned: bool,
}

impl MessageRecord {
    /// Render this message for `viewer`
    pub fn view(&self, viewer: UserId) -> MessageView {
        MessageView {
            message_id: self.message_id,
            u_id: self.u_id,
            message: self.message.clone(),
            time_created: self.time_created,
            reacts: self
                .reacts
                .iter()
                .map(|react| ReactView {
                    react_id: react.react_id,
                    u_ids: react.u_ids.clone(),
                    is_this_user_reacted: react.u_ids.contains(&viewer),
                })
                .collect(),
            is_pinned: self.is_pinned,
        }
    }
}

/// The whole persisted state of a Dreams server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub users: Vec<UserRecord>,
    pub channels: Vec<ChannelRecord>,
    pub dms: Vec<DmRecord>,
    pub messages: Vec<MessageRecord>,
    /// Per-user notifications, oldest first
    #[serde(default)]
    pub notifications: HashMap<UserId, Vec<Notification>>,
    pub next_user_id: UserId,
    pub next_channel_id: ChannelId,
    pub next_dm_id: DmId,
    pub next_message_id: MessageId,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            channels: Vec::new(),
            dms: Vec::new(),
            messages: Vec::new(),
            notifications: HashMap::new(),
            next_user_id: 0,
            next_channel_id: 1,
            next_dm_id: 0,
            next_message_id: 0,
        }
    }
}

impl Document {
    // ---- users ----

    /// Any user with this id, removed or not
    pub fn user(&self, u_id: UserId) -> Result<&UserRecord, BackendError> {
        self.users
            .iter()
            .find(|u| u.u_id == u_id)
            .ok_or_else(|| BackendError::input(format!("User {} does not exist", u_id)))
    }

    /// A user that has not been removed
    pub fn active_user(&self, u_id: UserId) -> Result<&UserRecord, BackendError> {
        match self.user(u_id)? {
            user if user.removed => {
                Err(BackendError::input(format!("User {} has been removed", u_id)))
            }
            user => Ok(user),
        }
    }

    pub fn user_mut(&mut self, u_id: UserId) -> Result<&mut UserRecord, BackendError> {
        self.users
            .iter_mut()
            .find(|u| u.u_id == u_id)
            .ok_or_else(|| BackendError::input(format!("User {} does not exist", u_id)))
    }

    pub fn user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| !u.removed && u.email == email)
    }

    pub fn handle_taken(&self, handle: &str) -> bool {
        self.users.iter().any(|u| !u.removed && u.handle_str == handle)
    }

    pub fn is_dreams_owner(&self, u_id: UserId) -> bool {
        self.user(u_id).map(UserRecord::is_owner).unwrap_or(false)
    }

    pub fn owner_count(&self) -> usize {
        self.users.iter().filter(|u| !u.removed && u.is_owner()).count()
    }

    pub fn handle_of(&self, u_id: UserId) -> String {
        self.user(u_id)
            .map(|u| u.handle_str.clone())
            .unwrap_or_default()
    }

    /// Profiles for a list of member ids, skipping ids that no longer resolve
    pub fn profiles(&self, ids: &[UserId]) -> Vec<UserProfile> {
        ids.iter()
            .filter_map(|id| self.user(*id).ok())
            .map(UserRecord::profile)
            .collect()
    }

    // ---- channels ----

    pub fn channel(&self, channel_id: ChannelId) -> Result<&ChannelRecord, BackendError> {
        self.channels
            .iter()
            .find(|c| c.channel_id == channel_id)
            .ok_or_else(|| BackendError::input(format!("Channel {} does not exist", channel_id)))
    }

    pub fn channel_mut(&mut self, channel_id: ChannelId) -> Result<&mut ChannelRecord, BackendError> {
        self.channels
            .iter_mut()
            .find(|c| c.channel_id == channel_id)
            .ok_or_else(|| BackendError::input(format!("Channel {} does not exist", channel_id)))
    }

    /// A channel the caller belongs to
    pub fn member_channel(
        &self,
        channel_id: ChannelId,
        u_id: UserId,
    ) -> Result<&ChannelRecord, BackendError> {
        let channel = self.channel(channel_id)?;
        if !channel.is_member(u_id) {
            return Err(BackendError::access(format!(
                "You are not a member of channel {}",
                channel_id
            )));
        }
        Ok(channel)
    }

    // ---- dms ----

    /// An active DM
    pub fn dm(&self, dm_id: DmId) -> Result<&DmRecord, BackendError> {
        self.dms
            .iter()
            .find(|d| d.dm_id == dm_id && d.active)
            .ok_or_else(|| BackendError::input(format!("DM {} does not exist", dm_id)))
    }

    pub fn dm_mut(&mut self, dm_id: DmId) -> Result<&mut DmRecord, BackendError> {
        self.dms
            .iter_mut()
            .find(|d| d.dm_id == dm_id && d.active)
            .ok_or_else(|| BackendError::input(format!("DM {} does not exist", dm_id)))
    }

    /// An active DM the caller belongs to
    pub fn member_dm(&self, dm_id: DmId, u_id: UserId) -> Result<&DmRecord, BackendError> {
        let dm = self.dm(dm_id)?;
        if !dm.is_member(u_id) {
            return Err(BackendError::access(format!(
                "You are not a member of DM {}",
                dm_id
            )));
        }
        Ok(dm)
    }

    // ---- containers ----

    /// Check that the target exists and `u_id` belongs to it
    pub fn require_member(&self, target: Target, u_id: UserId) -> Result<(), BackendError> {
        match target {
            Target::Channel(id) => self.member_channel(id, u_id).map(|_| ()),
            Target::Dm(id) => self.member_dm(id, u_id).map(|_| ()),
        }
    }

    /// Whether the target still exists and `u_id` belongs to it
    pub fn is_member_of(&self, target: Target, u_id: UserId) -> bool {
        self.require_member(target, u_id).is_ok()
    }

    pub fn container_name(&self, target: Target) -> String {
        match target {
            Target::Channel(id) => self.channel(id).map(|c| c.name.clone()),
            Target::Dm(id) => self.dm(id).map(|d| d.name.clone()),
        }
        .unwrap_or_default()
    }

    pub fn container_members(&self, target: Target) -> Vec<UserId> {
        match target {
            Target::Channel(id) => self.channel(id).map(|c| c.all_members.clone()),
            Target::Dm(id) => self.dm(id).map(|d| d.members.clone()),
        }
        .unwrap_or_default()
    }

    fn container_messages_mut(&mut self, target: Target) -> Result<&mut Vec<MessageId>, BackendError> {
        match target {
            Target::Channel(id) => Ok(&mut self.channel_mut(id)?.messages),
            Target::Dm(id) => Ok(&mut self.dm_mut(id)?.messages),
        }
    }

    // ---- messages ----

    /// A live (not removed) message
    pub fn message(&self, message_id: MessageId) -> Result<&MessageRecord, BackendError> {
        self.messages
            .iter()
            .find(|m| m.message_id == message_id && !m.removed)
            .ok_or_else(|| BackendError::input(format!("Message {} does not exist", message_id)))
    }

    pub fn message_mut(&mut self, message_id: MessageId) -> Result<&mut MessageRecord, BackendError> {
        self.messages
            .iter_mut()
            .find(|m| m.message_id == message_id && !m.removed)
            .ok_or_else(|| BackendError::input(format!("Message {} does not exist", message_id)))
    }

    pub fn live_message_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.removed).count()
    }

    /// Append a message record to the store and to its container
    ///
    /// The caller has already validated the target and the sender.
    pub fn append_message(
        &mut self,
        message_id: MessageId,
        u_id: UserId,
        text: String,
        target: Target,
        time_created: i64,
    ) -> Result<(), BackendError> {
        self.container_messages_mut(target)?.push(message_id);
        self.messages.push(MessageRecord {
            message_id,
            u_id,
            message: text,
            time_created,
            target,
            removed: false,
            reacts: Vec::new(),
            is_pinned: false,
        });
        Ok(())
    }

    /// One page of a container's history, newest first
    pub fn page(
        &self,
        ids: &[MessageId],
        viewer: UserId,
        start: u32,
    ) -> Result<MessagesPage, BackendError> {
        let visible: Vec<&MessageRecord> = ids
            .iter()
            .rev()
            .filter_map(|id| self.message(*id).ok())
            .collect();
        let start_index = start as usize;
        if start_index > visible.len() {
            return Err(BackendError::input(format!(
                "Start {} is past the {} messages in this conversation",
                start,
                visible.len()
            )));
        }
        let messages = visible
            .iter()
            .skip(start_index)
            .take(PAGE_SIZE)
            .map(|m| m.view(viewer))
            .collect();
        Ok(MessagesPage {
            messages,
            start,
            end: page_end(start_index, visible.len()),
        })
    }

    // ---- ids ----

    pub fn next_user_id(&mut self) -> UserId {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    pub fn next_channel_id(&mut self) -> ChannelId {
        let id = self.next_channel_id;
        self.next_channel_id += 1;
        id
    }

    pub fn next_dm_id(&mut self) -> DmId {
        let id = self.next_dm_id;
        self.next_dm_id += 1;
        id
    }

    pub fn next_message_id(&mut self) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    // ---- notifications ----

    pub fn notify(&mut self, u_id: UserId, target: Target, notification_message: String) {
        let (channel_id, dm_id) = match target {
            Target::Channel(id) => (Some(id), None),
            Target::Dm(id) => (None, Some(id)),
        };
        self.notifications.entry(u_id).or_default().push(Notification {
            channel_id,
            dm_id,
            notification_message,
        });
    }
}

/// Current time as a Unix timestamp in seconds
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
