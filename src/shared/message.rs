//! Message Wire Types
//!
//! Bodies for the `message/*` routes and the per-viewer message view returned
//! by the paginated `channel/messages` and `dm/messages` routes and by search.
//!
//! # Pagination
//!
//! A page holds up to [`PAGE_SIZE`] messages, newest first. `end` is
//! `start + PAGE_SIZE`, or `-1` once the page reaches the oldest message.

use serde::{Deserialize, Serialize};

use crate::shared::channel::ChannelId;
use crate::shared::dm::DmId;
use crate::shared::user::UserId;

/// Numeric message identifier (allocated from 0, shared by channels and DMs)
pub type MessageId = u32;

/// Number of messages per page
pub const PAGE_SIZE: usize = 50;

/// The only reaction currently supported
pub const THUMBS_UP: u32 = 1;

/// A reaction as seen by one viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactView {
    pub react_id: u32,
    pub u_ids: Vec<UserId>,
    /// Whether the viewing user is in `u_ids`
    pub is_this_user_reacted: bool,
}

/// A message as returned to a particular viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageView {
    pub message_id: MessageId,
    pub u_id: UserId,
    pub message: String,
    /// Unix timestamp in seconds
    pub time_created: i64,
    pub reacts: Vec<ReactView>,
    pub is_pinned: bool,
}

/// One page of a container's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesPage {
    pub messages: Vec<MessageView>,
    pub start: u32,
    pub end: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub channel_id: ChannelId,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDmRequest {
    pub dm_id: DmId,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageIdResponse {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub message_id: MessageId,
    pub message: String,
}

/// Body carrying just a message id (`message/remove`, pin, unpin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageIdRequest {
    pub message_id: MessageId,
}

/// Body for `message/share`
///
/// Exactly one of `channel_id` and `dm_id` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    pub og_message_id: MessageId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    #[serde(default)]
    pub dm_id: Option<DmId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub shared_message_id: MessageId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactRequest {
    pub message_id: MessageId,
    pub react_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendLaterRequest {
    pub channel_id: ChannelId,
    pub message: String,
    /// Unix timestamp in seconds
    pub time_sent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendLaterDmRequest {
    pub dm_id: DmId,
    pub message: String,
    /// Unix timestamp in seconds
    pub time_sent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query_str: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub messages: Vec<MessageView>,
}

/// Compute the `end` marker of a page
///
/// # Example
///
/// ```rust
/// use dreams::shared::message::page_end;
///
/// assert_eq!(page_end(0, 120), 50);
/// assert_eq!(page_end(100, 120), -1);
/// assert_eq!(page_end(0, 50), -1);
/// ```
pub fn page_end(start: usize, visible: usize) -> i64 {
    if start + PAGE_SIZE >= visible {
        -1
    } else {
        (start + PAGE_SIZE) as i64
    }
}
