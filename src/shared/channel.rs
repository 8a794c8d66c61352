//! Channel and Standup Wire Types

use serde::{Deserialize, Serialize};

use crate::shared::user::{UserId, UserProfile};

/// Numeric channel identifier (allocated from 1)
pub type ChannelId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCreateRequest {
    pub name: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCreateResponse {
    pub channel_id: ChannelId,
}

/// One entry of `channels/list` and `channels/listall`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel_id: ChannelId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelsListResponse {
    pub channels: Vec<ChannelSummary>,
}

/// Query carrying just a channel id (`channel/details`, `standup/active`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelQuery {
    pub channel_id: ChannelId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDetails {
    pub name: String,
    pub is_public: bool,
    pub owner_members: Vec<UserProfile>,
    pub all_members: Vec<UserProfile>,
}

/// Body carrying just a channel id (`channel/join`, `channel/leave`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelIdRequest {
    pub channel_id: ChannelId,
}

/// Body for invite, addowner and removeowner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMemberRequest {
    pub channel_id: ChannelId,
    pub u_id: UserId,
}

/// Query for `channel/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMessagesQuery {
    pub channel_id: ChannelId,
    pub start: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupStartRequest {
    pub channel_id: ChannelId,
    /// Duration in seconds; must be at least 1
    pub length: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupStartResponse {
    pub time_finish: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupActiveResponse {
    pub is_active: bool,
    /// `None` (serialized as `null`) when no standup is running
    pub time_finish: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupSendRequest {
    pub channel_id: ChannelId,
    pub message: String,
}
