//! Notification and Statistics Wire Types

use serde::{Deserialize, Serialize};

use crate::shared::channel::ChannelId;
use crate::shared::dm::DmId;

/// Number of notifications returned by `notifications/get`
pub const NOTIFICATION_LIMIT: usize = 20;

/// A notification delivered to one user
///
/// Exactly one of `channel_id` and `dm_id` is set; the other serializes as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub channel_id: Option<ChannelId>,
    pub dm_id: Option<DmId>,
    pub notification_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// A counter sampled at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStamp {
    pub count: usize,
    /// Unix timestamp in seconds
    pub time_stamp: i64,
}

/// Activity of one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub channels_joined: Vec<CountStamp>,
    pub dms_joined: Vec<CountStamp>,
    pub messages_sent: Vec<CountStamp>,
    pub involvement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub user_stats: UserStats,
}

/// Dreams-wide activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamsStats {
    pub channels_exist: Vec<CountStamp>,
    pub dms_exist: Vec<CountStamp>,
    pub messages_exist: Vec<CountStamp>,
    pub utilization_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamsStatsResponse {
    pub dreams_stats: DreamsStats,
}

/// Divide `part` by `whole`, returning 0 for an empty whole and capping at 1
pub fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64).min(1.0)
}
