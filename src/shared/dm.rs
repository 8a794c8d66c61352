//! Direct Message (DM) Wire Types

use serde::{Deserialize, Serialize};

use crate::shared::user::{UserId, UserProfile};

/// Numeric DM identifier (allocated from 0)
pub type DmId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmCreateRequest {
    /// Members besides the caller
    pub u_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmCreateResponse {
    pub dm_id: DmId,
    pub dm_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmSummary {
    pub dm_id: DmId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmListResponse {
    pub dms: Vec<DmSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmQuery {
    pub dm_id: DmId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmDetails {
    pub name: String,
    pub members: Vec<UserProfile>,
}

/// Body carrying just a DM id (`dm/leave`, `dm/remove`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmIdRequest {
    pub dm_id: DmId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmInviteRequest {
    pub dm_id: DmId,
    pub u_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmMessagesQuery {
    pub dm_id: DmId,
    pub start: u32,
}
