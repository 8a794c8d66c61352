//! Search and Notification Operations

use crate::backend::error::BackendError;
use crate::backend::store::model::Document;
use crate::shared::stats::NOTIFICATION_LIMIT;
use crate::shared::validation::validate_query;
use crate::shared::{MessageView, Notification, UserId};

/// Live messages whose text equals `query_str` exactly, from every channel
/// and active DM the caller belongs to, oldest first
pub fn search(document: &Document, u_id: UserId, query_str: &str) -> Result<Vec<MessageView>, BackendError> {
    validate_query(query_str)?;
    Ok(document
        .messages
        .iter()
        .filter(|m| !m.removed && m.message == query_str)
        .filter(|m| document.is_member_of(m.target, u_id))
        .map(|m| m.view(u_id))
        .collect())
}

/// The caller's most recent notifications, newest first
pub fn notifications(document: &Document, u_id: UserId) -> Vec<Notification> {
    document
        .notifications
        .get(&u_id)
        .map(|all| all.iter().rev().take(NOTIFICATION_LIMIT).cloned().collect())
        .unwrap_or_default()
}
