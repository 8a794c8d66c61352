//! Dreams Owner Operations
//!
//! Both operations check the caller's permission before anything else, so a
//! non-owner gets `AccessError` even for an unknown target.

use crate::backend::error::BackendError;
use crate::backend::store::model::{Document, REMOVED_USER};
use crate::shared::{Permission, UserId};

fn require_dreams_owner(document: &Document, u_id: UserId) -> Result<(), BackendError> {
    if document.is_dreams_owner(u_id) {
        Ok(())
    } else {
        Err(BackendError::access("Only Dreams owners can do this"))
    }
}

/// Remove a user from Dreams
///
/// The record stays behind so profiles and old messages still resolve: both
/// names and every message the user sent read [`REMOVED_USER`], and the user
/// is taken out of every channel and DM. Ending the user's sessions is left
/// to the caller.
pub fn remove_user(document: &mut Document, u_id: UserId, target: UserId) -> Result<(), BackendError> {
    require_dreams_owner(document, u_id)?;
    let user = document.active_user(target)?;
    if user.is_owner() && document.owner_count() == 1 {
        return Err(BackendError::input("Cannot remove the only Dreams owner"));
    }

    let user = document.user_mut(target)?;
    user.removed = true;
    user.name_first = REMOVED_USER.to_string();
    user.name_last = REMOVED_USER.to_string();
    user.reset_code = None;

    for message in document.messages.iter_mut().filter(|m| m.u_id == target) {
        message.message = REMOVED_USER.to_string();
    }
    for channel in &mut document.channels {
        channel.all_members.retain(|id| *id != target);
        channel.owner_members.retain(|id| *id != target);
    }
    for dm in &mut document.dms {
        dm.members.retain(|id| *id != target);
    }
    document.notifications.remove(&target);

    tracing::info!("User {} removed user {}", u_id, target);
    Ok(())
}

/// Set a user's global permission (`1` owner, `2` member)
pub fn change_permission(
    document: &mut Document,
    u_id: UserId,
    target: UserId,
    permission_id: i64,
) -> Result<(), BackendError> {
    require_dreams_owner(document, u_id)?;
    let user = document.active_user(target)?;
    let permission = u8::try_from(permission_id)
        .ok()
        .and_then(|id| Permission::try_from(id).ok())
        .ok_or_else(|| BackendError::input(format!("Unknown permission id {}", permission_id)))?;

    if user.is_owner() && permission == Permission::Member && document.owner_count() == 1 {
        return Err(BackendError::input("Cannot demote the only Dreams owner"));
    }

    document.user_mut(target)?.permission = permission;
    tracing::info!(
        "User {} set permission of user {} to {}",
        u_id,
        target,
        permission_id
    );
    Ok(())
}
