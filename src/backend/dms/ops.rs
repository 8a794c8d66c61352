//! DM Operations
//!
//! A DM's name is fixed at creation: the sorted handles of its first members
//! joined by `", "`. Removing a DM marks it inactive; inactive DMs answer
//! like unknown ids everywhere.

use crate::backend::error::BackendError;
use crate::backend::store::model::{DmRecord, Document, Target};
use crate::shared::dm::{DmDetails, DmSummary};
use crate::shared::message::MessagesPage;
use crate::shared::{DmId, UserId};

/// Build a DM name from member handles
pub fn dm_name(mut handles: Vec<String>) -> String {
    handles.sort();
    handles.join(", ")
}

/// Create a DM between the caller and `u_ids`
///
/// Duplicate ids (including the caller's own) are ignored.
pub fn create(
    document: &mut Document,
    u_id: UserId,
    u_ids: &[UserId],
) -> Result<(DmId, String), BackendError> {
    for invitee in u_ids {
        document.active_user(*invitee)?;
    }

    let mut members = vec![u_id];
    for invitee in u_ids {
        if !members.contains(invitee) {
            members.push(*invitee);
        }
    }
    let name = dm_name(members.iter().map(|id| document.handle_of(*id)).collect());

    let dm_id = document.next_dm_id();
    document.dms.push(DmRecord {
        dm_id,
        name: name.clone(),
        creator: u_id,
        members: members.clone(),
        active: true,
        messages: Vec::new(),
    });

    let creator = document.handle_of(u_id);
    for member in members.into_iter().filter(|id| *id != u_id) {
        document.notify(member, Target::Dm(dm_id), format!("{} added you to {}", creator, name));
    }
    tracing::info!("User {} created DM {} ({})", u_id, dm_id, name);
    Ok((dm_id, name))
}

/// Active DMs the caller belongs to
pub fn list(document: &Document, u_id: UserId) -> Vec<DmSummary> {
    document
        .dms
        .iter()
        .filter(|dm| dm.active && dm.is_member(u_id))
        .map(|dm| DmSummary {
            dm_id: dm.dm_id,
            name: dm.name.clone(),
        })
        .collect()
}

pub fn details(document: &Document, u_id: UserId, dm_id: DmId) -> Result<DmDetails, BackendError> {
    let dm = document.member_dm(dm_id, u_id)?;
    Ok(DmDetails {
        name: dm.name.clone(),
        members: document.profiles(&dm.members),
    })
}

pub fn invite(
    document: &mut Document,
    u_id: UserId,
    dm_id: DmId,
    invitee: UserId,
) -> Result<(), BackendError> {
    document.active_user(invitee)?;
    let dm = document.dm(dm_id)?;
    if dm.is_member(invitee) {
        return Err(BackendError::input(format!(
            "User {} is already a member of DM {}",
            invitee, dm_id
        )));
    }
    if !dm.is_member(u_id) {
        return Err(BackendError::access(format!("You are not a member of DM {}", dm_id)));
    }

    let message = format!("{} added you to {}", document.handle_of(u_id), dm.name);
    document.dm_mut(dm_id)?.members.push(invitee);
    document.notify(invitee, Target::Dm(dm_id), message);
    Ok(())
}

pub fn leave(document: &mut Document, u_id: UserId, dm_id: DmId) -> Result<(), BackendError> {
    document.member_dm(dm_id, u_id)?;
    document.dm_mut(dm_id)?.members.retain(|id| *id != u_id);
    Ok(())
}

/// Deactivate a DM; only its creator may do this
pub fn remove(document: &mut Document, u_id: UserId, dm_id: DmId) -> Result<(), BackendError> {
    let dm = document.dm(dm_id)?;
    if dm.creator != u_id {
        return Err(BackendError::access(format!(
            "Only the creator may remove DM {}",
            dm_id
        )));
    }
    document.dm_mut(dm_id)?.active = false;
    tracing::info!("User {} removed DM {}", u_id, dm_id);
    Ok(())
}

pub fn messages(
    document: &Document,
    u_id: UserId,
    dm_id: DmId,
    start: u32,
) -> Result<MessagesPage, BackendError> {
    let dm = document.dm(dm_id)?;
    let page = document.page(&dm.messages, u_id, start)?;
    if !dm.is_member(u_id) {
        return Err(BackendError::access(format!("You are not a member of DM {}", dm_id)));
    }
    Ok(page)
}
