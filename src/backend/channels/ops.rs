//! Channel Operations
//!
//! Input errors are checked before access errors, so a caller probing an
//! unknown channel always sees a 400.

use crate::backend::error::BackendError;
use crate::backend::store::model::{ChannelRecord, Document, Target};
use crate::shared::channel::{ChannelDetails, ChannelSummary};
use crate::shared::message::MessagesPage;
use crate::shared::validation::validate_channel_name;
use crate::shared::{ChannelId, UserId};

fn summary(channel: &ChannelRecord) -> ChannelSummary {
    ChannelSummary {
        channel_id: channel.channel_id,
        name: channel.name.clone(),
    }
}

/// Whether `u_id` may manage `channel` (owners, or Dreams owners who are members)
pub fn has_owner_rights(document: &Document, channel: &ChannelRecord, u_id: UserId) -> bool {
    channel.is_owner(u_id) || (channel.is_member(u_id) && document.is_dreams_owner(u_id))
}

fn require_owner_rights(
    document: &Document,
    channel: &ChannelRecord,
    u_id: UserId,
) -> Result<(), BackendError> {
    if has_owner_rights(document, channel, u_id) {
        Ok(())
    } else {
        Err(BackendError::access(format!(
            "You are not an owner of channel {}",
            channel.channel_id
        )))
    }
}

pub fn create(
    document: &mut Document,
    u_id: UserId,
    name: &str,
    is_public: bool,
) -> Result<ChannelId, BackendError> {
    validate_channel_name(name)?;
    let channel_id = document.next_channel_id();
    document.channels.push(ChannelRecord {
        channel_id,
        name: name.to_string(),
        is_public,
        owner_members: vec![u_id],
        all_members: vec![u_id],
        messages: Vec::new(),
    });
    tracing::info!("User {} created channel {} ({})", u_id, channel_id, name);
    Ok(channel_id)
}

/// Channels the caller belongs to
pub fn list(document: &Document, u_id: UserId) -> Vec<ChannelSummary> {
    document
        .channels
        .iter()
        .filter(|c| c.is_member(u_id))
        .map(summary)
        .collect()
}

pub fn list_all(document: &Document) -> Vec<ChannelSummary> {
    document.channels.iter().map(summary).collect()
}

pub fn details(
    document: &Document,
    u_id: UserId,
    channel_id: ChannelId,
) -> Result<ChannelDetails, BackendError> {
    let channel = document.member_channel(channel_id, u_id)?;
    Ok(ChannelDetails {
        name: channel.name.clone(),
        is_public: channel.is_public,
        owner_members: document.profiles(&channel.owner_members),
        all_members: document.profiles(&channel.all_members),
    })
}

pub fn invite(
    document: &mut Document,
    u_id: UserId,
    channel_id: ChannelId,
    invitee: UserId,
) -> Result<(), BackendError> {
    let channel = document.channel(channel_id)?;
    document.active_user(invitee)?;
    if channel.is_member(invitee) {
        return Err(BackendError::input(format!(
            "User {} is already a member of channel {}",
            invitee, channel_id
        )));
    }
    if !channel.is_member(u_id) {
        return Err(BackendError::access(format!(
            "You are not a member of channel {}",
            channel_id
        )));
    }

    let message = format!("{} added you to {}", document.handle_of(u_id), channel.name);
    document.channel_mut(channel_id)?.all_members.push(invitee);
    document.notify(invitee, Target::Channel(channel_id), message);
    Ok(())
}

pub fn join(document: &mut Document, u_id: UserId, channel_id: ChannelId) -> Result<(), BackendError> {
    let channel = document.channel(channel_id)?;
    if channel.is_member(u_id) {
        return Err(BackendError::input(format!(
            "You are already a member of channel {}",
            channel_id
        )));
    }
    if !channel.is_public && !document.is_dreams_owner(u_id) {
        return Err(BackendError::access(format!("Channel {} is private", channel_id)));
    }
    document.channel_mut(channel_id)?.all_members.push(u_id);
    Ok(())
}

/// Leave a channel, dropping ownership too
///
/// The only owner may not leave while other members remain; leaving as the
/// last member is allowed and leaves an empty channel behind.
pub fn leave(document: &mut Document, u_id: UserId, channel_id: ChannelId) -> Result<(), BackendError> {
    let channel = document.channel(channel_id)?;
    if channel.is_owner(u_id) && channel.owner_members.len() == 1 && channel.all_members.len() > 1 {
        return Err(BackendError::input(
            "The only owner cannot leave while other members remain",
        ));
    }
    if !channel.is_member(u_id) {
        return Err(BackendError::access(format!(
            "You are not a member of channel {}",
            channel_id
        )));
    }
    let channel = document.channel_mut(channel_id)?;
    channel.owner_members.retain(|id| *id != u_id);
    channel.all_members.retain(|id| *id != u_id);
    Ok(())
}

pub fn add_owner(
    document: &mut Document,
    u_id: UserId,
    channel_id: ChannelId,
    target: UserId,
) -> Result<(), BackendError> {
    let channel = document.channel(channel_id)?;
    document.active_user(target)?;
    if channel.is_owner(target) {
        return Err(BackendError::input(format!(
            "User {} is already an owner of channel {}",
            target, channel_id
        )));
    }
    require_owner_rights(document, channel, u_id)?;

    let channel = document.channel_mut(channel_id)?;
    if !channel.is_member(target) {
        channel.all_members.push(target);
    }
    channel.owner_members.push(target);
    Ok(())
}

pub fn remove_owner(
    document: &mut Document,
    u_id: UserId,
    channel_id: ChannelId,
    target: UserId,
) -> Result<(), BackendError> {
    let channel = document.channel(channel_id)?;
    if !channel.is_owner(target) {
        return Err(BackendError::input(format!(
            "User {} is not an owner of channel {}",
            target, channel_id
        )));
    }
    if channel.owner_members.len() == 1 {
        return Err(BackendError::input("Cannot remove the only owner of a channel"));
    }
    require_owner_rights(document, channel, u_id)?;

    document
        .channel_mut(channel_id)?
        .owner_members
        .retain(|id| *id != target);
    Ok(())
}

pub fn messages(
    document: &Document,
    u_id: UserId,
    channel_id: ChannelId,
    start: u32,
) -> Result<MessagesPage, BackendError> {
    let channel = document.channel(channel_id)?;
    let page = document.page(&channel.messages, u_id, start)?;
    if !channel.is_member(u_id) {
        return Err(BackendError::access(format!(
            "You are not a member of channel {}",
            channel_id
        )));
    }
    Ok(page)
}
