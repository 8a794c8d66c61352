//! Message Operations
//!
//! Every operation takes the current time as a parameter so the ops stay
//! deterministic under test. Tag notifications are produced whenever text
//! is posted or edited.

use std::collections::BTreeSet;

use crate::backend::channels::ops::has_owner_rights;
use crate::backend::error::BackendError;
use crate::backend::store::model::{Document, MessageRecord, React, Target};
use crate::shared::message::THUMBS_UP;
use crate::shared::validation::{mentioned_handles, validate_message};
use crate::shared::{ChannelId, DmId, MessageId, UserId};

/// Characters of the message quoted in a tag notification
const TAG_PREVIEW_LEN: usize = 20;

/// Notify every member of `target` mentioned in `text`
///
/// Each member is notified at most once per message; the sender can tag
/// themselves.
pub fn notify_tags(document: &mut Document, sender: UserId, target: Target, text: &str) {
    let members = document.container_members(target);
    let tagged: BTreeSet<UserId> = mentioned_handles(text)
        .into_iter()
        .filter_map(|handle| {
            document
                .users
                .iter()
                .find(|u| !u.removed && u.handle_str == handle)
                .map(|u| u.u_id)
        })
        .filter(|u_id| members.contains(u_id))
        .collect();
    if tagged.is_empty() {
        return;
    }

    let preview: String = text.chars().take(TAG_PREVIEW_LEN).collect();
    let message = format!(
        "{} tagged you in {}: {}",
        document.handle_of(sender),
        document.container_name(target),
        preview
    );
    for u_id in tagged {
        document.notify(u_id, target, message.clone());
    }
}

/// Check that `u_id` may post `text` to `target`
pub fn validate_post(
    document: &Document,
    u_id: UserId,
    target: Target,
    text: &str,
) -> Result<(), BackendError> {
    validate_message(text)?;
    document.require_member(target, u_id)
}

/// Post a message under a fresh id
pub fn post(
    document: &mut Document,
    u_id: UserId,
    target: Target,
    text: &str,
    now: i64,
) -> Result<MessageId, BackendError> {
    validate_post(document, u_id, target, text)?;
    let message_id = document.next_message_id();
    document.append_message(message_id, u_id, text.to_string(), target, now)?;
    notify_tags(document, u_id, target, text);
    Ok(message_id)
}

pub fn send(
    document: &mut Document,
    u_id: UserId,
    channel_id: ChannelId,
    text: &str,
    now: i64,
) -> Result<MessageId, BackendError> {
    post(document, u_id, Target::Channel(channel_id), text, now)
}

pub fn send_dm(
    document: &mut Document,
    u_id: UserId,
    dm_id: DmId,
    text: &str,
    now: i64,
) -> Result<MessageId, BackendError> {
    post(document, u_id, Target::Dm(dm_id), text, now)
}

/// Whether `u_id` may edit or remove `message`
fn may_modify(document: &Document, u_id: UserId, message: &MessageRecord) -> bool {
    if message.u_id == u_id || document.is_dreams_owner(u_id) {
        return true;
    }
    match message.target {
        Target::Channel(id) => document.channel(id).map_or(false, |c| c.is_owner(u_id)),
        Target::Dm(id) => document.dm(id).map_or(false, |d| d.creator == u_id),
    }
}

fn require_modify(document: &Document, u_id: UserId, message_id: MessageId) -> Result<(), BackendError> {
    let message = document.message(message_id)?;
    if !may_modify(document, u_id, message) {
        return Err(BackendError::access(format!(
            "You are not allowed to change message {}",
            message_id
        )));
    }
    Ok(())
}

/// Replace a message's text; empty text removes the message
pub fn edit(
    document: &mut Document,
    u_id: UserId,
    message_id: MessageId,
    text: &str,
) -> Result<(), BackendError> {
    validate_message(text)?;
    require_modify(document, u_id, message_id)?;

    if text.is_empty() {
        return remove(document, u_id, message_id);
    }
    let message = document.message_mut(message_id)?;
    message.message = text.to_string();
    let target = message.target;
    notify_tags(document, u_id, target, text);
    Ok(())
}

/// Soft-delete a message
pub fn remove(document: &mut Document, u_id: UserId, message_id: MessageId) -> Result<(), BackendError> {
    require_modify(document, u_id, message_id)?;
    let message = document.message_mut(message_id)?;
    message.removed = true;
    message.is_pinned = false;
    Ok(())
}

/// Post a copy of a visible message into a channel or DM the caller is in
pub fn share(
    document: &mut Document,
    u_id: UserId,
    og_message_id: MessageId,
    extra: &str,
    channel_id: Option<ChannelId>,
    dm_id: Option<DmId>,
    now: i64,
) -> Result<MessageId, BackendError> {
    let target = match (channel_id, dm_id) {
        (Some(id), None) => Target::Channel(id),
        (None, Some(id)) => Target::Dm(id),
        _ => {
            return Err(BackendError::input(
                "Exactly one of channel_id and dm_id must be given",
            ))
        }
    };

    let original = document.message(og_message_id)?;
    if !document.is_member_of(original.target, u_id) {
        return Err(BackendError::input(format!(
            "Message {} is not visible to you",
            og_message_id
        )));
    }
    let text = if extra.is_empty() {
        original.message.clone()
    } else {
        format!("{}\n{}", original.message, extra)
    };

    post(document, u_id, target, &text, now)
}

fn react_entry(message: &mut MessageRecord, react_id: u32) -> &mut React {
    let index = match message.reacts.iter().position(|r| r.react_id == react_id) {
        Some(index) => index,
        None => {
            message.reacts.push(React {
                react_id,
                u_ids: Vec::new(),
            });
            message.reacts.len() - 1
        }
    };
    &mut message.reacts[index]
}

fn validate_react_id(react_id: u32) -> Result<(), BackendError> {
    if react_id != THUMBS_UP {
        return Err(BackendError::input(format!("Invalid react id {}", react_id)));
    }
    Ok(())
}

pub fn react(
    document: &mut Document,
    u_id: UserId,
    message_id: MessageId,
    react_id: u32,
) -> Result<(), BackendError> {
    let message = document.message(message_id)?;
    validate_react_id(react_id)?;
    let already = message
        .reacts
        .iter()
        .any(|r| r.react_id == react_id && r.u_ids.contains(&u_id));
    if already {
        return Err(BackendError::input("You have already reacted to this message"));
    }
    let (target, sender) = (message.target, message.u_id);
    document.require_member(target, u_id)?;

    react_entry(document.message_mut(message_id)?, react_id).u_ids.push(u_id);

    if sender != u_id {
        let note = format!(
            "{} reacted to your message in {}",
            document.handle_of(u_id),
            document.container_name(target)
        );
        document.notify(sender, target, note);
    }
    Ok(())
}

pub fn unreact(
    document: &mut Document,
    u_id: UserId,
    message_id: MessageId,
    react_id: u32,
) -> Result<(), BackendError> {
    let message = document.message(message_id)?;
    validate_react_id(react_id)?;
    let reacted = message
        .reacts
        .iter()
        .any(|r| r.react_id == react_id && r.u_ids.contains(&u_id));
    if !reacted {
        return Err(BackendError::input("You have not reacted to this message"));
    }
    document.require_member(message.target, u_id)?;

    let message = document.message_mut(message_id)?;
    for react in message.reacts.iter_mut().filter(|r| r.react_id == react_id) {
        react.u_ids.retain(|id| *id != u_id);
    }
    message.reacts.retain(|r| !r.u_ids.is_empty());
    Ok(())
}

fn require_pin_rights(document: &Document, u_id: UserId, target: Target) -> Result<(), BackendError> {
    document.require_member(target, u_id)?;
    let allowed = match target {
        Target::Channel(id) => {
            let channel = document.channel(id)?;
            has_owner_rights(document, channel, u_id)
        }
        Target::Dm(id) => document.dm(id)?.creator == u_id,
    };
    if !allowed {
        return Err(BackendError::access("You are not allowed to pin messages here"));
    }
    Ok(())
}

fn set_pinned(
    document: &mut Document,
    u_id: UserId,
    message_id: MessageId,
    pinned: bool,
) -> Result<(), BackendError> {
    let message = document.message(message_id)?;
    if message.is_pinned == pinned {
        return Err(BackendError::input(if pinned {
            "Message is already pinned"
        } else {
            "Message is not pinned"
        }));
    }
    require_pin_rights(document, u_id, message.target)?;
    document.message_mut(message_id)?.is_pinned = pinned;
    Ok(())
}

pub fn pin(document: &mut Document, u_id: UserId, message_id: MessageId) -> Result<(), BackendError> {
    set_pinned(document, u_id, message_id, true)
}

pub fn unpin(document: &mut Document, u_id: UserId, message_id: MessageId) -> Result<(), BackendError> {
    set_pinned(document, u_id, message_id, false)
}

/// Validate a delayed send and reserve its message id
///
/// The message itself is appended later by [`deliver_scheduled`].
pub fn reserve_later(
    document: &mut Document,
    u_id: UserId,
    target: Target,
    text: &str,
    time_sent: i64,
    now: i64,
) -> Result<MessageId, BackendError> {
    match target {
        Target::Channel(id) => document.channel(id).map(|_| ())?,
        Target::Dm(id) => document.dm(id).map(|_| ())?,
    }
    validate_message(text)?;
    if time_sent < now {
        return Err(BackendError::input("time_sent is in the past"));
    }
    document.require_member(target, u_id)?;
    Ok(document.next_message_id())
}

/// Append a previously reserved message
///
/// Fails with an input or access error when the container is gone or the
/// sender has left it since scheduling.
pub fn deliver_scheduled(
    document: &mut Document,
    u_id: UserId,
    target: Target,
    message_id: MessageId,
    text: &str,
    now: i64,
) -> Result<(), BackendError> {
    document.require_member(target, u_id)?;
    document.append_message(message_id, u_id, text.to_string(), target, now)?;
    notify_tags(document, u_id, target, text);
    Ok(())
}

/// Append a standup summary on behalf of its starter
///
/// No length limit applies: a summary joins many buffered lines.
pub fn post_standup(
    document: &mut Document,
    u_id: UserId,
    channel_id: ChannelId,
    text: &str,
    now: i64,
) -> Result<MessageId, BackendError> {
    let target = Target::Channel(channel_id);
    document.channel(channel_id)?;
    let message_id = document.next_message_id();
    document.append_message(message_id, u_id, text.to_string(), target, now)?;
    notify_tags(document, u_id, target, text);
    Ok(message_id)
}
