//! Profile and Statistics Operations

use crate::backend::error::BackendError;
use crate::backend::store::model::Document;
use crate::shared::stats::{rate, CountStamp, DreamsStats, UserStats};
use crate::shared::validation::{validate_email, validate_handle, validate_name};
use crate::shared::{UserId, UserProfile};

/// Profile of any user, including removed ones
pub fn profile(document: &Document, u_id: UserId) -> Result<UserProfile, BackendError> {
    Ok(document.user(u_id)?.profile())
}

pub fn set_name(
    document: &mut Document,
    u_id: UserId,
    name_first: &str,
    name_last: &str,
) -> Result<(), BackendError> {
    validate_name("name_first", name_first)?;
    validate_name("name_last", name_last)?;
    let user = document.user_mut(u_id)?;
    user.name_first = name_first.to_string();
    user.name_last = name_last.to_string();
    Ok(())
}

/// Change the caller's email
///
/// Setting the email the caller already has is accepted.
pub fn set_email(document: &mut Document, u_id: UserId, email: &str) -> Result<(), BackendError> {
    validate_email(email)?;
    if document
        .user_by_email(email)
        .is_some_and(|owner| owner.u_id != u_id)
    {
        return Err(BackendError::input("Email is already in use"));
    }
    document.user_mut(u_id)?.email = email.to_string();
    Ok(())
}

pub fn set_handle(document: &mut Document, u_id: UserId, handle_str: &str) -> Result<(), BackendError> {
    validate_handle(handle_str)?;
    if document
        .users
        .iter()
        .any(|u| !u.removed && u.u_id != u_id && u.handle_str == handle_str)
    {
        return Err(BackendError::input(format!(
            "Handle {} is already in use",
            handle_str
        )));
    }
    document.user_mut(u_id)?.handle_str = handle_str.to_string();
    Ok(())
}

/// Every active user except the caller
pub fn all(document: &Document, u_id: UserId) -> Vec<UserProfile> {
    document
        .users
        .iter()
        .filter(|u| !u.removed && u.u_id != u_id)
        .map(|u| u.profile())
        .collect()
}

fn stamp(count: usize, now: i64) -> Vec<CountStamp> {
    vec![CountStamp {
        count,
        time_stamp: now,
    }]
}

/// Involvement of one user
///
/// Counts channels and active DMs the user belongs to and live messages they
/// sent, against the totals of each across Dreams.
pub fn user_stats(document: &Document, u_id: UserId, now: i64) -> UserStats {
    let channels_joined = document
        .channels
        .iter()
        .filter(|c| c.is_member(u_id))
        .count();
    let dms_joined = document
        .dms
        .iter()
        .filter(|d| d.active && d.is_member(u_id))
        .count();
    let messages_sent = document
        .messages
        .iter()
        .filter(|m| !m.removed && m.u_id == u_id)
        .count();

    let active_dms = document.dms.iter().filter(|d| d.active).count();
    let total = document.channels.len() + active_dms + document.live_message_count();

    UserStats {
        channels_joined: stamp(channels_joined, now),
        dms_joined: stamp(dms_joined, now),
        messages_sent: stamp(messages_sent, now),
        involvement_rate: rate(channels_joined + dms_joined + messages_sent, total),
    }
}

/// Dreams-wide totals and the share of active users in at least one
/// channel or DM
pub fn dreams_stats(document: &Document, now: i64) -> DreamsStats {
    let active_users: Vec<UserId> = document
        .users
        .iter()
        .filter(|u| !u.removed)
        .map(|u| u.u_id)
        .collect();
    let involved = active_users
        .iter()
        .filter(|u_id| {
            document.channels.iter().any(|c| c.is_member(**u_id))
                || document.dms.iter().any(|d| d.active && d.is_member(**u_id))
        })
        .count();

    DreamsStats {
        channels_exist: stamp(document.channels.len(), now),
        dms_exist: stamp(document.dms.iter().filter(|d| d.active).count(), now),
        messages_exist: stamp(document.live_message_count(), now),
        utilization_rate: rate(involved, active_users.len()),
    }
}
