//! Session Management and JWT Tokens
//!
//! A token is an HS256 JWT whose claims carry the user id and a session id.
//! The signature alone is not enough: the session id must also be present in
//! the in-memory [`SessionRegistry`], which is what makes logout, password
//! reset and admin removal revoke tokens. The registry resets on restart.
//! Each entry remembers its token's expiry and expired entries are dropped
//! whenever a new session starts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::UserId;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Session ID
    pub sid: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// A verified token, resolved to its user and session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    pub u_id: UserId,
    pub session_id: Uuid,
}

/// Signing keys and token lifetime
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Expiry for a token issued now (Unix timestamp)
    pub fn expires_at(&self) -> u64 {
        unix_now().saturating_add(self.ttl_secs)
    }

    /// Create a JWT token for a session expiring at `expires_at`
    pub fn issue(
        &self,
        u_id: UserId,
        session_id: Uuid,
        expires_at: u64,
    ) -> Result<String, BackendError> {
        let claims = Claims {
            sub: u_id.to_string(),
            sid: session_id.to_string(),
            exp: expires_at,
            iat: unix_now(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify and decode a JWT token
    ///
    /// # Errors
    ///
    /// `BackendError::Token` for a bad signature or expired token,
    /// `BackendError::Unauthorized` when the claims do not parse.
    pub fn verify(&self, token: &str) -> Result<SessionToken, BackendError> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::default())?.claims;
        let u_id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| BackendError::unauthorized("Invalid user id in token"))?;
        let session_id = Uuid::parse_str(&claims.sid)
            .map_err(|_| BackendError::unauthorized("Invalid session id in token"))?;
        Ok(SessionToken { u_id, session_id })
    }
}

#[derive(Debug, Clone, Copy)]
struct Session {
    u_id: UserId,
    expires_at: u64,
}

fn owns(sessions: &HashMap<Uuid, Session>, token: &SessionToken) -> bool {
    sessions
        .get(&token.session_id)
        .is_some_and(|session| session.u_id == token.u_id)
}

/// Active sessions, keyed by session id
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a new session for `u_id` whose token expires at `expires_at`
    pub fn start(&self, u_id: UserId, expires_at: u64) -> Uuid {
        let session_id = Uuid::new_v4();
        let now = unix_now();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        let pruned = before - sessions.len();
        sessions.insert(session_id, Session { u_id, expires_at });
        drop(sessions);

        if pruned > 0 {
            tracing::debug!("Pruned {} expired sessions", pruned);
        }
        tracing::debug!("Session {} started for user {}", session_id, u_id);
        session_id
    }

    pub fn is_active(&self, token: &SessionToken) -> bool {
        let sessions = self.lock();
        owns(&sessions, token)
    }

    /// End one session, returning whether it was active
    pub fn end(&self, token: &SessionToken) -> bool {
        let mut sessions = self.lock();
        if owns(&sessions, token) {
            sessions.remove(&token.session_id);
            true
        } else {
            false
        }
    }

    /// End every session belonging to `u_id`
    pub fn end_all_for(&self, u_id: UserId) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| session.u_id != u_id);
        before - sessions.len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }
}
