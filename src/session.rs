//! In-memory user identity used to gate review actions.
//!
//! A [`Session`] is created by the login form without any credential check
//! and lives until an explicit logout. The owner-only gate offered here is a
//! UI convenience: the movies API must enforce authorisation itself.

use crate::api::{ApiError, Review, UserId};

/// Display name and identifier of the user driving the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    user_id: UserId,
}

impl Session {
    /// Creates a session from raw login form input.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] when either value is blank.
    pub fn new(name: &str, user_id: &str) -> Result<Self, ApiError> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(ApiError::local("user name is required"));
        }
        Ok(Self {
            name: trimmed_name.to_owned(),
            user_id: UserId::new(user_id)?,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns whether this session's user owns `review`.
    #[must_use]
    pub fn owns(&self, review: &Review) -> bool {
        review.is_owned_by(&self.user_id)
    }
}

/// Holds the optional active session for the running application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHolder {
    current: Option<Session>,
}

impl SessionHolder {
    /// Replaces any existing session with `session`.
    pub fn login(&mut self, session: Session) {
        tracing::info!(user = %session.user_id, "session started");
        self.current = Some(session);
    }

    /// Clears the active session, returning it if one existed.
    pub fn logout(&mut self) -> Option<Session> {
        let previous = self.current.take();
        if let Some(session) = &previous {
            tracing::info!(user = %session.user_id, "session ended");
        }
        previous
    }

    /// Returns the active session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Returns whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}

/// Returns whether `session` may edit or delete `review`.
#[must_use]
pub fn can_modify(session: Option<&Session>, review: &Review) -> bool {
    session.is_some_and(|active| active.owns(review))
}
