//! Type-safe session management wrapper.
//!
//! The session holds the login flag and a cached copy of the user's identity so
//! protected handlers do not need a database round trip to know who is calling.

use serde_json::Value;
use time::Duration;
use tower_sessions::{Expiry, Session};

use crate::server::{error::AppError, model::user::User};

// Session key constants
const SESSION_LOGGED_IN: &str = "loggedIn";
const SESSION_USER_ID: &str = "user_id";
const SESSION_USER_NAME: &str = "name";
const SESSION_USER_EMAIL: &str = "email";

/// Inactivity window after which a logged-in session expires.
pub const SESSION_INACTIVITY_HOURS: i64 = 24;

/// Identity of the logged-in user as cached in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionIdentity {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Authentication session management.
///
/// Handles storing the logged-in user's identity on login, reading it back for
/// authorization, and destroying the session on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as logged in for the given user.
    ///
    /// Rotates the session id, stores the login flag together with the user's id,
    /// name, and email, and sets a rolling inactivity expiry.
    ///
    /// # Returns
    /// - `Ok(())` - Session populated
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session
    pub async fn login(&self, user: &User) -> Result<(), AppError> {
        self.session.cycle_id().await?;

        self.session.insert(SESSION_LOGGED_IN, true).await?;
        self.session.insert(SESSION_USER_ID, user.id).await?;
        self.session.insert(SESSION_USER_NAME, &user.name).await?;
        self.session.insert(SESSION_USER_EMAIL, &user.email).await?;

        self.session
            .set_expiry(Some(Expiry::OnInactivity(Duration::hours(
                SESSION_INACTIVITY_HOURS,
            ))));

        Ok(())
    }

    /// Checks the login flag.
    ///
    /// Only a stored boolean `true` counts; any other value, or none, is logged out.
    pub async fn is_logged_in(&self) -> Result<bool, AppError> {
        let value = self.session.get_value(SESSION_LOGGED_IN).await?;

        Ok(matches!(value, Some(Value::Bool(true))))
    }

    /// Retrieves the cached user id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user id is stored
    /// - `Ok(None)` - No user id in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_USER_ID).await?)
    }

    /// Retrieves the full cached identity of a logged-in session.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - Session is logged in and holds every identity key
    /// - `Ok(None)` - Not logged in, or the identity is incomplete
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        if !self.is_logged_in().await? {
            return Ok(None);
        }

        let Some(user_id) = self.user_id().await? else {
            return Ok(None);
        };
        let Some(name) = self.session.get::<String>(SESSION_USER_NAME).await? else {
            return Ok(None);
        };
        let Some(email) = self.session.get::<String>(SESSION_USER_EMAIL).await? else {
            return Ok(None);
        };

        Ok(Some(SessionIdentity {
            user_id,
            name,
            email,
        }))
    }

    /// Clears all data and deletes the session record, expiring the cookie.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
