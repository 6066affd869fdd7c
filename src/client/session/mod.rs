//! Session and role gate.
//!
//! [`Session`] is the single access point for "who is logged in and what may they do".
//! It is a stateless façade over a [`SessionStorage`]: every read goes to the store,
//! so all clones observe the same state without any in-memory cache to diverge.
//! The application constructs one session and provides it through context.

pub mod auth;
pub mod storage;

use std::rc::Rc;

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::error::SessionError,
    model::user::{Role, StoredUser},
};

pub use auth::AuthService;
pub use storage::{MemoryStorage, SessionStorage};

#[cfg(feature = "web")]
pub use storage::LocalStorage;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Storage key of the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Session over the browser's `localStorage`.
    #[cfg(feature = "web")]
    pub fn browser() -> Result<Self, SessionError> {
        Ok(Self::new(Rc::new(LocalStorage::new()?)))
    }

    /// Persist a token, overwriting any previous one. Absent or empty tokens are ignored.
    pub fn set_token(&self, token: Option<&str>) -> Result<(), SessionError> {
        match token {
            Some(token) if !token.is_empty() => self.storage.set(TOKEN_KEY, token),
            _ => Ok(()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist the user profile. Absent or `null` profiles are ignored.
    pub fn set_user(&self, user: Option<&Value>) -> Result<(), SessionError> {
        let Some(user) = user.filter(|u| !u.is_null()) else {
            return Ok(());
        };

        let serialized =
            serde_json::to_string(user).map_err(|e| SessionError::Serialize(e.to_string()))?;

        self.storage.set(USER_KEY, &serialized)
    }

    /// Stored user profile, `None` when missing or unreadable.
    pub fn user(&self) -> Option<StoredUser> {
        let raw = self.storage.get(USER_KEY)?;

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => StoredUser::from_value(value),
            Err(e) => {
                tracing::debug!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Role of the stored user, upper-cased.
    pub fn role(&self) -> Option<Role> {
        self.user()?.role()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.role().as_ref() == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }

    pub fn is_editor(&self) -> bool {
        self.has_role(&Role::Editor)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove token and user. Calling it without a session is a no-op.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;

        Ok(())
    }
}
