//! Page access levels evaluated against the session.

use dioxus_logger::tracing;

use crate::{client::session::Session, model::user::Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Editor,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// No session, send the viewer to the login page.
    RedirectToLogin,
    /// Logged in without the required role, send the viewer home.
    RedirectHome,
}

impl Access {
    /// Decide whether the current viewer may open a page.
    ///
    /// Roles compare case-insensitively. An admin is not implicitly an editor.
    pub fn evaluate(&self, session: &Session) -> GuardOutcome {
        let required = match self {
            Access::Public => return GuardOutcome::Allow,
            Access::Authenticated => None,
            Access::Editor => Some(Role::Editor),
            Access::Admin => Some(Role::Admin),
        };

        if !session.is_authenticated() {
            return GuardOutcome::RedirectToLogin;
        }

        match required {
            Some(role) if !session.has_role(&role) => GuardOutcome::RedirectHome,
            _ => GuardOutcome::Allow,
        }
    }
}

/// Drop the session when the backend rejected the token with a 401.
///
/// Takes the status of a failed API call. Returns true when the caller should
/// redirect to the login page.
pub fn handle_unauthorized(session: &Session, status: Option<u16>) -> bool {
    if status != Some(401) {
        return false;
    }

    if let Err(e) = session.logout() {
        tracing::warn!("Failed to clear rejected session: {}", e);
    }

    true
}
