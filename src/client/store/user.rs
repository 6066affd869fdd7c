use crate::{
    client::session::Session,
    model::user::{Role, StoredUser},
};

/// Snapshot of the session for rendering.
///
/// Components read this signal to re-render after login or logout; anything that
/// decides access reads the [`Session`] itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub authenticated: bool,
    pub user: Option<StoredUser>,
    pub role: Option<Role>,
}

impl UserState {
    pub fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user: session.user(),
            role: session.role(),
        }
    }
}
