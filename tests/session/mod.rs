//! Tests for the session and role gate over in-memory storage.

use std::rc::Rc;

use footbase::{
    client::{
        guard::{handle_unauthorized, Access, GuardOutcome},
        session::{MemoryStorage, Session, SessionStorage, USER_KEY},
    },
    model::user::Role,
};
use serde_json::json;

/// Tests that a lower-case role reads as upper case.
///
/// Expected: ADMIN
#[test]
fn lower_case_role_is_admin() {
    let session = Session::in_memory();
    session.set_user(Some(&json!({ "rol": "admin" }))).unwrap();

    assert_eq!(session.role(), Some(Role::Admin));
    assert!(session.is_admin());
}

/// Tests the `role` field fallback and unknown roles.
///
/// Expected: unknown roles are kept upper-cased
#[test]
fn role_field_fallback() {
    let session = Session::in_memory();
    session.set_user(Some(&json!({ "role": "moderator" }))).unwrap();

    assert_eq!(session.role(), Some(Role::Other("MODERATOR".to_string())));
    assert!(!session.is_admin());
    assert!(!session.is_editor());
}

/// Tests that corrupt stored users read as absent.
///
/// Expected: no user and no role
#[test]
fn corrupt_user_is_none() {
    let storage = MemoryStorage::new();
    let session = Session::new(Rc::new(storage.clone()));
    storage.set(USER_KEY, "[1, 2").unwrap();

    assert!(session.user().is_none());
    assert!(session.role().is_none());

    storage.set(USER_KEY, "\"just a string\"").unwrap();

    assert!(session.user().is_none());
}

/// Tests that logout clears token and user.
///
/// Expected: both absent afterwards
#[test]
fn logout_clears_session() {
    let session = Session::in_memory();
    session.set_token(Some("abc")).unwrap();
    session.set_user(Some(&json!({ "rol": "EDITOR" }))).unwrap();

    session.logout().unwrap();

    assert!(session.token().is_none());
    assert!(session.user().is_none());
}

/// Tests guard decisions for each access level.
///
/// Expected: login redirect without a session, home redirect for missing roles
#[test]
fn guard_decisions() {
    let anonymous = Session::in_memory();
    let editor = Session::in_memory();
    editor.set_token(Some("abc")).unwrap();
    editor.set_user(Some(&json!({ "rol": "editor" }))).unwrap();

    assert_eq!(Access::Public.evaluate(&anonymous), GuardOutcome::Allow);
    assert_eq!(Access::Authenticated.evaluate(&anonymous), GuardOutcome::RedirectToLogin);
    assert_eq!(Access::Editor.evaluate(&editor), GuardOutcome::Allow);
    assert_eq!(Access::Admin.evaluate(&editor), GuardOutcome::RedirectHome);
}

/// Tests that only a 401 drops the session.
///
/// Expected: session kept on 403, cleared on 401
#[test]
fn unauthorized_drops_session() {
    let session = Session::in_memory();
    session.set_token(Some("abc")).unwrap();

    assert!(!handle_unauthorized(&session, Some(403)));
    assert!(session.is_authenticated());

    assert!(handle_unauthorized(&session, Some(401)));
    assert!(!session.is_authenticated());
}
