//! Tests for the role-aware navigation menu.
//!
//! Each scenario builds the menu from a session in a given state and compares the
//! entry keys in order.

use footbase::client::menu::{menu_items, ADMIN_ENTRY, AUTH_ENTRY, EDITOR_ENTRY};
use footbase::client::session::Session;

use crate::util::session_with;

const BASE: [&str; 4] = ["home", "matches", "players", "teams"];

fn keys(session: &Session) -> Vec<&'static str> {
    menu_items(session).iter().map(|entry| entry.key).collect()
}

fn expected(extra: &[&'static str]) -> Vec<&'static str> {
    BASE.iter().chain(extra).copied().collect()
}

/// Tests the menu without a session.
///
/// Expected: auth entry followed by the base entries
#[test]
fn anonymous_menu() {
    let session = Session::in_memory();

    let items = menu_items(&session);

    assert_eq!(items[0], AUTH_ENTRY);
    assert_eq!(keys(&session), vec!["auth", "home", "matches", "players", "teams"]);
}

/// Tests the menu for a regular user.
///
/// Expected: base entries and profile
#[test]
fn user_menu() {
    let session = session_with("abc", Some("USER"));

    assert_eq!(keys(&session), expected(&["profile"]));
}

/// Tests the menu for an editor.
///
/// Expected: base entries, profile and match add
#[test]
fn editor_menu() {
    let session = session_with("abc", Some("EDITOR"));

    assert_eq!(keys(&session), expected(&["profile", "editor-match-add"]));
    assert!(menu_items(&session).contains(&EDITOR_ENTRY));
}

/// Tests the menu for an admin.
///
/// Expected: base entries, profile and match approval, without the editor entry
#[test]
fn admin_menu() {
    let session = session_with("abc", Some("ADMIN"));

    assert_eq!(keys(&session), expected(&["profile", "admin-match-approval"]));
    assert_eq!(menu_items(&session).last(), Some(&ADMIN_ENTRY));
}

/// Tests that role matching ignores case.
///
/// Expected: "Editor" gets the editor entry
#[test]
fn mixed_case_role() {
    let session = session_with("abc", Some("Editor"));

    assert_eq!(keys(&session), expected(&["profile", "editor-match-add"]));
}
