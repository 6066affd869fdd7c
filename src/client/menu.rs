//! Role-aware navigation menu.
//!
//! The menu is derived from the session on every call and never cached: login and
//! logout change it without a page reload, so the sidebar rebuilds it each render.

use crate::{client::session::Session, model::user::Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub children: Vec<MenuEntry>,
}

pub const BASE_MENU: [MenuEntry; 4] = [
    MenuEntry {
        key: "home",
        name: "Ana Sayfa",
        link: "/app",
        icon: "home",
    },
    MenuEntry {
        key: "matches",
        name: "Maçlar",
        link: "/app/matches",
        icon: "football",
    },
    MenuEntry {
        key: "players",
        name: "Oyuncular",
        link: "/app/players",
        icon: "people",
    },
    MenuEntry {
        key: "teams",
        name: "Takımlar",
        link: "/app/teams",
        icon: "people",
    },
];

pub const AUTH_ENTRY: MenuEntry = MenuEntry {
    key: "auth",
    name: "Giriş / Kayıt",
    link: "/login",
    icon: "log-in",
};

pub const PROFILE_ENTRY: MenuEntry = MenuEntry {
    key: "profile",
    name: "Profilim",
    link: "/app/profile",
    icon: "person",
};

pub const EDITOR_ENTRY: MenuEntry = MenuEntry {
    key: "editor-match-add",
    name: "Maç Ekle",
    link: "/app/editor/match/add",
    icon: "add-circle",
};

pub const ADMIN_ENTRY: MenuEntry = MenuEntry {
    key: "admin-match-approval",
    name: "Maç Onayları",
    link: "/app/admin/matches/approval",
    icon: "checkmark-circle",
};

/// Entries visible to the current viewer.
pub fn menu_items(session: &Session) -> Vec<MenuEntry> {
    if !session.is_authenticated() {
        let mut items = vec![AUTH_ENTRY];
        items.extend(BASE_MENU);
        return items;
    }

    let role = session.role();
    let mut items = BASE_MENU.to_vec();
    items.push(PROFILE_ENTRY);

    if role == Some(Role::Editor) {
        items.push(EDITOR_ENTRY);
    }

    if role == Some(Role::Admin) {
        items.push(ADMIN_ENTRY);
    }

    items
}

/// Top-level group the sidebar renders.
pub fn menu(session: &Session) -> MenuGroup {
    MenuGroup {
        key: "footbase",
        name: "FootBase",
        icon: "football",
        children: menu_items(session),
    }
}
