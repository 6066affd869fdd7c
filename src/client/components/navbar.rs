use dioxus::prelude::*;

use crate::client::{
    components::{FootbaseTitleButton, NotificationBell, UserMenu},
    store::user::UserState,
};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let authenticated = user_state.read().authenticated;

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                FootbaseTitleButton {}
            }
            div {
                class: "navbar-end gap-2",
                if authenticated {
                    NotificationBell {}
                }
                UserMenu {}
            }
        }
    }
}
