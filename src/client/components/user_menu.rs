use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, session::AuthService, store::user::UserState};

#[component]
pub fn UserMenu() -> Element {
    let auth = use_context::<AuthService>();
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = navigator();

    let state = user_state.read().clone();

    if state.authenticated {
        let name = state
            .user
            .as_ref()
            .and_then(|u| u.display_name())
            .unwrap_or("Hesabım")
            .to_string();

        rsx! {
            div { class: "flex items-center gap-2",
                Link { to: Route::Profile {}, class: "text-sm", "{name}" }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| {
                        if let Err(e) = auth.logout() {
                            tracing::warn!("Failed to log out: {}", e);
                        }
                        user_state.set(UserState::from_session(auth.session()));
                        navigator.push(Route::Login {});
                    },
                    "Çıkış Yap"
                }
            }
        }
    } else {
        rsx! {
            div { class: "flex gap-2",
                Link { to: Route::Login {}, class: "btn btn-primary btn-sm", "Giriş Yap" }
                Link { to: Route::Register {}, class: "btn btn-outline btn-sm", "Kayıt Ol" }
            }
        }
    }
}
