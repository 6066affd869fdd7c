use dioxus::prelude::*;

use crate::client::{
    error::ApiError, guard::handle_unauthorized, router::Route, session::Session,
    store::user::UserState,
};

#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error my-2",
            span { "{message}" }
        }
    )
}

#[component]
pub fn SuccessAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-success my-2",
            span { "{message}" }
        }
    )
}

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex justify-center p-8",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

/// Inline error for a failed API call.
///
/// A 401 means the stored token is no longer accepted: the session is dropped and
/// the viewer is sent to the login page.
#[component]
pub fn ApiErrorAlert(message: String, status: Option<u16>) -> Element {
    let session = use_context::<Session>();
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = navigator();

    use_effect(use_reactive!(|status| {
        if handle_unauthorized(&session, status) {
            user_state.set(UserState::from_session(&session));
            navigator.replace(Route::Login {});
        }
    }));

    rsx!(ErrorAlert { message })
}

/// Render an [`ApiErrorAlert`] for `err`, falling back to `fallback` for display.
pub fn api_error(err: &ApiError, fallback: &str) -> Element {
    rsx!(ApiErrorAlert {
        message: err.display_message(fallback),
        status: err.status()
    })
}
