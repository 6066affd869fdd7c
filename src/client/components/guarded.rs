use dioxus::prelude::*;

use crate::client::{
    guard::{Access, GuardOutcome},
    router::Route,
    session::Session,
    store::user::UserState,
};

/// Render `children` only when the viewer satisfies `access`, redirecting otherwise.
///
/// Re-evaluated whenever the session snapshot changes, so logging out on a
/// protected page leaves it.
#[component]
pub fn Guarded(access: Access, children: Element) -> Element {
    let session = use_context::<Session>();
    let user_state = use_context::<Signal<UserState>>();
    let navigator = navigator();

    let effect_session = session.clone();
    use_effect(move || {
        // Subscribe to session changes.
        let _ = user_state.read();

        match access.evaluate(&effect_session) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectToLogin => {
                navigator.replace(Route::Login {});
            }
            GuardOutcome::RedirectHome => {
                navigator.replace(Route::Home {});
            }
        }
    });

    let _ = user_state.read();
    if access.evaluate(&session) == GuardOutcome::Allow {
        rsx!({ children })
    } else {
        rsx!()
    }
}
