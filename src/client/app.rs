use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{default_transport, ApiClient},
    config::ClientConfig,
    router::Route,
    session::{AuthService, Session},
    store::user::UserState,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let api = use_context_provider(build_api_client);
    let session = use_context_provider(|| api.session().clone());
    use_context_provider(|| AuthService::new(api.clone()));
    use_context_provider(|| Signal::new(UserState::from_session(&session)));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "FootBase" }
        Router::<Route> {}
    }
}

/// Build the single API client of the application.
///
/// Never fails: a bad compile-time base URL falls back to the default, and a
/// browser without storage gets an in-memory session.
fn build_api_client() -> ApiClient {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}; using default API URL", e);
            ClientConfig::default()
        }
    };

    ApiClient::new(config, default_transport(), open_session())
}

#[cfg(feature = "web")]
fn open_session() -> Session {
    match Session::browser() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("{}; session will not survive a reload", e);
            Session::in_memory()
        }
    }
}

#[cfg(not(feature = "web"))]
fn open_session() -> Session {
    Session::in_memory()
}
