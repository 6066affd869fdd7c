//! Client construction against the mock backend of a [`TestSetup`].

use std::rc::Rc;

use footbase::client::{
    api::{ApiClient, ReqwestTransport},
    config::ClientConfig,
    session::{MemoryStorage, Session},
};
use footbase_test_utils::TestSetup;

/// Extension trait building clients wired to the mock server.
pub trait TestSetupExt {
    /// Client with a fresh, empty in-memory session.
    fn client(&self) -> ApiClient;

    /// Client sharing `session`, so tests can inspect what was persisted.
    fn client_with_session(&self, session: Session) -> ApiClient;
}

impl TestSetupExt for TestSetup {
    fn client(&self) -> ApiClient {
        self.client_with_session(Session::new(Rc::new(MemoryStorage::new())))
    }

    fn client_with_session(&self, session: Session) -> ApiClient {
        let config = ClientConfig::new(self.api_base_url()).unwrap();

        ApiClient::new(config, Rc::new(ReqwestTransport::new()), session)
    }
}

/// Session that already holds `token` and a user with `role`.
pub fn session_with(token: &str, role: Option<&str>) -> Session {
    let session = Session::in_memory();
    session.set_token(Some(token)).unwrap();
    if let Some(role) = role {
        session
            .set_user(Some(&serde_json::json!({ "id": 7, "rol": role })))
            .unwrap();
    }
    session
}
