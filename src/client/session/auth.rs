use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::{api::ApiClient, error::Error, session::Session},
    model::user::RegisterRequest,
};

/// Response field holding the bearer token.
pub const TOKEN_FIELD: &str = "token";

/// Response field holding the user profile.
pub const USER_FIELD: &str = "kullanici";

/// Login and registration flows that persist the resulting session.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Log in and persist the returned token and user.
    ///
    /// Returns the raw backend response. API errors are passed through untouched
    /// as [`Error::Api`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, Error> {
        let response = self.api.auth().login(email, password).await?;
        self.persist(&response)?;

        tracing::debug!("Logged in as {}", email);

        Ok(response)
    }

    /// Register and persist the returned token and user.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Value, Error> {
        let response = self.api.auth().register(payload).await?;
        self.persist(&response)?;

        tracing::debug!("Registered {}", payload.email);

        Ok(response)
    }

    pub fn logout(&self) -> Result<(), Error> {
        Ok(self.session().logout()?)
    }

    fn persist(&self, response: &Value) -> Result<(), Error> {
        let session = self.session();

        session.set_token(response.get(TOKEN_FIELD).and_then(Value::as_str))?;
        if let Some(user) = response.get(USER_FIELD) {
            session.set_user(Some(user))?;
        }

        Ok(())
    }
}
