use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::auth, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::user::{LoginRequest, RegisterRequest, ResetPasswordRequest},
};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// `POST /auth/login`, returning the raw response.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.client
            .send_json(HttpMethod::Post, auth::LOGIN, Some(&body))
            .await
    }

    /// `POST /auth/register`, returning the raw response.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, auth::REGISTER, Some(payload))
            .await
    }

    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<Value, ApiError> {
        let body = ResetPasswordRequest {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };

        self.client
            .send_json(HttpMethod::Post, auth::RESET_PASSWORD, Some(&body))
            .await
    }
}
