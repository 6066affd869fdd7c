//! Declarative mock backend builder.
//!
//! `TestBuilder` queues mock endpoints which are all registered on a fresh mockito
//! server during the final `build()` call, in the order they were added.

use mockito::Matcher;
use serde_json::Value;

use crate::{
    constant::TEST_API_PREFIX,
    error::TestError,
    fixtures::{auth, notification},
    setup::TestSetup,
};

/// Response body served by a mock endpoint.
#[derive(Debug, Clone)]
pub enum MockBody {
    Json(Value),
    Text(String),
    Empty,
}

/// Description of a single mock endpoint, relative to the API prefix.
#[derive(Debug, Clone)]
pub struct MockEndpoint {
    pub method: String,
    pub path: String,
    pub status: usize,
    pub body: MockBody,
    pub bearer: Option<Option<String>>,
    pub request_body: Option<Value>,
    pub expected_requests: usize,
}

impl MockEndpoint {
    pub fn new(method: &str, path: &str, status: usize, body: MockBody) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body,
            bearer: None,
            request_body: None,
            expected_requests: 1,
        }
    }

    /// Only match requests carrying `Authorization: Bearer <token>`, or carrying no
    /// `Authorization` header at all when `token` is `None`.
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = Some(token.map(str::to_string));
        self
    }

    /// Only match requests whose JSON body equals `body`.
    pub fn with_request_body(mut self, body: Value) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn expect(mut self, expected_requests: usize) -> Self {
        self.expected_requests = expected_requests;
        self
    }
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    endpoints: Vec<MockEndpoint>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints.
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }

    /// Add a fully described mock endpoint.
    pub fn with_endpoint(mut self, endpoint: MockEndpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Serve `body` as `application/json` with the given status.
    pub fn with_json_endpoint(self, method: &str, path: &str, status: usize, body: Value) -> Self {
        self.with_endpoint(MockEndpoint::new(method, path, status, MockBody::Json(body)))
    }

    /// Serve a `text/plain` body with the given status.
    pub fn with_text_endpoint(self, method: &str, path: &str, status: usize, body: &str) -> Self {
        self.with_endpoint(MockEndpoint::new(
            method,
            path,
            status,
            MockBody::Text(body.to_string()),
        ))
    }

    /// Serve a response without any body.
    pub fn with_empty_endpoint(self, method: &str, path: &str, status: usize) -> Self {
        self.with_endpoint(MockEndpoint::new(method, path, status, MockBody::Empty))
    }

    /// Mock a successful `POST /auth/login` returning `token` and a user with `role`.
    pub fn with_login_success(self, token: &str, role: &str) -> Self {
        self.with_json_endpoint("POST", "/auth/login", 200, auth::login_response(token, role))
    }

    /// Mock a successful `POST /auth/register` returning `token` and a user with `role`.
    pub fn with_register_success(self, token: &str, role: &str) -> Self {
        self.with_json_endpoint(
            "POST",
            "/auth/register",
            201,
            auth::login_response(token, role),
        )
    }

    /// Mock a rejected login carrying the backend's `hata` error field.
    pub fn with_login_failure(self, status: usize, hata: &str) -> Self {
        self.with_json_endpoint("POST", "/auth/login", status, auth::error_body(hata))
    }

    /// Mock `GET /notifications/unread/count`.
    pub fn with_unread_count(self, count: u64) -> Self {
        self.with_json_endpoint(
            "GET",
            "/notifications/unread/count",
            200,
            notification::unread_count(count),
        )
    }

    /// Build the test setup, registering every queued endpoint on a new mock server.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for endpoint in self.endpoints {
            let path = format!("{}{}", TEST_API_PREFIX, endpoint.path);
            let mut mock = setup
                .server
                .mock(endpoint.method.as_str(), Matcher::Exact(path))
                .with_status(endpoint.status)
                .expect(endpoint.expected_requests);

            mock = match endpoint.bearer {
                Some(Some(token)) => {
                    mock.match_header("authorization", format!("Bearer {}", token).as_str())
                }
                Some(None) => mock.match_header("authorization", Matcher::Missing),
                None => mock,
            };

            if let Some(body) = endpoint.request_body {
                mock = mock.match_body(Matcher::Json(body));
            }

            mock = match endpoint.body {
                MockBody::Json(body) => mock
                    .with_header("content-type", "application/json")
                    .with_body(serde_json::to_string(&body)?),
                MockBody::Text(body) => mock
                    .with_header("content-type", "text/plain")
                    .with_body(body),
                MockBody::Empty => mock,
            };

            setup.mocks.push(mock.create_async().await);
        }

        Ok(setup)
    }
}
