//! Request pipeline.
//!
//! Every API call in the client goes through [`ApiClient::request`], which attaches the
//! bearer token, sends the request exactly once and turns the response into either a
//! parsed JSON value or an [`ApiError`] carrying a display-ready message and the
//! original error body.

use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    client::{
        api::transport::{HttpMethod, HttpRequest, HttpResponse, Transport},
        config::ClientConfig,
        error::{ApiError, HttpError},
        session::Session,
    },
    model::api::error_message,
};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Method, body and header overrides for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(HttpMethod::Get)
    }
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        Ok(self.body(body))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Merge the default content type, caller overrides and the bearer token.
///
/// Header names compare case-insensitively. Caller headers replace the default
/// content type, but never the injected `Authorization` header.
pub fn build_headers(token: Option<&str>, overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string())];

    for (name, value) in overrides {
        set_header(&mut headers, name, value);
    }

    if let Some(token) = token {
        set_header(&mut headers, AUTHORIZATION, &format!("Bearer {}", token));
    }

    headers
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}

/// Classify a buffered response.
///
/// - 2xx except 204/205: the body parsed as JSON (`Some`)
/// - 204/205: `None`, the body is never parsed
/// - anything else: [`ApiError::Http`]
pub fn classify(response: HttpResponse) -> Result<Option<Value>, ApiError> {
    if response.is_success() {
        if response.status == 204 || response.status == 205 {
            return Ok(None);
        }

        return serde_json::from_str(&response.body)
            .map(Some)
            .map_err(ApiError::Decode);
    }

    Err(ApiError::Http(http_error(response)))
}

fn http_error(response: HttpResponse) -> HttpError {
    let body = if response.is_json() {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse error response with status {}: {}",
                    response.status,
                    e
                );
                None
            }
        }
    } else {
        None
    };

    let message = body
        .as_ref()
        .and_then(error_message)
        .map(str::to_string)
        .unwrap_or_else(|| status_message(&response));

    HttpError {
        message,
        status: response.status,
        status_text: response.status_text,
        body,
    }
}

fn status_message(response: &HttpResponse) -> String {
    if response.status_text.is_empty() {
        // HTTP/2 responses carry no reason phrase.
        format!("Request failed with status {}", response.status)
    } else {
        response.status_text.clone()
    }
}

/// Decode a pipeline result into a caller type. No-content decodes as `null`.
pub fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    serde_json::from_value(value.unwrap_or(Value::Null)).map_err(ApiError::Decode)
}

/// Authenticated JSON client for the FootBase backend.
///
/// Cheap to clone; clones share the transport and the session store.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, session: Session) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        self.config.url(endpoint)
    }

    /// Perform a request against an absolute URL.
    ///
    /// Returns `Ok(None)` for 204/205 responses and `Ok(Some(json))` for every other
    /// success. Network failures are [`ApiError::Transport`], non-2xx responses are
    /// [`ApiError::Http`].
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let token = self.session.token();
        let method = options.method;
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: build_headers(token.as_deref(), &options.headers),
            body: options.body,
        };

        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::debug!("{} {} failed to send: {}", method, url, e);
            e
        })?;

        classify(response).map_err(|e| {
            if let Some(status) = e.status() {
                tracing::debug!("{} {} failed with status {}", method, url, status);
            }
            e
        })
    }

    /// `GET` an endpoint path and decode the body.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        decode(
            self.request(&self.url(endpoint), RequestOptions::default())
                .await?,
        )
    }

    /// Send a bodiless request to an endpoint path and decode the response.
    pub async fn send_empty<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        decode(
            self.request(&self.url(endpoint), RequestOptions::new(method))
                .await?,
        )
    }

    /// Send an optional JSON body to an endpoint path and decode the response.
    pub async fn send_json<T, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut options = RequestOptions::new(method);
        if let Some(body) = body {
            options = options.json(body)?;
        }

        decode(self.request(&self.url(endpoint), options).await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, status_text: &str, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    mod build_headers_tests {
        use super::*;

        #[test]
        /// Expect JSON content type and no authorization without a token
        fn defaults_without_token() {
            let headers = build_headers(None, &[]);

            assert_eq!(header(&headers, "content-type"), Some(JSON_CONTENT_TYPE));
            assert_eq!(header(&headers, "authorization"), None);
        }

        #[test]
        /// Expect the bearer token to be injected
        fn injects_bearer_token() {
            let headers = build_headers(Some("abc"), &[]);

            assert_eq!(header(&headers, "authorization"), Some("Bearer abc"));
        }

        #[test]
        /// Expect caller headers to replace the content type but not the token
        fn caller_headers_do_not_override_token() {
            let overrides = vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("authorization".to_string(), "Basic xyz".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ];

            let headers = build_headers(Some("abc"), &overrides);

            assert_eq!(header(&headers, "content-type"), Some("text/plain"));
            assert_eq!(header(&headers, "authorization"), Some("Bearer abc"));
            assert_eq!(header(&headers, "x-trace"), Some("1"));
            assert_eq!(headers.len(), 3);
        }
    }

    mod classify_tests {
        use super::*;

        #[test]
        /// Expect 2xx bodies to be returned unchanged
        fn returns_body_on_success() {
            let result = classify(response(200, "OK", Some(JSON_CONTENT_TYPE), r#"{"a":[1,2]}"#));

            assert_eq!(result.unwrap(), Some(json!({ "a": [1, 2] })));
        }

        #[test]
        /// Expect 204 and 205 to be no-content without parsing the empty body
        fn no_content_statuses() {
            for status in [204, 205] {
                let result = classify(response(status, "No Content", None, ""));

                assert_eq!(result.unwrap(), None);
            }
        }

        #[test]
        /// Expect an unparsable success body to be a decode error
        fn decode_error_on_invalid_success_body() {
            let result = classify(response(200, "OK", Some(JSON_CONTENT_TYPE), "<html>"));

            assert!(matches!(result, Err(ApiError::Decode(_))));
        }

        #[test]
        /// Expect `hata` to become the error message
        fn error_message_from_hata() {
            let result = classify(response(
                400,
                "Bad Request",
                Some("application/json;charset=UTF-8"),
                r#"{"hata":"X","message":"Y"}"#,
            ));

            match result {
                Err(ApiError::Http(err)) => {
                    assert_eq!(err.message, "X");
                    assert_eq!(err.status, 400);
                    assert_eq!(err.body, Some(json!({ "hata": "X", "message": "Y" })));
                }
                other => panic!("expected HTTP error, got {:?}", other),
            }
        }

        #[test]
        /// Expect the status text for non-JSON error bodies
        fn status_text_for_non_json() {
            let result = classify(response(502, "Bad Gateway", Some("text/html"), "<h1>oops</h1>"));

            match result {
                Err(ApiError::Http(err)) => {
                    assert_eq!(err.message, "Bad Gateway");
                    assert_eq!(err.body, None);
                }
                other => panic!("expected HTTP error, got {:?}", other),
            }
        }

        #[test]
        /// Expect the status text when a JSON error body fails to parse
        fn status_text_for_broken_json() {
            let result = classify(response(500, "Internal Server Error", Some(JSON_CONTENT_TYPE), "{"));

            match result {
                Err(ApiError::Http(err)) => {
                    assert_eq!(err.message, "Internal Server Error");
                    assert_eq!(err.body, None);
                }
                other => panic!("expected HTTP error, got {:?}", other),
            }
        }

        #[test]
        /// Expect a generated message when the reason phrase is empty
        fn generated_message_without_status_text() {
            let result = classify(response(503, "", None, ""));

            match result {
                Err(ApiError::Http(err)) => {
                    assert_eq!(err.message, "Request failed with status 503");
                }
                other => panic!("expected HTTP error, got {:?}", other),
            }
        }
    }
}
