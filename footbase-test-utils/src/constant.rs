//! Shared credentials and tokens used by mock backend fixtures.
//!
//! None of these are real credentials; they only need to match between the
//! mock endpoint and the assertion made by the test.

/// Bearer token returned by the mock login endpoint.
pub static TEST_TOKEN: &str = "test-token-abc";

/// E-mail address submitted to the mock login endpoint.
pub static TEST_EMAIL: &str = "editor@footbase.test";

/// Password submitted to the mock login endpoint.
pub static TEST_PASSWORD: &str = "secret123";

/// Path prefix the mock backend serves the API under.
pub static TEST_API_PREFIX: &str = "/api";
