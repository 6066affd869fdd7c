use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_API_PREFIX, error::TestError};

/// Running mock backend plus the mocks registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL the client under test should be configured with.
    ///
    /// Mock paths registered through [`crate::TestBuilder`] are relative to this URL.
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_API_PREFIX)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}
