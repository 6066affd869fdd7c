pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::{MockBody, MockEndpoint, TestBuilder};
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN},
        fixtures::{auth, matches, notification},
        MockBody, MockEndpoint, TestBuilder, TestError, TestSetup,
    };
}
