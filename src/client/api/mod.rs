//! Typed access to the FootBase backend.
//!
//! [`ApiClient`] owns the request pipeline; each resource group (`auth`, `matches`,
//! `players`, ...) is exposed as a borrowed view, e.g. `client.matches().list(&[])`.

pub mod admin;
pub mod auth;
pub mod commands;
pub mod editor;
pub mod endpoints;
pub mod matches;
pub mod notifications;
pub mod players;
pub mod request;
pub mod teams;
pub mod transport;
pub mod users;

pub use commands::CommandScope;
pub use request::{ApiClient, RequestOptions};
pub use transport::{default_transport, HttpMethod, HttpRequest, HttpResponse, Transport};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;

#[cfg(feature = "web")]
pub use transport::ReqwasmTransport;
