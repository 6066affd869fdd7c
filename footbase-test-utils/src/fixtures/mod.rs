//! JSON payloads shaped like the FootBase backend's responses.
//!
//! - `auth` - login/register responses and error bodies
//! - `matches` - match summaries and score command results
//! - `notification` - notification records and unread counters

pub mod auth;
pub mod matches;
pub mod notification;
