pub mod api;
pub mod home;
pub mod matches;
pub mod notification;
pub mod player;
pub mod user;
