pub mod admin;
pub mod auth;
pub mod editor;
pub mod home;
pub mod matches;
pub mod not_found;
pub mod notifications;
pub mod players;
pub mod profile;
pub mod score_management;
pub mod teams;

pub use home::Home;
pub use matches::{MatchDetail, Matches};
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use players::{PlayerDetail, Players};
pub use profile::Profile;
pub use teams::{TeamDetail, Teams};
