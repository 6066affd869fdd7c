mod admin;
mod auth;
mod commands;
mod editor;
mod matches;
mod notifications;
mod players;
mod request;
mod users;
