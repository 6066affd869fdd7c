use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::api::first_str_in;

/// Fields a stored user profile may carry its role under, by priority.
pub const ROLE_FIELDS: [&str; 2] = ["rol", "role"];

/// Coarse authorization tag attached to a user profile.
///
/// Parsing is case-insensitive. Roles the client does not know about are kept,
/// upper-cased, so they still compare consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Editor,
    Admin,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();

        match normalized.as_str() {
            "USER" => Role::User,
            "EDITOR" => Role::Editor,
            "ADMIN" => Role::Admin,
            _ => Role::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "USER",
            Role::Editor => "EDITOR",
            Role::Admin => "ADMIN",
            Role::Other(role) => role,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as persisted in session storage.
///
/// Only the role is interpreted by the client; every other field is kept as the
/// backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredUser(pub Map<String, Value>);

impl StoredUser {
    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(StoredUser(map)),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        first_str_in(&self.0, &ROLE_FIELDS).map(Role::parse)
    }

    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Name to greet the user with, falling back through the known name fields.
    pub fn display_name(&self) -> Option<&str> {
        ["kullaniciAdi", "username", "name", "email"]
            .iter()
            .find_map(|field| self.str_field(field))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "kullaniciAdi")]
    pub username: String,
    pub email: String,
    #[serde(rename = "sifre")]
    pub password: String,
}

impl RegisterRequest {
    /// Build a registration from the form fields, trimming each one.
    ///
    /// Returns the message to show when a field is empty or the passwords differ.
    pub fn from_form(
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Self, &'static str> {
        let fields = [username, email, password, confirm].map(str::trim);
        if fields.iter().any(|f| f.is_empty()) {
            return Err("Tüm alanlar zorunludur.");
        }
        if password != confirm {
            return Err("Şifreler uyuşmuyor.");
        }

        Ok(Self {
            username: fields[0].to_string(),
            email: fields[1].to_string(),
            password: fields[2].to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Profile of the logged-in user served by `GET /users/me`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub recent_comments: Vec<ProfileComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileComment {
    #[serde(default)]
    pub comment_id: Option<i64>,
    #[serde(default)]
    pub match_title: Option<String>,
    #[serde(default)]
    pub match_id: Option<i64>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default, alias = "icerik")]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
