//! Wire types shared with the backend auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated principal, as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Principal role. The wire format is an optional open string; anything the
/// client does not recognize (including a missing field) is a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    /// Label shown in the sidebar footer.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Login/register input. Transient: sent as the request body, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Envelope for login/register/logout responses.
/// Logout returns a message with no user.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Envelope for the `GET /auth/me` session probe.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Envelope for backend error responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
