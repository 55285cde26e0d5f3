//! Role and Auth Models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application role
///
/// Everyone signs up as `User`; `Admin` is granted either through the
/// bootstrap operation (first admin) or by an existing admin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    #[default]
    User,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::User => "user",
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user as exposed by the API (never carries the hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: AppRole,
}

/// Signup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login / signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Privileged bootstrap payload — promotes an existing account to admin,
/// accepted only while no admin exists yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdminRequest {
    pub email: String,
}
