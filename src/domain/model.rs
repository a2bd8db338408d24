use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking a request's domain against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allowed,
    Forbidden,
}

impl From<bool> for Decision {
    fn from(valid: bool) -> Self {
        if valid {
            Decision::Allowed
        } else {
            Decision::Forbidden
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allowed => f.write_str("allowed"),
            Decision::Forbidden => f.write_str("forbidden"),
        }
    }
}

/// Where the identity string for a request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStrategy {
    #[default]
    Header,
    AuthEndpoint,
}

impl fmt::Display for IdentityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityStrategy::Header => f.write_str("header"),
            IdentityStrategy::AuthEndpoint => f.write_str("auth_endpoint"),
        }
    }
}

impl std::str::FromStr for IdentityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(IdentityStrategy::Header),
            "auth_endpoint" | "auth-endpoint" => Ok(IdentityStrategy::AuthEndpoint),
            other => Err(format!(
                "Unknown identity strategy '{}'. Valid strategies: header, auth_endpoint",
                other
            )),
        }
    }
}

/// Body returned by an App Service style `/.auth/me` endpoint. Only `user_id` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthMeEntry {
    pub user_id: String,
}

/// `/.auth/me` answers either with one object or with a list of provider entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthMePayload {
    Single(AuthMeEntry),
    Many(Vec<AuthMeEntry>),
}

impl AuthMePayload {
    pub fn into_user_id(self) -> Option<String> {
        match self {
            AuthMePayload::Single(entry) => Some(entry.user_id),
            AuthMePayload::Many(entries) => entries.into_iter().next().map(|e| e.user_id),
        }
    }
}
