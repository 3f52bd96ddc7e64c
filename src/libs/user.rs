use serde::{Deserialize, Serialize};

/// Name returned for a user reference that cannot be resolved.
pub const FALLBACK_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: &str, email: &str) -> Self {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Body of `GET /users/{id}/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

impl NameResponse {
    pub fn new(name: impl Into<String>) -> Self {
        NameResponse { name: name.into() }
    }

    pub fn unknown() -> Self {
        NameResponse::new(FALLBACK_NAME)
    }
}

/// A user stored without a name resolves like an absent one.
impl From<Option<User>> for NameResponse {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) if !user.name.trim().is_empty() => NameResponse::new(user.name),
            _ => NameResponse::unknown(),
        }
    }
}
