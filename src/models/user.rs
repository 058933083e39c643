use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public account record as returned by `GET /users/{login}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "login")]
    pub account_id: String,
    #[serde(rename = "name", default)]
    pub display_name: Option<String>,
    #[serde(rename = "bio", default)]
    pub biography: Option<String>,
    #[serde(rename = "followers", default)]
    pub follower_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "html_url")]
    pub profile_url: String,
    pub avatar_url: String,
}

impl Profile {
    /// Treats an empty or whitespace-only bio the same as a missing one.
    pub fn has_biography(&self) -> bool {
        self.biography
            .as_deref()
            .map(|b| !b.trim().is_empty())
            .unwrap_or(false)
    }
}

/// One entry of `GET /users/{login}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u32,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// GitHub reports `null` for repositories that never received a push.
    #[serde(rename = "pushed_at", default)]
    pub last_pushed_at: Option<DateTime<Utc>>,
}
