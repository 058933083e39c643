use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Nothing to analyze: '{0}' does not name a GitHub account")]
    InvalidIdentifier(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure happened while talking to the data source, as
    /// opposed to bad input or local configuration.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::UserNotFound(_) | Error::GitHubApi(_) | Error::Network(_)
        )
    }
}
