use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PROFILE_HOST: &str = "github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub profile_host: String,
    pub repos_per_page: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            profile_host: DEFAULT_PROFILE_HOST.to_string(),
            repos_per_page: 100,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; `from_env` passes
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("GITHUB_API_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let profile_host = lookup("PROFILE_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.profile_host);

        // GitHub caps a single page at 100 entries
        let repos_per_page = parse_var(&lookup, "REPOS_PER_PAGE")?
            .unwrap_or(defaults.repos_per_page)
            .clamp(1, 100);

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?.unwrap_or(defaults.request_timeout_secs);
        if request_timeout_secs == 0 {
            return Err(Error::Config(
                "REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            profile_host,
            repos_per_page,
            request_timeout_secs,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", name, raw))),
        None => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub profile_host: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            profile_host: DEFAULT_PROFILE_HOST.to_string(),
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            profile_host: config.profile_host.clone(),
        }
    }
}
