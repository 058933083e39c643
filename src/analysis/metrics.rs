use std::collections::HashSet;
use chrono::{DateTime, Duration, Utc};

use crate::models::{Metrics, Profile, Repository};

/// Repositories pushed within this many days count as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 90;

/// Descriptions must be longer than this many characters to count as
/// documentation.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

pub struct MetricAggregator {
    active_window: Duration,
}

impl MetricAggregator {
    pub fn new() -> Self {
        Self {
            active_window: Duration::days(ACTIVE_WINDOW_DAYS),
        }
    }

    /// Callers must not pass an empty repository slice.
    pub fn aggregate(
        &self,
        profile: &Profile,
        repos: &[Repository],
        now: DateTime<Utc>,
    ) -> Metrics {
        let active_since = now - self.active_window;

        let total_stars = repos.iter().map(|r| r.star_count as u64).sum();

        let distinct_language_count = repos
            .iter()
            .filter_map(|r| r.primary_language.as_deref())
            .collect::<HashSet<_>>()
            .len() as u32;

        let documented_repo_count = repos.iter().filter(|r| is_documented(r)).count() as u32;

        let active_repo_count = repos
            .iter()
            .filter(|r| r.last_pushed_at.map(|t| t > active_since).unwrap_or(false))
            .count() as u32;

        Metrics {
            repo_count: repos.len() as u32,
            total_stars,
            distinct_language_count,
            documented_repo_count,
            active_repo_count,
            account_age_days: (now - profile.created_at).num_days().max(0),
        }
    }
}

impl Default for MetricAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_documented(repo: &Repository) -> bool {
    repo.description
        .as_deref()
        .map(|d| d.chars().count() > MIN_DESCRIPTION_CHARS)
        .unwrap_or(false)
}
