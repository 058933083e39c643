//! End-to-end tests for the analysis pipeline using an in-memory source

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use gitfolio::analysis::insights::{MISSING_BIO, NO_RECENT_ACTIVITY};
use gitfolio::models::{Profile, Repository};
use gitfolio::{Analysis, AnalysisPipeline, Error, PipelineConfig, ProfileSource, Result};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
}

/// Serves one fixed snapshot and counts how often it is asked.
struct StaticSource {
    profile: Option<Profile>,
    repos: Vec<Repository>,
    calls: AtomicUsize,
}

impl StaticSource {
    fn new(profile: Option<Profile>, repos: Vec<Repository>) -> Arc<Self> {
        Arc::new(Self {
            profile,
            repos,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ProfileSource for StaticSource {
    async fn fetch_profile(&self, identifier: &str) -> Result<Profile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profile
            .clone()
            .filter(|p| p.account_id == identifier)
            .ok_or_else(|| Error::UserNotFound(identifier.to_string()))
    }

    async fn fetch_repositories(&self, _identifier: &str) -> Result<Vec<Repository>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repos.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

fn profile(bio: Option<&str>) -> Profile {
    Profile {
        account_id: "alice".to_string(),
        display_name: Some("Alice".to_string()),
        biography: bio.map(String::from),
        follower_count: 7,
        created_at: now() - Duration::days(365),
        profile_url: "https://github.com/alice".to_string(),
        avatar_url: "https://avatars.example/alice".to_string(),
    }
}

fn repo(stars: u32, lang: Option<&str>, desc: Option<&str>, pushed_days_ago: i64) -> Repository {
    Repository {
        name: format!("repo-{stars}-{pushed_days_ago}"),
        star_count: stars,
        primary_language: lang.map(String::from),
        description: desc.map(String::from),
        last_pushed_at: Some(now() - Duration::days(pushed_days_ago)),
    }
}

fn example_repos() -> Vec<Repository> {
    vec![
        repo(10, Some("X"), Some("Well described project"), 10),
        repo(0, Some("Y"), Some("Another described project"), 100),
        repo(0, None, None, 150),
        repo(0, None, None, 300),
    ]
}

fn pipeline(source: Arc<StaticSource>) -> AnalysisPipeline {
    AnalysisPipeline::with_source(source, PipelineConfig::default())
}

#[tokio::test]
async fn test_worked_example_via_url() {
    let source = StaticSource::new(Some(profile(None)), example_repos());
    let analysis = pipeline(source.clone())
        .analyze("https://github.com/alice/", now())
        .await
        .expect("analysis should succeed");

    let report = analysis.report().expect("report expected");
    assert_eq!(report.total_score, 35);
    assert_eq!(report.breakdown.documentation, 10);
    assert_eq!(report.breakdown.activity, 5);
    assert_eq!(report.breakdown.impact, 2);
    assert_eq!(report.breakdown.technical_depth, 8);
    assert_eq!(report.breakdown.structure, 10);
    assert_eq!(report.red_flags, vec![MISSING_BIO]);
    assert!(!report.red_flags.iter().any(|f| f == NO_RECENT_ACTIVITY));
    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalid_identifier_never_calls_source() {
    let source = StaticSource::new(Some(profile(None)), example_repos());
    let pipeline = pipeline(source.clone());

    for raw in ["", "   ", "https://github.com/", "..", "../orgs/octo", "octo?x=1"] {
        let err = pipeline.analyze(raw, now()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier(_)), "{raw:?} -> {err}");
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_no_repositories_is_distinct_outcome() {
    let source = StaticSource::new(Some(profile(Some("Rustacean"))), Vec::new());
    let analysis = pipeline(source).analyze("alice", now()).await.unwrap();

    assert_eq!(
        analysis,
        Analysis::NoRepositories {
            identifier: "alice".to_string()
        }
    );
    assert!(analysis.report().is_none());
}

#[tokio::test]
async fn test_unknown_user_propagates() {
    let source = StaticSource::new(Some(profile(None)), example_repos());
    let err = pipeline(source).analyze("mallory", now()).await.unwrap_err();
    assert!(matches!(err, Error::UserNotFound(ref who) if who == "mallory"));
}

#[tokio::test]
async fn test_analyze_is_idempotent() {
    let source = StaticSource::new(Some(profile(None)), example_repos());
    let pipeline = pipeline(source);

    let first = pipeline.analyze("alice", now()).await.unwrap();
    let second = pipeline.analyze("  alice ", now()).await.unwrap();

    let first = serde_json::to_string(first.report().unwrap()).unwrap();
    let second = serde_json::to_string(second.report().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_strong_portfolio() {
    let repos = vec![
        repo(40, Some("Rust"), Some("A production parser"), 1),
        repo(30, Some("Go"), Some("A network daemon tool"), 2),
        repo(25, Some("TypeScript"), Some("Dashboard for metrics"), 3),
        repo(10, Some("C"), Some("Embedded firmware code"), 4),
        repo(5, Some("Zig"), Some("Allocator experiments"), 5),
    ];
    let source = StaticSource::new(Some(profile(Some("Systems programmer"))), repos);
    let analysis = pipeline(source).analyze("alice", now()).await.unwrap();
    let report = analysis.report().unwrap();

    assert_eq!(report.total_score, 100);
    assert_eq!(report.strengths.len(), 3);
    assert!(report.red_flags.is_empty());
}
