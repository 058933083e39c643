use chrono::{DateTime, Utc};

use crate::analysis::insights::{InsightGenerator, Insights};
use crate::analysis::metrics::MetricAggregator;
use crate::analysis::scoring::{ScoreCalculator, ScoreCard};
use crate::models::{Metrics, Profile, Report, ReportStats, Repository};

pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        profile: &Profile,
        metrics: &Metrics,
        scores: &ScoreCard,
        insights: Insights,
        analyzed_at: DateTime<Utc>,
    ) -> Report {
        Report {
            profile: profile.clone(),
            total_score: scores.total,
            breakdown: scores.breakdown(),
            strengths: insights.strengths,
            red_flags: insights.red_flags,
            recommendations: insights.recommendations,
            stats: ReportStats {
                repositories: metrics.repo_count,
                total_stars: metrics.total_stars,
                languages: metrics.distinct_language_count,
                documented_repositories: metrics.documented_repo_count,
                active_repositories: metrics.active_repo_count,
                account_age_days: metrics.account_age_days,
                followers: profile.follower_count,
            },
            analyzed_at,
        }
    }
}

/// Scores an already fetched snapshot. `repos` must be non-empty.
pub fn score_snapshot(profile: &Profile, repos: &[Repository], now: DateTime<Utc>) -> Report {
    let metrics = MetricAggregator::new().aggregate(profile, repos, now);
    let scores = ScoreCalculator::new().calculate(&metrics);
    let insights = InsightGenerator::new().generate(&metrics, profile);
    ReportAssembler::assemble(profile, &metrics, &scores, insights, now)
}
