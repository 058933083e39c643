use std::sync::Arc;
use chrono::{DateTime, Utc};
use futures::future::try_join;

use crate::analysis::identifier::{is_account_segment, IdentifierExtractor};
use crate::analysis::insights::InsightGenerator;
use crate::analysis::metrics::MetricAggregator;
use crate::analysis::report::ReportAssembler;
use crate::analysis::scoring::ScoreCalculator;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::github::ProfileSource;
use crate::models::Analysis;

pub struct AnalysisPipeline {
    source: Arc<dyn ProfileSource>,
    extractor: IdentifierExtractor,
    aggregator: MetricAggregator,
    calculator: ScoreCalculator,
    insights: InsightGenerator,
}

impl AnalysisPipeline {
    pub fn new(source: impl ProfileSource + 'static, config: PipelineConfig) -> Self {
        Self::with_source(Arc::new(source), config)
    }

    pub fn with_source(source: Arc<dyn ProfileSource>, config: PipelineConfig) -> Self {
        Self {
            source,
            extractor: IdentifierExtractor::new(config.profile_host),
            aggregator: MetricAggregator::new(),
            calculator: ScoreCalculator::new(),
            insights: InsightGenerator::new(),
        }
    }

    /// Canonical identifier for `raw_input` under the configured host; empty
    /// when there is nothing to analyze.
    pub fn extract(&self, raw_input: &str) -> String {
        self.extractor.extract(raw_input)
    }

    pub async fn analyze(&self, raw_input: &str, now: DateTime<Utc>) -> Result<Analysis> {
        // Step 1: Resolve the account identifier
        let identifier = self.extract(raw_input);
        if !is_account_segment(&identifier) {
            return Err(Error::InvalidIdentifier(raw_input.trim().to_string()));
        }

        // Step 2: Fetch profile and repositories together
        tracing::info!("Fetching {} profile for: {}", self.source.name(), identifier);
        let (profile, repos) = try_join(
            self.source.fetch_profile(&identifier),
            self.source.fetch_repositories(&identifier),
        )
        .await?;

        if repos.is_empty() {
            tracing::warn!("No public repositories found for {}", identifier);
            return Ok(Analysis::NoRepositories { identifier });
        }

        tracing::info!("Found {} repositories to score", repos.len());

        // Step 3: Aggregate, score and explain
        let metrics = self.aggregator.aggregate(&profile, &repos, now);
        tracing::debug!("Metrics for {}: {:?}", identifier, metrics);

        let scores = self.calculator.calculate(&metrics);
        let insights = self.insights.generate(&metrics, &profile);

        let report = ReportAssembler::assemble(&profile, &metrics, &scores, insights, now);
        tracing::info!("Portfolio score for {}: {}/100", identifier, report.total_score);

        Ok(Analysis::Scored(Box::new(report)))
    }
}
