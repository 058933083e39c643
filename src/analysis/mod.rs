pub mod identifier;
pub mod metrics;
pub mod scoring;
pub mod insights;
pub mod report;
pub mod pipeline;
pub mod session;

pub use identifier::{extract_identifier, is_account_segment, IdentifierExtractor};
pub use metrics::MetricAggregator;
pub use scoring::{ScoreCalculator, ScoreCard};
pub use insights::{InsightGenerator, Insights};
pub use report::{score_snapshot, ReportAssembler};
pub use pipeline::AnalysisPipeline;
pub use session::{AnalysisSession, Ticket};
