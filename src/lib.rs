pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, ProfileSource};
pub use analysis::{AnalysisPipeline, AnalysisSession};
pub use models::{Analysis, Report};
