use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::Profile;

/// Counters derived from one profile/repository snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub repo_count: u32,
    pub total_stars: u64,
    pub distinct_language_count: u32,
    pub documented_repo_count: u32,
    pub active_repo_count: u32,
    pub account_age_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Documentation,
    Activity,
    Impact,
    TechnicalDepth,
    Structure,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Documentation,
        Category::Activity,
        Category::Impact,
        Category::TechnicalDepth,
        Category::Structure,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Documentation => write!(f, "Documentation"),
            Category::Activity => write!(f, "Activity"),
            Category::Impact => write!(f, "Impact"),
            Category::TechnicalDepth => write!(f, "Technical Depth"),
            Category::Structure => write!(f, "Structure"),
        }
    }
}

/// Unrounded category values, each in `[0, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawScores {
    pub documentation: f64,
    pub activity: f64,
    pub impact: f64,
    pub technical_depth: f64,
    pub structure: f64,
}

impl RawScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Documentation => self.documentation,
            Category::Activity => self.activity,
            Category::Impact => self.impact,
            Category::TechnicalDepth => self.technical_depth,
            Category::Structure => self.structure,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.into_iter().map(|c| self.get(c)).sum()
    }
}

/// Display breakdown: each category rounded to a whole number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub documentation: u8,
    pub activity: u8,
    pub impact: u8,
    pub technical_depth: u8,
    pub structure: u8,
}

impl CategoryScores {
    pub const MAX: u8 = 20;

    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Documentation => self.documentation,
            Category::Activity => self.activity,
            Category::Impact => self.impact,
            Category::TechnicalDepth => self.technical_depth,
            Category::Structure => self.structure,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl From<&RawScores> for CategoryScores {
    fn from(raw: &RawScores) -> Self {
        let display = |value: f64| value.clamp(0.0, Self::MAX as f64).round() as u8;
        Self {
            documentation: display(raw.documentation),
            activity: display(raw.activity),
            impact: display(raw.impact),
            technical_depth: display(raw.technical_depth),
            structure: display(raw.structure),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub repositories: u32,
    pub total_stars: u64,
    pub languages: u32,
    pub documented_repositories: u32,
    pub active_repositories: u32,
    pub account_age_days: i64,
    pub followers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub profile: Profile,
    pub total_score: u8,
    pub breakdown: CategoryScores,
    pub strengths: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    pub stats: ReportStats,
    pub analyzed_at: DateTime<Utc>,
}

/// Outcome of a completed analysis run.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Scored(Box<Report>),
    /// The account exists but has no public repositories to score.
    NoRepositories { identifier: String },
}

impl Analysis {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Analysis::Scored(report) => Some(&**report),
            Analysis::NoRepositories { .. } => None,
        }
    }
}
