use crate::models::{Metrics, Profile};

pub const COMMUNITY_ENGAGEMENT: &str =
    "Strong community engagement: your projects have earned a healthy number of stars";
pub const TECHNICAL_DIVERSITY: &str =
    "Technical diversity: you build across several programming languages";
pub const CONSISTENT_ACTIVITY: &str =
    "Consistent activity: several repositories were pushed to in the last 90 days";

pub const MISSING_BIO: &str =
    "Missing bio: add a short bio so visitors know what you work on";
pub const NO_RECENT_ACTIVITY: &str =
    "No recent activity: none of your repositories were pushed to in the last 90 days";

pub const RECOMMENDATIONS: [&str; 3] = [
    "Structure each README with a clear overview and setup instructions",
    "Pin your strongest projects to the top of your profile",
    "Keep up a steady rhythm of weekly commits",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

struct Rule {
    applies: fn(&Metrics, &Profile) -> bool,
    statement: &'static str,
}

const STRENGTH_RULES: [Rule; 3] = [
    Rule {
        applies: well_starred,
        statement: COMMUNITY_ENGAGEMENT,
    },
    Rule {
        applies: polyglot,
        statement: TECHNICAL_DIVERSITY,
    },
    Rule {
        applies: consistently_active,
        statement: CONSISTENT_ACTIVITY,
    },
];

const RED_FLAG_RULES: [Rule; 2] = [
    Rule {
        applies: missing_bio,
        statement: MISSING_BIO,
    },
    Rule {
        applies: inactive,
        statement: NO_RECENT_ACTIVITY,
    },
];

fn well_starred(m: &Metrics, _: &Profile) -> bool {
    m.total_stars > 50
}

fn polyglot(m: &Metrics, _: &Profile) -> bool {
    m.distinct_language_count >= 3
}

fn consistently_active(m: &Metrics, _: &Profile) -> bool {
    m.active_repo_count >= 3
}

fn missing_bio(_: &Metrics, p: &Profile) -> bool {
    !p.has_biography()
}

fn inactive(m: &Metrics, _: &Profile) -> bool {
    m.active_repo_count == 0
}

pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, metrics: &Metrics, profile: &Profile) -> Insights {
        Insights {
            strengths: fire(&STRENGTH_RULES, metrics, profile),
            red_flags: fire(&RED_FLAG_RULES, metrics, profile),
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn fire(rules: &[Rule], metrics: &Metrics, profile: &Profile) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(metrics, profile))
        .map(|rule| rule.statement.to_string())
        .collect()
}
