use crate::models::{CategoryScores, Metrics, RawScores};

/// Points available in each category.
pub const CATEGORY_MAX: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Stars per point of impact.
    pub stars_per_point: f64,
    /// Points per distinct primary language.
    pub points_per_language: f64,
    /// Repository count at which structure earns full marks.
    pub full_structure_repos: u32,
    pub partial_structure: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            stars_per_point: 5.0,
            points_per_language: 4.0,
            full_structure_repos: 5,
            partial_structure: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub raw: RawScores,
    pub total: u8,
}

impl ScoreCard {
    pub fn breakdown(&self) -> CategoryScores {
        CategoryScores::from(&self.raw)
    }
}

pub struct ScoreCalculator {
    weights: ScoreWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// `metrics.repo_count` must be non-zero.
    pub fn calculate(&self, metrics: &Metrics) -> ScoreCard {
        let repo_count = metrics.repo_count.max(1) as f64;

        let raw = RawScores {
            documentation: bounded(metrics.documented_repo_count as f64 / repo_count * CATEGORY_MAX),
            activity: bounded(metrics.active_repo_count as f64 / repo_count * CATEGORY_MAX),
            impact: bounded(metrics.total_stars as f64 / self.weights.stars_per_point),
            technical_depth: bounded(
                metrics.distinct_language_count as f64 * self.weights.points_per_language,
            ),
            structure: if metrics.repo_count >= self.weights.full_structure_repos {
                CATEGORY_MAX
            } else {
                self.weights.partial_structure
            },
        };

        // The total comes from unrounded values and is rounded once
        let total = raw.sum().clamp(0.0, 100.0).round() as u8;

        ScoreCard { raw, total }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn bounded(value: f64) -> f64 {
    value.clamp(0.0, CATEGORY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn metrics(repos: u32, stars: u64, langs: u32, documented: u32, active: u32) -> Metrics {
        Metrics {
            repo_count: repos,
            total_stars: stars,
            distinct_language_count: langs,
            documented_repo_count: documented,
            active_repo_count: active,
            account_age_days: 365,
        }
    }

    #[test]
    fn test_worked_example() {
        let card = ScoreCalculator::new().calculate(&metrics(4, 10, 2, 2, 1));
        let breakdown = card.breakdown();

        assert_eq!(breakdown.documentation, 10);
        assert_eq!(breakdown.activity, 5);
        assert_eq!(breakdown.impact, 2);
        assert_eq!(breakdown.technical_depth, 8);
        assert_eq!(breakdown.structure, 10);
        assert_eq!(card.total, 35);
    }

    #[test]
    fn test_documentation_extremes() {
        let calc = ScoreCalculator::new();
        assert_eq!(calc.calculate(&metrics(7, 0, 0, 7, 0)).breakdown().documentation, 20);
        assert_eq!(calc.calculate(&metrics(7, 0, 0, 0, 0)).breakdown().documentation, 0);
    }

    #[test]
    fn test_impact_saturates() {
        let calc = ScoreCalculator::new();
        for repos in [1, 3, 12] {
            assert_eq!(calc.calculate(&metrics(repos, 100, 0, 0, 0)).breakdown().impact, 20);
            assert_eq!(calc.calculate(&metrics(repos, 9_999, 0, 0, 0)).breakdown().impact, 20);
        }
        assert_eq!(calc.calculate(&metrics(1, 99, 0, 0, 0)).raw.impact, 19.8);
    }

    #[test]
    fn test_technical_depth_saturates() {
        let calc = ScoreCalculator::new();
        assert_eq!(calc.calculate(&metrics(5, 0, 4, 0, 0)).breakdown().technical_depth, 16);
        assert_eq!(calc.calculate(&metrics(5, 0, 5, 0, 0)).breakdown().technical_depth, 20);
        assert_eq!(calc.calculate(&metrics(9, 0, 9, 0, 0)).breakdown().technical_depth, 20);
    }

    #[test]
    fn test_structure_is_binary() {
        let calc = ScoreCalculator::new();
        for repos in 1..=4 {
            assert_eq!(calc.calculate(&metrics(repos, 0, 0, 0, 0)).breakdown().structure, 10);
        }
        for repos in [5, 6, 100] {
            assert_eq!(calc.calculate(&metrics(repos, 0, 0, 0, 0)).breakdown().structure, 20);
        }
    }

    #[test]
    fn test_maximum_profile() {
        let card = ScoreCalculator::new().calculate(&metrics(10, 500, 8, 10, 10));
        assert_eq!(card.total, 100);
        assert!(card.breakdown().iter().all(|(_, v)| v == 20));
    }

    #[test]
    fn test_total_uses_unrounded_values() {
        // 2.5 + 2.5 + 2.6 + 0 + 20 = 27.6 -> 28, while the displayed
        // entries round up individually to 3 + 3 + 3 + 0 + 20 = 29
        let card = ScoreCalculator::new().calculate(&metrics(8, 13, 0, 1, 1));
        let breakdown = card.breakdown();
        assert_eq!(breakdown.documentation, 3);
        assert_eq!(breakdown.activity, 3);
        assert_eq!(breakdown.impact, 3);
        assert_eq!(card.total, 28);
        let displayed: u32 = breakdown.iter().map(|(_, v)| v as u32).sum();
        assert_eq!(displayed, 29);
    }

    #[test]
    fn test_bounds_hold_across_inputs() {
        let calc = ScoreCalculator::new();
        for repos in 1..=8u32 {
            for documented in 0..=repos {
                for active in 0..=repos {
                    for langs in 0..=repos {
                        let card = calc.calculate(&metrics(repos, (repos * 40) as u64, langs, documented, active));
                        assert!(card.total <= 100);
                        for category in Category::ALL {
                            let raw = card.raw.get(category);
                            assert!((0.0..=CATEGORY_MAX).contains(&raw), "{category} = {raw}");
                        }
                    }
                }
            }
        }
    }
}
