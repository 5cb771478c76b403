use super::{
    skills::check_skills,
    weights::{ADJACENT_CATEGORY_CREDIT, BUSY_AVAILABILITY_CREDIT, MAX_SCORE, TEAM_WEIGHTS, Weights},
};
use crate::{Availability, Employee, TeamCriteria};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: TEAM_WEIGHTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    /// Points awarded, already clamped to `0.0..=max_score`.
    pub score: f64,
    pub max_score: f64,
    pub status: &'static str,
    pub details: String,
}

impl ScoringResult {
    fn new(score: f64, max_score: f64, details: String) -> Self {
        let score = clamp_points(score, max_score);
        Self {
            score,
            max_score,
            status: status_from_ratio(score, max_score),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// 0.0 to 100.0
    pub total: f64,
    pub experience: ScoringResult,
    pub category: ScoringResult,
    pub primary_skills: ScoringResult,
    pub secondary_skills: ScoringResult,
    pub availability: ScoringResult,
}

/// Score with the default team weights.
pub fn calculate_match_score(employee: &Employee, criteria: &TeamCriteria) -> MatchScore {
    MatchScorer::new(MatchingConfig::default()).calculate_match_score(employee, criteria)
}

#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    config: MatchingConfig,
}

impl MatchScorer {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn calculate_match_score(&self, employee: &Employee, criteria: &TeamCriteria) -> MatchScore {
        let experience = self.score_experience(employee, criteria);
        let category = self.score_category(employee, criteria);
        let primary_skills = self.score_primary_skills(employee, criteria);
        let secondary_skills = self.score_secondary_skills(employee, criteria);
        let availability = self.score_availability(employee);

        let total = clamp_points(
            experience.score
                + category.score
                + primary_skills.score
                + secondary_skills.score
                + availability.score,
            MAX_SCORE,
        );

        MatchScore {
            total,
            experience,
            category,
            primary_skills,
            secondary_skills,
            availability,
        }
    }

    fn score_experience(&self, employee: &Employee, criteria: &TeamCriteria) -> ScoringResult {
        let max = self.config.weights.experience;
        let required = criteria.min_experience;
        let actual = employee.experience;

        if required <= 0.0 {
            return ScoringResult::new(max, max, "no minimum experience".into());
        }

        if actual >= required {
            return ScoringResult::new(
                max,
                max,
                format!("meets minimum: {:.1}y >= {:.1}y", actual, required),
            );
        }

        ScoringResult::new(
            (actual / required) * max,
            max,
            format!("below minimum: {:.1}y < {:.1}y", actual, required),
        )
    }

    fn score_category(&self, employee: &Employee, criteria: &TeamCriteria) -> ScoringResult {
        let max = self.config.weights.category;
        let actual = employee.experience_category();

        let Some(required) = criteria.employee_category else {
            return ScoringResult::new(max, max, format!("no category constraint ({actual})"));
        };

        if actual == required {
            ScoringResult::new(max, max, format!("category match: {actual}"))
        } else if actual.is_adjacent(required) {
            ScoringResult::new(
                max * ADJACENT_CATEGORY_CREDIT,
                max,
                format!("adjacent category: required={required}, employee={actual}"),
            )
        } else {
            ScoringResult::new(
                0.0,
                max,
                format!("category mismatch: required={required}, employee={actual}"),
            )
        }
    }

    fn score_primary_skills(&self, employee: &Employee, criteria: &TeamCriteria) -> ScoringResult {
        let max = self.config.weights.primary_skills;
        let result = check_skills(&criteria.primary_skills, &employee.skills);
        ScoringResult::new(result.match_percentage * max, max, result.reason)
    }

    fn score_secondary_skills(&self, employee: &Employee, criteria: &TeamCriteria) -> ScoringResult {
        let max = self.config.weights.secondary_skills;
        let result = check_skills(&criteria.secondary_skills, &employee.skills);
        ScoringResult::new(result.match_percentage * max, max, result.reason)
    }

    fn score_availability(&self, employee: &Employee) -> ScoringResult {
        let weights = self.config.weights;

        let availability_points = match employee.availability {
            Availability::Available => weights.availability,
            Availability::Busy => weights.availability * BUSY_AVAILABILITY_CREDIT,
            _ => 0.0,
        };
        let performance_points = clamp_points(
            (employee.performance_rating / 10.0) * weights.performance,
            weights.performance,
        );

        ScoringResult::new(
            clamp_points(availability_points, weights.availability) + performance_points,
            weights.availability_and_performance(),
            format!(
                "availability {} (+{:.1}) / performance {:.1} (+{:.1})",
                employee.availability.as_str(),
                availability_points,
                employee.performance_rating,
                performance_points
            ),
        )
    }
}

/// NaN counts as zero.
fn clamp_points(points: f64, max: f64) -> f64 {
    if points.is_nan() {
        0.0
    } else {
        points.clamp(0.0, max)
    }
}

fn status_from_ratio(score: f64, max: f64) -> &'static str {
    if max <= 0.0 {
        return "PERFECT_MATCH";
    }

    let ratio = score / max;
    if ratio >= 0.999 {
        "PERFECT_MATCH"
    } else if ratio >= 0.7 {
        "MATCH"
    } else if ratio > 0.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::category::ExperienceCategory;

    fn full_employee() -> Employee {
        Employee {
            id: "1".into(),
            name: "Mina".into(),
            skills: "Rust, AWS, PostgreSQL".into(),
            skill_level: 8,
            experience: 7.0,
            availability: Availability::Available,
            performance_rating: 10.0,
            ..Employee::default()
        }
    }

    fn open_criteria() -> TeamCriteria {
        TeamCriteria {
            team_name: "Alpha".into(),
            project_name: "Apollo".into(),
            team_size: 2,
            ..TeamCriteria::default()
        }
    }

    #[test]
    fn unconstrained_available_top_performer_scores_exactly_100() {
        let score = calculate_match_score(&full_employee(), &open_criteria());
        assert_eq!(score.total, 100.0);
        assert_eq!(score.experience.status, "PERFECT_MATCH");
        assert_eq!(score.availability.score, 20.0);
    }

    #[test]
    fn experience_below_minimum_earns_linear_credit() {
        let mut employee = full_employee();
        employee.experience = 2.0;
        let criteria = TeamCriteria {
            min_experience: 4.0,
            ..open_criteria()
        };

        let score = calculate_match_score(&employee, &criteria);
        assert!((score.experience.score - 15.0).abs() < 1e-9);
        assert_eq!(score.experience.status, "PARTIAL_MATCH");
    }

    #[test]
    fn adjacent_category_earns_half_credit() {
        let mut employee = full_employee();
        employee.experience = 4.0; // Mid-level
        let senior = TeamCriteria {
            employee_category: Some(ExperienceCategory::Senior),
            ..open_criteria()
        };
        let intern = TeamCriteria {
            employee_category: Some(ExperienceCategory::Intern),
            ..open_criteria()
        };

        assert_eq!(calculate_match_score(&employee, &senior).category.score, 10.0);
        assert_eq!(calculate_match_score(&employee, &intern).category.score, 0.0);
    }

    #[test]
    fn skills_scale_by_matched_share() {
        let criteria = TeamCriteria {
            primary_skills: "rust, go".into(),
            secondary_skills: "aws, gcp, azure, postgres".into(),
            ..open_criteria()
        };

        let score = calculate_match_score(&full_employee(), &criteria);
        assert!((score.primary_skills.score - 15.0).abs() < 1e-9);
        assert!((score.secondary_skills.score - 5.0).abs() < 1e-9);
        assert!((score.total - 90.0).abs() < 1e-9);
    }

    #[test]
    fn busy_and_unrated_employee_gets_partial_bonus() {
        let mut employee = full_employee();
        employee.availability = Availability::Busy;
        employee.performance_rating = 0.0;

        let score = calculate_match_score(&employee, &open_criteria());
        assert_eq!(score.availability.score, 5.0);
        assert_eq!(score.total, 95.0);
    }

    #[test]
    fn out_of_range_inputs_stay_within_bounds() {
        let mut employee = full_employee();
        employee.performance_rating = 50.0;
        employee.availability = Availability::Other("Remote".into());

        let score = calculate_match_score(&employee, &open_criteria());
        assert_eq!(score.availability.score, 10.0);
        assert!(score.total <= 100.0);

        employee.performance_rating = -4.0;
        let score = calculate_match_score(&employee, &open_criteria());
        assert_eq!(score.availability.score, 0.0);
        assert!(score.total >= 0.0);
    }

    #[test]
    fn score_is_always_within_zero_and_hundred() {
        let skills = ["", "rust", "rust, go", "python, java, c"];
        let categories = [
            None,
            Some(ExperienceCategory::Intern),
            Some(ExperienceCategory::Senior),
        ];

        for experience in [0.0, 0.5, 2.0, 5.5, 12.0] {
            for rating in [0.0, 3.3, 9.99, 10.0] {
                for primary in skills {
                    for category in categories {
                        let employee = Employee {
                            experience,
                            performance_rating: rating,
                            skills: "Rust, Go, Python".into(),
                            skill_level: 6,
                            ..Employee::default()
                        };
                        let criteria = TeamCriteria {
                            primary_skills: primary.into(),
                            secondary_skills: primary.into(),
                            min_experience: 3.0,
                            employee_category: category,
                            ..open_criteria()
                        };

                        let total = calculate_match_score(&employee, &criteria).total;
                        assert!((0.0..=100.0).contains(&total), "total out of range: {total}");
                    }
                }
            }
        }
    }

    #[test]
    fn custom_weights_are_respected() {
        let scorer = MatchScorer::new(MatchingConfig {
            weights: Weights {
                experience: 50.0,
                category: 10.0,
                primary_skills: 20.0,
                secondary_skills: 10.0,
                availability: 5.0,
                performance: 5.0,
            },
        });

        let score = scorer.calculate_match_score(&full_employee(), &open_criteria());
        assert_eq!(score.experience.max_score, 50.0);
        assert_eq!(score.total, 100.0);
    }
}
