use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Experience tier derived from years of experience and skill level.
/// Ordered from least to most senior.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ExperienceCategory {
    Intern,
    Junior,
    #[serde(rename = "Mid-level")]
    #[strum(serialize = "Mid-level")]
    MidLevel,
    Senior,
}

impl ExperienceCategory {
    pub const ORDERED: [ExperienceCategory; 4] = [
        ExperienceCategory::Intern,
        ExperienceCategory::Junior,
        ExperienceCategory::MidLevel,
        ExperienceCategory::Senior,
    ];

    pub fn rank(self) -> usize {
        match self {
            ExperienceCategory::Intern => 0,
            ExperienceCategory::Junior => 1,
            ExperienceCategory::MidLevel => 2,
            ExperienceCategory::Senior => 3,
        }
    }

    /// Number of tiers between `self` and `other`.
    pub fn distance(self, other: ExperienceCategory) -> usize {
        self.rank().abs_diff(other.rank())
    }

    pub fn is_adjacent(self, other: ExperienceCategory) -> bool {
        self.distance(other) == 1
    }
}

/// Classify an employee. The first matching rule wins and each rule is an OR,
/// so a low skill level pulls a long-tenured employee down a tier.
pub fn classify(experience: f64, skill_level: f64) -> ExperienceCategory {
    if experience < 1.0 || skill_level < 3.0 {
        ExperienceCategory::Intern
    } else if experience < 3.0 || skill_level < 5.0 {
        ExperienceCategory::Junior
    } else if experience < 6.0 || skill_level < 7.0 {
        ExperienceCategory::MidLevel
    } else {
        ExperienceCategory::Senior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_experience_or_low_skill_is_intern() {
        assert_eq!(classify(0.0, 10.0), ExperienceCategory::Intern);
        assert_eq!(classify(0.99, 9.0), ExperienceCategory::Intern);
        assert_eq!(classify(25.0, 2.0), ExperienceCategory::Intern);
        assert_eq!(classify(12.0, 2.9), ExperienceCategory::Intern);
    }

    #[test]
    fn thresholds_are_exclusive_upper_bounds() {
        assert_eq!(classify(1.0, 3.0), ExperienceCategory::Junior);
        assert_eq!(classify(3.0, 5.0), ExperienceCategory::MidLevel);
        assert_eq!(classify(6.0, 7.0), ExperienceCategory::Senior);
        assert_eq!(classify(2.9, 10.0), ExperienceCategory::Junior);
        assert_eq!(classify(10.0, 4.0), ExperienceCategory::Junior);
        assert_eq!(classify(10.0, 6.0), ExperienceCategory::MidLevel);
    }

    #[test]
    fn classifies_spread_of_tenures() {
        let skill_five: Vec<_> = [0.0, 1.0, 3.0, 6.0, 10.0]
            .into_iter()
            .map(|years| classify(years, 5.0))
            .collect();
        assert_eq!(
            skill_five,
            vec![
                ExperienceCategory::Intern,
                ExperienceCategory::Junior,
                ExperienceCategory::MidLevel,
                ExperienceCategory::MidLevel,
                ExperienceCategory::MidLevel,
            ]
        );

        let skill_seven: Vec<_> = [0.0, 1.0, 3.0, 6.0, 10.0]
            .into_iter()
            .map(|years| classify(years, 7.0))
            .collect();
        assert_eq!(
            skill_seven,
            vec![
                ExperienceCategory::Intern,
                ExperienceCategory::Junior,
                ExperienceCategory::MidLevel,
                ExperienceCategory::Senior,
                ExperienceCategory::Senior,
            ]
        );
    }

    #[test]
    fn distance_follows_tier_order() {
        assert!(ExperienceCategory::Junior.is_adjacent(ExperienceCategory::Intern));
        assert!(ExperienceCategory::MidLevel.is_adjacent(ExperienceCategory::Senior));
        assert!(!ExperienceCategory::Intern.is_adjacent(ExperienceCategory::MidLevel));
        assert_eq!(
            ExperienceCategory::Intern.distance(ExperienceCategory::Senior),
            3
        );
        assert!(ExperienceCategory::ORDERED.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn parses_and_displays_hyphenated_name() {
        assert_eq!(
            "Mid-level".parse::<ExperienceCategory>().unwrap(),
            ExperienceCategory::MidLevel
        );
        assert_eq!(
            "senior".parse::<ExperienceCategory>().unwrap(),
            ExperienceCategory::Senior
        );
        assert_eq!(ExperienceCategory::MidLevel.to_string(), "Mid-level");
        assert_eq!(ExperienceCategory::Junior.as_ref(), "Junior");
    }
}
