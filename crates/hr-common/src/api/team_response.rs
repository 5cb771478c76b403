use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Employee, ProjectPriority,
    matching::{
        category::ExperienceCategory,
        scoring::{MatchScore, ScoringResult},
        selector::{TeamMember, TeamResult, TeamStatistics},
    },
};

/// Team as rendered by the team formation screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_name: String,
    pub project_name: String,
    pub project_priority: ProjectPriority,
    pub members: Vec<TeamMemberResponse>,
    pub statistics: TeamStatisticsResponse,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberResponse {
    #[serde(flatten)]
    pub employee: Employee,
    /// Rounded to a whole percentage.
    pub match_score: u32,
    pub experience_category: ExperienceCategory,
    pub score_breakdown: ScoreBreakdown,
}

/// Points per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub experience: ComponentScore,
    pub category: ComponentScore,
    pub primary_skills: ComponentScore,
    pub secondary_skills: ComponentScore,
    pub availability: ComponentScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScore {
    pub score: f64,
    pub max_score: f64,
    pub status: String,
    pub details: String,
}

/// Averages carry one decimal place, as strings, so the screen shows "4.0"
/// rather than "4".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatisticsResponse {
    pub avg_experience: String,
    pub avg_skill_level: String,
    pub avg_performance: String,
    pub avg_match_score: String,
    pub total_members: usize,
}

/// Ties round up: 5.25 renders as "5.3".
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

impl From<&ScoringResult> for ComponentScore {
    fn from(value: &ScoringResult) -> Self {
        Self {
            score: value.score,
            max_score: value.max_score,
            status: value.status.to_string(),
            details: value.details.clone(),
        }
    }
}

impl From<&MatchScore> for ScoreBreakdown {
    fn from(value: &MatchScore) -> Self {
        Self {
            experience: (&value.experience).into(),
            category: (&value.category).into(),
            primary_skills: (&value.primary_skills).into(),
            secondary_skills: (&value.secondary_skills).into(),
            availability: (&value.availability).into(),
        }
    }
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(value: &TeamMember) -> Self {
        Self {
            employee: value.employee.clone(),
            match_score: value.display_score(),
            experience_category: value.category,
            score_breakdown: ScoreBreakdown::from(&value.match_score),
        }
    }
}

impl From<&TeamStatistics> for TeamStatisticsResponse {
    fn from(value: &TeamStatistics) -> Self {
        Self {
            avg_experience: one_decimal(value.avg_experience),
            avg_skill_level: one_decimal(value.avg_skill_level),
            avg_performance: one_decimal(value.avg_performance),
            avg_match_score: one_decimal(value.avg_match_score),
            total_members: value.total_members,
        }
    }
}

impl From<&TeamResult> for TeamResponse {
    fn from(value: &TeamResult) -> Self {
        Self {
            team_name: value.team_name.clone(),
            project_name: value.project_name.clone(),
            project_priority: value.project_priority,
            members: value.members.iter().map(TeamMemberResponse::from).collect(),
            statistics: TeamStatisticsResponse::from(&value.statistics),
            created_at: value.created_at,
        }
    }
}
