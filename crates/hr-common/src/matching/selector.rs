use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{
    category::ExperienceCategory,
    eligibility::is_eligible,
    scoring::{MatchScore, MatchScorer, MatchingConfig},
};
use crate::{Employee, ProjectPriority, TeamCriteria, error::TeamFormationError};

pub const MIN_TEAM_SIZE: usize = 2;

/// A scored copy of an eligible employee.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub employee: Employee,
    pub category: ExperienceCategory,
    pub match_score: MatchScore,
}

impl TeamMember {
    pub fn score(&self) -> f64 {
        self.match_score.total
    }

    /// Whole percentage shown next to each member.
    pub fn display_score(&self) -> u32 {
        self.match_score.total.round() as u32
    }
}

/// Means over the selected team, kept at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatistics {
    pub avg_experience: f64,
    pub avg_skill_level: f64,
    pub avg_performance: f64,
    pub avg_match_score: f64,
    pub total_members: usize,
}

impl TeamStatistics {
    pub fn from_members(members: &[TeamMember]) -> Self {
        let total_members = members.len();
        if total_members == 0 {
            return Self {
                avg_experience: 0.0,
                avg_skill_level: 0.0,
                avg_performance: 0.0,
                avg_match_score: 0.0,
                total_members,
            };
        }

        Self {
            avg_experience: mean(members, |m| m.employee.experience),
            avg_skill_level: mean(members, |m| f64::from(m.employee.skill_level)),
            avg_performance: mean(members, |m| m.employee.performance_rating),
            avg_match_score: mean(members, |m| m.match_score.total),
            total_members,
        }
    }
}

fn mean(members: &[TeamMember], value: impl Fn(&TeamMember) -> f64) -> f64 {
    members.iter().map(value).sum::<f64>() / members.len() as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamResult {
    pub team_name: String,
    pub project_name: String,
    pub project_priority: ProjectPriority,
    /// Highest score first.
    pub members: Vec<TeamMember>,
    pub statistics: TeamStatistics,
    pub created_at: DateTime<Utc>,
}

/// Form a team with the default weights.
pub fn form_team(
    employees: &[Employee],
    criteria: &TeamCriteria,
) -> Result<TeamResult, TeamFormationError> {
    TeamSelector::default().select(employees, criteria)
}

/// Check the request before touching the pool. Returns the team size.
pub fn validate_criteria(criteria: &TeamCriteria, pool_size: usize) -> Result<usize, TeamFormationError> {
    if criteria.team_name.trim().is_empty() {
        return Err(TeamFormationError::MissingRequiredField { field: "teamName" });
    }
    if criteria.project_name.trim().is_empty() {
        return Err(TeamFormationError::MissingRequiredField {
            field: "projectName",
        });
    }
    if pool_size == 0 {
        return Err(TeamFormationError::EmptyPool);
    }
    usize::try_from(criteria.team_size)
        .ok()
        .filter(|size| (MIN_TEAM_SIZE..=pool_size).contains(size))
        .ok_or(TeamFormationError::InvalidTeamSize {
            requested: criteria.team_size,
            min: MIN_TEAM_SIZE,
            max: pool_size,
        })
}

#[derive(Debug, Clone, Default)]
pub struct TeamSelector {
    scorer: MatchScorer,
}

impl TeamSelector {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            scorer: MatchScorer::new(config),
        }
    }

    /// Eligible employees scored and sorted by score, best first. Equal scores
    /// keep their pool order.
    pub fn rank_candidates(&self, employees: &[Employee], criteria: &TeamCriteria) -> Vec<TeamMember> {
        let mut ranked: Vec<_> = employees
            .iter()
            .filter(|employee| is_eligible(employee, criteria))
            .map(|employee| TeamMember {
                employee: employee.clone(),
                category: employee.experience_category(),
                match_score: self.scorer.calculate_match_score(employee, criteria),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        ranked
    }

    pub fn select(
        &self,
        employees: &[Employee],
        criteria: &TeamCriteria,
    ) -> Result<TeamResult, TeamFormationError> {
        self.select_at(employees, criteria, Utc::now())
    }

    /// Same as [`TeamSelector::select`] with an explicit creation time.
    pub fn select_at(
        &self,
        employees: &[Employee],
        criteria: &TeamCriteria,
        created_at: DateTime<Utc>,
    ) -> Result<TeamResult, TeamFormationError> {
        let team_size = validate_criteria(criteria, employees.len())?;

        let mut ranked = self.rank_candidates(employees, criteria);
        debug!(
            pool = employees.len(),
            eligible = ranked.len(),
            team_size,
            "ranked team candidates"
        );

        if ranked.len() < team_size {
            return Err(TeamFormationError::InsufficientCandidates {
                eligible: ranked.len(),
                requested: team_size,
            });
        }

        ranked.truncate(team_size);
        let statistics = TeamStatistics::from_members(&ranked);

        Ok(TeamResult {
            team_name: criteria.team_name.clone(),
            project_name: criteria.project_name.clone(),
            project_priority: criteria.project_priority,
            members: ranked,
            statistics,
            created_at,
        })
    }
}
