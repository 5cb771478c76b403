use thiserror::Error;

/// Reasons a team could not be formed. None of these are fatal: the caller
/// shows the message and lets the user adjust the criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamFormationError {
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },
    #[error("no employees available; add employees before forming a team")]
    EmptyPool,
    #[error("team size must be between {min} and {max}, got {requested}")]
    InvalidTeamSize {
        requested: i64,
        min: usize,
        max: usize,
    },
    #[error("only {eligible} eligible employees found for a team of {requested}; adjust the criteria")]
    InsufficientCandidates { eligible: usize, requested: usize },
}

impl TeamFormationError {
    pub fn code(&self) -> &'static str {
        match self {
            TeamFormationError::MissingRequiredField { .. } => "missing_required_field",
            TeamFormationError::EmptyPool => "empty_pool",
            TeamFormationError::InvalidTeamSize { .. } => "invalid_team_size",
            TeamFormationError::InsufficientCandidates { .. } => "insufficient_candidates",
        }
    }

    /// True for problems with the request itself rather than with the pool's
    /// ability to satisfy it.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TeamFormationError::InsufficientCandidates { .. })
    }
}
