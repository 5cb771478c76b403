use axum::{Json, extract::State};
use hr_common::api::employee_record::{EmployeeSource, InMemoryEmployeeSource};
use hr_common::api::team_request::TeamRequest;
use hr_common::api::team_response::TeamResponse;
use hr_common::matching::selector::TeamSelector;
use tracing::info;

use crate::SharedState;
use crate::error::ApiError;

pub(crate) fn ensure_pool_size(len: usize, max: usize) -> Result<(), ApiError> {
    if len > max {
        return Err(ApiError::BadRequest(format!(
            "employee pool of {len} exceeds the limit of {max}"
        )));
    }
    Ok(())
}

pub async fn form_team(
    State(state): State<SharedState>,
    Json(request): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    ensure_pool_size(request.employees.len(), state.config.max_pool_size)?;

    let source = InMemoryEmployeeSource::new(request.employees);
    let employees = source
        .fetch_employees()
        .unwrap_or_else(|never| match never {});

    let team = TeamSelector::new(state.matching.clone()).select(&employees, &request.criteria)?;

    info!(
        team_name = %team.team_name,
        project_name = %team.project_name,
        pool = employees.len(),
        members = team.members.len(),
        avg_match_score = team.statistics.avg_match_score,
        "team formed"
    );

    Ok(Json(TeamResponse::from(&team)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_limit_is_inclusive() {
        assert!(ensure_pool_size(5000, 5000).is_ok());
        assert!(matches!(
            ensure_pool_size(5001, 5000),
            Err(ApiError::BadRequest(_))
        ));
    }
}
