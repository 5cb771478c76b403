use axum::{Json, extract::State};
use hr_common::Employee;
use hr_common::api::employee_record::{EmployeeRecord, ingest_records};
use hr_common::api::team_request::RosterRequest;
use hr_common::roster::{self, RosterSummary};
use tracing::debug;

use super::teams::ensure_pool_size;
use crate::SharedState;
use crate::error::ApiError;

pub async fn summary(
    State(state): State<SharedState>,
    Json(request): Json<RosterRequest>,
) -> Result<Json<RosterSummary>, ApiError> {
    ensure_pool_size(request.employees.len(), state.config.max_pool_size)?;

    let employees = ingest_records(request.employees);
    Ok(Json(RosterSummary::from_employees(&employees)))
}

pub async fn toggle_attendance(Json(record): Json<EmployeeRecord>) -> Json<Employee> {
    let employee = roster::toggle_attendance(&record.into_employee());
    debug!(id = %employee.id, status = employee.status.as_str(), "attendance toggled");
    Json(employee)
}
