use serde::Deserialize;

use super::employee_record::EmployeeRecord;
use crate::TeamCriteria;

/// Team formation request: the whole employee pool plus the form values.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRequest {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    pub criteria: TeamCriteria,
}

/// Pool-only request used by the roster endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterRequest {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}
