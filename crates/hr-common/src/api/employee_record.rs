use std::convert::Infallible;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Availability, AttendanceStatus, Employee, EmploymentCategory};

/// Employee as delivered by the employee store or the browser. Every field is
/// optional; defaults are applied once in [`EmployeeRecord::into_employee`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// The store uses numeric ids, locally created records use strings.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub skill_level: Option<f64>,
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub performance_rating: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Number(value) => value.to_string(),
        RawId::Text(value) => value,
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EmployeeRecord {
    /// Apply the employee defaults:
    /// - skill level absent, zero or below one → 1
    /// - experience / performance absent or negative → 0
    /// - category → Full-time, availability → Available, status → Present
    pub fn into_employee(self) -> Employee {
        let employee_id = non_blank(self.employee_id);
        let id = non_blank(self.id)
            .or_else(|| employee_id.clone())
            .unwrap_or_default();

        let skill_level = self
            .skill_level
            .filter(|level| level.is_finite() && *level >= 1.0)
            .map(|level| level.round() as u32)
            .unwrap_or(1);

        Employee {
            id,
            employee_id,
            name: self.name.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            skill_level,
            experience: non_negative(self.experience),
            category: non_blank(self.category)
                .map(EmploymentCategory::from)
                .unwrap_or_default(),
            availability: non_blank(self.availability)
                .map(Availability::from)
                .unwrap_or_default(),
            performance_rating: non_negative(self.performance_rating),
            status: non_blank(self.status)
                .map(AttendanceStatus::from)
                .unwrap_or_default(),
        }
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

impl From<EmployeeRecord> for Employee {
    fn from(value: EmployeeRecord) -> Self {
        value.into_employee()
    }
}

pub fn ingest_records(records: Vec<EmployeeRecord>) -> Vec<Employee> {
    records.into_iter().map(EmployeeRecord::into_employee).collect()
}

/// Where the current employee pool comes from.
pub trait EmployeeSource {
    type Error: std::error::Error;

    /// The whole pool, in the source's order.
    fn fetch_employees(&self) -> Result<Vec<Employee>, Self::Error>;
}

/// Pool handed over in full by the caller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeSource {
    records: Vec<EmployeeRecord>,
}

impl InMemoryEmployeeSource {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EmployeeSource for InMemoryEmployeeSource {
    type Error = Infallible;

    fn fetch_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        Ok(ingest_records(self.records.clone()))
    }
}
