pub mod api;
pub mod error;
pub mod logging;
pub mod matching;
pub mod roster;

use serde::{Deserialize, Deserializer, Serialize};
use strum::AsRefStr;

use matching::category::{ExperienceCategory, classify};

// Commonly used data models for matching and roster functions.

/// Current availability of an employee for project work.
///
/// Values outside the known set are kept verbatim in `Other`; they are not
/// excluded from teams but earn no availability bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    #[default]
    Available,
    Busy,
    OnLeave,
    Unavailable,
    Other(String),
}

impl Availability {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Available" => Self::Available,
            "Busy" => Self::Busy,
            "On Leave" => Self::OnLeave,
            "Unavailable" => Self::Unavailable,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::OnLeave => "On Leave",
            Self::Unavailable => "Unavailable",
            Self::Other(value) => value,
        }
    }

    /// `Unavailable` and `On Leave` never make it into a team.
    pub fn blocks_assignment(&self) -> bool {
        matches!(self, Self::Unavailable | Self::OnLeave)
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        value.as_str().to_string()
    }
}

/// Contract category as recorded by HR. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentCategory {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Intern,
    Freelance,
    Other(String),
}

impl EmploymentCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Full-time" => Self::FullTime,
            "Part-time" => Self::PartTime,
            "Contract" => Self::Contract,
            "Intern" => Self::Intern,
            "Freelance" => Self::Freelance,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Intern => "Intern",
            Self::Freelance => "Freelance",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for EmploymentCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EmploymentCategory> for String {
    fn from(value: EmploymentCategory) -> Self {
        value.as_str().to_string()
    }
}

/// Daily attendance mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Other(String),
}

impl AttendanceStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Present" => Self::Present,
            "Absent" => Self::Absent,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AttendanceStatus> for String {
    fn from(value: AttendanceStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Fully defaulted employee value. Built from an
/// [`api::employee_record::EmployeeRecord`]; never mutated by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_id: Option<String>,
    pub name: String,
    pub department: String,
    pub role: String,
    pub skills: String,
    /// Nominal range 1 to 10.
    pub skill_level: u32,
    /// Years, never negative.
    pub experience: f64,
    pub category: EmploymentCategory,
    pub availability: Availability,
    /// Nominal range 0 to 10.
    pub performance_rating: f64,
    pub status: AttendanceStatus,
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            id: String::new(),
            employee_id: None,
            name: String::new(),
            department: String::new(),
            role: String::new(),
            skills: String::new(),
            skill_level: 1,
            experience: 0.0,
            category: EmploymentCategory::default(),
            availability: Availability::default(),
            performance_rating: 0.0,
            status: AttendanceStatus::default(),
        }
    }
}

impl Employee {
    pub fn experience_category(&self) -> ExperienceCategory {
        classify(self.experience, f64::from(self.skill_level))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum ProjectPriority {
    High,
    #[default]
    Medium,
    Low,
}

/// Requirements for a team, as entered on the team formation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamCriteria {
    pub team_name: String,
    pub project_name: String,
    /// Signed so that negative sizes reach validation instead of failing to parse.
    pub team_size: i64,
    /// Comma separated; empty means no requirement.
    pub primary_skills: String,
    pub secondary_skills: String,
    pub min_experience: f64,
    #[serde(deserialize_with = "empty_category_as_none")]
    pub employee_category: Option<ExperienceCategory>,
    pub project_priority: ProjectPriority,
}

impl Default for TeamCriteria {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            project_name: String::new(),
            team_size: 4,
            primary_skills: String::new(),
            secondary_skills: String::new(),
            min_experience: 0.0,
            employee_category: None,
            project_priority: ProjectPriority::default(),
        }
    }
}

fn empty_category_as_none<'de, D>(deserializer: D) -> Result<Option<ExperienceCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<ExperienceCategory>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("unknown employee category: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_round_trips_known_and_unknown_values() {
        assert_eq!(Availability::parse("On Leave"), Availability::OnLeave);
        assert_eq!(Availability::parse(" Busy "), Availability::Busy);
        assert_eq!(
            Availability::parse("Remote only"),
            Availability::Other("Remote only".into())
        );
        assert_eq!(Availability::OnLeave.as_str(), "On Leave");
        assert!(Availability::Unavailable.blocks_assignment());
        assert!(!Availability::Other("Remote only".into()).blocks_assignment());
    }

    #[test]
    fn criteria_treats_empty_category_as_unconstrained() {
        let criteria: TeamCriteria = serde_json::from_str(
            r#"{"teamName":"Alpha","projectName":"Apollo","teamSize":3,"employeeCategory":""}"#,
        )
        .unwrap();

        assert_eq!(criteria.employee_category, None);
        assert_eq!(criteria.min_experience, 0.0);
        assert_eq!(criteria.project_priority, ProjectPriority::Medium);
    }

    #[test]
    fn criteria_parses_hyphenated_category() {
        let criteria: TeamCriteria = serde_json::from_str(
            r#"{"teamName":"Alpha","projectName":"Apollo","employeeCategory":"Mid-level","projectPriority":"High"}"#,
        )
        .unwrap();

        assert_eq!(criteria.employee_category, Some(ExperienceCategory::MidLevel));
        assert_eq!(criteria.project_priority, ProjectPriority::High);
        assert_eq!(criteria.team_size, 4);
    }

    #[test]
    fn criteria_keeps_negative_team_size_for_validation() {
        let criteria: TeamCriteria =
            serde_json::from_str(r#"{"teamName":"Alpha","projectName":"Apollo","teamSize":-1}"#)
                .unwrap();
        assert_eq!(criteria.team_size, -1);
    }

    #[test]
    fn criteria_rejects_unknown_category() {
        let result = serde_json::from_str::<TeamCriteria>(r#"{"employeeCategory":"Principal"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn employee_serializes_with_display_strings() {
        let employee = Employee {
            id: "7".into(),
            name: "Asha".into(),
            availability: Availability::OnLeave,
            category: EmploymentCategory::PartTime,
            ..Employee::default()
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["availability"], "On Leave");
        assert_eq!(json["category"], "Part-time");
        assert_eq!(json["skillLevel"], 1);
        assert_eq!(json["status"], "Present");
    }
}
