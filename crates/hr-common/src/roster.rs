use std::collections::HashSet;

use serde::Serialize;

use crate::{Availability, AttendanceStatus, Employee};

/// Flip an employee between Present and Absent. Anything else is marked
/// Present.
pub fn toggle_attendance(employee: &Employee) -> Employee {
    let status = match employee.status {
        AttendanceStatus::Present => AttendanceStatus::Absent,
        AttendanceStatus::Absent | AttendanceStatus::Other(_) => AttendanceStatus::Present,
    };

    Employee {
        status,
        ..employee.clone()
    }
}

/// Dashboard counters for the current pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total_employees: usize,
    pub departments: usize,
    pub present: usize,
    pub absent: usize,
    /// Whole percentage of employees marked Present.
    pub attendance_rate: u32,
    pub available: usize,
}

impl RosterSummary {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let total_employees = employees.len();
        let departments = employees
            .iter()
            .map(|e| e.department.trim())
            .filter(|d| !d.is_empty())
            .collect::<HashSet<_>>()
            .len();
        let present = employees
            .iter()
            .filter(|e| e.status == AttendanceStatus::Present)
            .count();
        let absent = employees
            .iter()
            .filter(|e| e.status == AttendanceStatus::Absent)
            .count();
        let available = employees
            .iter()
            .filter(|e| e.availability == Availability::Available)
            .count();

        let attendance_rate = if total_employees == 0 {
            0
        } else {
            (present as f64 / total_employees as f64 * 100.0).round() as u32
        };

        Self {
            total_employees,
            departments,
            present,
            absent,
            attendance_rate,
            available,
        }
    }
}

/// Employees whose name contains `term`, ignoring case, in pool order.
pub fn search_by_name<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, department: &str, status: AttendanceStatus) -> Employee {
        Employee {
            id: name.to_lowercase(),
            name: name.into(),
            department: department.into(),
            status,
            ..Employee::default()
        }
    }

    #[test]
    fn toggles_present_and_absent() {
        let present = employee("Ada", "Engineering", AttendanceStatus::Present);
        let absent = toggle_attendance(&present);
        assert_eq!(absent.status, AttendanceStatus::Absent);
        assert_eq!(present.status, AttendanceStatus::Present);
        assert_eq!(toggle_attendance(&absent).status, AttendanceStatus::Present);

        let remote = employee("Lin", "Sales", AttendanceStatus::Other("Remote".into()));
        assert_eq!(toggle_attendance(&remote).status, AttendanceStatus::Present);
    }

    #[test]
    fn summarizes_pool() {
        let mut pool = vec![
            employee("Ada", "Engineering", AttendanceStatus::Present),
            employee("Bo", "engineering ", AttendanceStatus::Absent),
            employee("Cy", "Engineering", AttendanceStatus::Present),
        ];
        pool[2].availability = Availability::Busy;

        let summary = RosterSummary::from_employees(&pool);
        assert_eq!(
            summary,
            RosterSummary {
                total_employees: 3,
                // department names are compared as entered
                departments: 2,
                present: 2,
                absent: 1,
                attendance_rate: 67,
                available: 2,
            }
        );
    }

    #[test]
    fn empty_pool_has_zero_rate() {
        let summary = RosterSummary::from_employees(&[]);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.attendance_rate, 0);
    }

    #[test]
    fn searches_names_case_insensitively() {
        let pool = vec![
            employee("Maria Lopez", "HR", AttendanceStatus::Present),
            employee("Omar", "HR", AttendanceStatus::Present),
            employee("Mariam", "Ops", AttendanceStatus::Absent),
        ];

        let hits: Vec<_> = search_by_name(&pool, "MARI").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(hits, vec!["Maria Lopez", "Mariam"]);
        assert_eq!(search_by_name(&pool, "  ").len(), 3);
        assert!(search_by_name(&pool, "zed").is_empty());
    }
}
