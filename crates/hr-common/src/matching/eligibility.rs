use crate::{Employee, TeamCriteria};

/// Outcome of a single eligibility check.
#[derive(Debug, Clone, PartialEq)]
pub enum EligibilityDecision {
    /// Hard exclusion: the employee is never scored.
    Excluded { reason: String },
    Pass,
}

impl EligibilityDecision {
    pub fn is_excluded(&self) -> bool {
        matches!(self, EligibilityDecision::Excluded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            EligibilityDecision::Excluded { reason } => Some(reason),
            EligibilityDecision::Pass => None,
        }
    }
}

/// All checks for one employee, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityResult {
    pub is_excluded: bool,
    pub decisions: Vec<(&'static str, EligibilityDecision)>,
}

impl EligibilityResult {
    pub fn new(decisions: Vec<(&'static str, EligibilityDecision)>) -> Self {
        let is_excluded = decisions.iter().any(|(_, d)| d.is_excluded());
        Self {
            is_excluded,
            decisions,
        }
    }

    /// "[check] reason" for each failed check.
    pub fn exclusion_reasons(&self) -> Vec<String> {
        self.decisions
            .iter()
            .filter_map(|(name, d)| d.reason().map(|r| format!("[{}] {}", name, r)))
            .collect()
    }
}

pub fn run_eligibility_checks(employee: &Employee, criteria: &TeamCriteria) -> EligibilityResult {
    EligibilityResult::new(vec![
        ("availability", check_availability(employee)),
        ("experience", check_min_experience(employee, criteria)),
        ("category", check_category(employee, criteria)),
    ])
}

pub fn is_eligible(employee: &Employee, criteria: &TeamCriteria) -> bool {
    !run_eligibility_checks(employee, criteria).is_excluded
}

/// Eligible employees in pool order.
pub fn filter_eligible<'a>(employees: &'a [Employee], criteria: &TeamCriteria) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| is_eligible(employee, criteria))
        .collect()
}

fn check_availability(employee: &Employee) -> EligibilityDecision {
    if employee.availability.blocks_assignment() {
        EligibilityDecision::Excluded {
            reason: format!("availability_blocked: {}", employee.availability.as_str()),
        }
    } else {
        EligibilityDecision::Pass
    }
}

fn check_min_experience(employee: &Employee, criteria: &TeamCriteria) -> EligibilityDecision {
    if criteria.min_experience > 0.0 && employee.experience < criteria.min_experience {
        EligibilityDecision::Excluded {
            reason: format!(
                "experience_insufficient: {:.1}y < {:.1}y",
                employee.experience, criteria.min_experience
            ),
        }
    } else {
        EligibilityDecision::Pass
    }
}

/// Exact tier match only; adjacency earns partial credit when scoring but
/// never admits a candidate here.
fn check_category(employee: &Employee, criteria: &TeamCriteria) -> EligibilityDecision {
    match criteria.employee_category {
        Some(required) => {
            let actual = employee.experience_category();
            if actual == required {
                EligibilityDecision::Pass
            } else {
                EligibilityDecision::Excluded {
                    reason: format!("category_mismatch: required={required}, employee={actual}"),
                }
            }
        }
        None => EligibilityDecision::Pass,
    }
}
