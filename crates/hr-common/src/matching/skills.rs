#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// 0.0 to 1.0; 1.0 when nothing is required.
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub has_requirements: bool,
    pub reason: String,
}

/// Split a comma separated skill list into lowercase, trimmed tokens.
/// Blank tokens (trailing commas, doubled commas) are dropped.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Check a comma separated requirement list against an employee's free-text
/// skills. A requirement counts as met when it appears anywhere in the
/// employee's skills, ignoring case ("react" matches "React Native").
pub fn check_skills(required: &str, employee_skills: &str) -> SkillMatchResult {
    let required_skills = parse_skill_list(required);
    if required_skills.is_empty() {
        return SkillMatchResult {
            match_percentage: 1.0,
            matched_skills: vec![],
            missing_skills: vec![],
            has_requirements: false,
            reason: "no skill requirement".to_string(),
        };
    }

    let haystack = employee_skills.to_lowercase();
    let (matched_skills, missing_skills): (Vec<_>, Vec<_>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| haystack.contains(skill.as_str()));

    let match_percentage = matched_skills.len() as f64 / required_skills.len() as f64;

    SkillMatchResult {
        reason: format!(
            "{}/{} skills matched ({:.0}%) (matched: {} / missing: {})",
            matched_skills.len(),
            required_skills.len(),
            match_percentage * 100.0,
            if matched_skills.is_empty() {
                "none".to_string()
            } else {
                matched_skills.join(", ")
            },
            if missing_skills.is_empty() {
                "none".to_string()
            } else {
                missing_skills.join(", ")
            }
        ),
        match_percentage,
        matched_skills,
        missing_skills,
        has_requirements: true,
    }
}
