/// Points available on a 100 point match score.
pub const MAX_SCORE: f64 = 100.0;

/// Team formation weights. Availability and performance together make up the
/// fifth component (up to 20 points), so the components add up to 110 and the
/// total is capped at [`MAX_SCORE`].
pub const TEAM_WEIGHTS: Weights = Weights {
    experience: 30.0,
    category: 20.0,
    primary_skills: 30.0,
    secondary_skills: 10.0,
    availability: 10.0,
    performance: 10.0,
};

/// Share of the category weight granted one tier away from the requested one.
pub const ADJACENT_CATEGORY_CREDIT: f64 = 0.5;

/// Share of the availability weight granted to `Busy` employees.
pub const BUSY_AVAILABILITY_CREDIT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub experience: f64,
    pub category: f64,
    pub primary_skills: f64,
    pub secondary_skills: f64,
    pub availability: f64,
    pub performance: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.experience
            + self.category
            + self.primary_skills
            + self.secondary_skills
            + self.availability
            + self.performance
    }

    pub fn availability_and_performance(&self) -> f64 {
        self.availability + self.performance
    }
}
