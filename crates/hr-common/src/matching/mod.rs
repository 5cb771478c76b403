pub mod category;
pub mod eligibility;
pub mod scoring;
pub mod selector;
pub mod skills;
pub mod weights;
