pub mod assignment;
pub mod criterion;
pub mod hackathon;
pub mod project;
pub mod score;

pub use assignment::{JudgeAssignment, JudgeRole};
pub use criterion::ScoringCriterion;
pub use hackathon::Hackathon;
pub use project::Project;
pub use score::Score;
