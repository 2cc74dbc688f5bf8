pub mod engine;
pub mod types;

pub use engine::{client_tier, evaluate, work_tier};
pub use types::{
    AssessmentScores, Decision, DecisionResult, ScreeningAnswers, Tier, TierLabel,
};
