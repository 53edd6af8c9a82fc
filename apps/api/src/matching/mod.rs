// Recommendation Engine
// Implements: match scoring, reach/target/safety classification, gap notes,
// the per-profile recommendation run and the starter milestone checklist.

pub mod category;
pub mod config;
pub mod engine;
pub mod handlers;
pub mod metrics;
pub mod milestones;
pub mod rationale;
pub mod score;
