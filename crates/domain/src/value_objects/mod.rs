//! Value objects for the RunDay domain

mod score;

pub use score::{InvalidScore, ScoreGrade, SuitabilityScore};
