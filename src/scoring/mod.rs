//! Weighted domain scoring over chart facts and yogas.

pub mod config;
pub mod engine;
pub mod strength;
pub mod validation;

pub use config::*;
pub use engine::{
    score, score_with, score_with_facts, yoga_net, CompositeScore, PenaltyTerm, ScoreComponent,
    ScoreGrade,
};
pub use strength::{effective_planet_strength, house_strength};
pub use validation::validate_domain_config;
