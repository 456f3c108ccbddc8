pub mod rules;
pub mod params;
pub mod classifier;

pub use classifier::*;
pub use rules::{matching_rule, Rule, RULES};
