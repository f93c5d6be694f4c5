//! Payoff module - debt payoff simulation, strategy comparison and milestones.

mod payoff_comparator;
mod payoff_milestones;
mod payoff_model;
mod payoff_service;
mod payoff_simulator;
mod payoff_traits;

pub use payoff_comparator::{compare, compare_with_options, savings_between};
pub use payoff_milestones::milestones;
pub use payoff_model::*;
pub use payoff_service::PayoffService;
pub use payoff_simulator::{simulate, simulate_with_options};
pub use payoff_traits::PayoffServiceTrait;
