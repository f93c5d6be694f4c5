//! DebtPilot Core - debt payoff simulation engine.
//!
//! Given a set of debts and a monthly surplus, this crate amortizes every debt
//! month by month under a prioritization rule (snowball, avalanche or a custom
//! order), compares strategies and derives payoff milestones. It is a pure
//! computation: no I/O, no persistence, no shared state between calls.

pub mod constants;
pub mod debts;
pub mod errors;
pub mod payoff;
pub mod utils;

pub use debts::{DebtAccount, DebtAccountType};
pub use payoff::{
    compare, milestones, simulate, PayoffComparison, PayoffOrdering, PayoffService,
    PayoffServiceTrait, PayoffStrategy,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
