//! European option payoffs.
//!
//! Payoffs are pure functions of the terminal underlying price, the strike
//! and the [`OptionKind`](pricer_core::types::OptionKind). They carry no
//! randomness and no state, so the Monte Carlo engine and any diagnostics
//! code evaluate exactly the same function.

pub mod payoff;

pub use payoff::{payoff, terminal_payoffs};
