//! Call and put payoff evaluation.
//!
//! - Call: `max(S_T - K, 0)`
//! - Put: `max(K - S_T, 0)`
//!
//! Unlike a smoothed payoff, these are the exact kinked functions, so a
//! Monte Carlo mean of them is an unbiased estimator of the option's
//! undiscounted value.

use pricer_core::types::OptionKind;

/// Evaluates the payoff of a single terminal price.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::instruments::payoff;
///
/// assert_eq!(payoff(OptionKind::Call, 110.0, 100.0), 10.0);
/// assert_eq!(payoff(OptionKind::Put, 110.0, 100.0), 0.0);
/// ```
#[inline]
pub fn payoff(kind: OptionKind, terminal: f64, strike: f64) -> f64 {
    match kind {
        OptionKind::Call => (terminal - strike).max(0.0),
        OptionKind::Put => (strike - terminal).max(0.0),
    }
}

/// Maps a terminal-price vector to its payoff vector.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::instruments::terminal_payoffs;
///
/// let payoffs = terminal_payoffs(OptionKind::Put, &[90.0, 100.0, 120.0], 100.0);
/// assert_eq!(payoffs, vec![10.0, 0.0, 0.0]);
/// ```
pub fn terminal_payoffs(kind: OptionKind, terminals: &[f64], strike: f64) -> Vec<f64> {
    terminals
        .iter()
        .map(|&s| payoff(kind, s, strike))
        .collect()
}
