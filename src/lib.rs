//! Repeated forecasting games under partial feedback.
//!
//! Two players forecast the probability of a biased coin landing heads.
//! Each round they observe only their own payoff under a strictly proper
//! scoring rule, never the coin itself, and adaptive strategies decode the
//! hidden outcome from that payoff alone.
//!
//! # Module Structure
//!
//! - `scoring` — Quadratic, logarithmic and spherical scoring rules
//! - `decode` — Outcome inference from an opaque payoff
//! - `strategy` — Forecasting strategies and their per-run state
//! - `engine` — Single repeated games and Monte Carlo batches
mod decode;
mod engine;
mod error;
mod scoring;
mod strategy;

pub use decode::*;
pub use engine::*;
pub use error::*;
pub use scoring::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Forecast probability that the coin lands heads, in [0, 1].
pub type Guess = f64;
/// Single-round score. Higher is better under every rule.
pub type Payoff = f64;
/// Coin bias and smoothing weights.
pub type Probability = f64;

// ============================================================================
// SCORING RULES
// ============================================================================
/// Clamp applied to guesses before taking logarithms.
pub const LOG_EPSILON: Probability = 1e-12;
/// Spherical denominators below this fall back to case analysis.
pub const SPHERICAL_DEGENERACY: f64 = 1e-15;
/// Distance from 0 or 1 at which a degenerate spherical guess counts as extreme.
pub const SPHERICAL_EXTREME: Probability = 1e-8;

// ============================================================================
// STRATEGY PRIORS
// ============================================================================
/// Uninformative forecast before any outcome has been decoded.
pub const UNINFORMED_GUESS: Guess = 0.5;
/// Beta(1, 1) pseudo-counts, the uniform prior.
pub const BETA_PRIOR: (f64, f64) = (1.0, 1.0);
/// Weight of the newest decoded outcome in exponential smoothing.
pub const DEFAULT_SMOOTHING: Probability = 0.1;

// ============================================================================
// SIMULATION DEFAULTS
// ============================================================================
/// Probability that the coin lands heads.
pub const DEFAULT_P_TRUE: Probability = 0.63;
/// Rounds per repeated game.
pub const DEFAULT_N_ROUNDS: usize = 1000;
/// Independent games per Monte Carlo batch.
pub const DEFAULT_N_SIMS: usize = 20;

// ============================================================================
// ENTRY POINTS
// ============================================================================
/// Plays one repeated game and returns its round-by-round history.
pub fn run_single_simulation(
    strategy1: Strategy,
    strategy2: Strategy,
    rule: ScoringRule,
    p_true: Probability,
    n_rounds: usize,
    seed: Option<u64>,
) -> Result<History> {
    Simulation::new(strategy1, strategy2, rule, p_true, n_rounds)?.run(seed)
}

/// Plays `n_sims` games seeded `0..n_sims` and returns each player's mean total score.
pub fn run_multiple_simulations(
    strategy1: Strategy,
    strategy2: Strategy,
    rule: ScoringRule,
    p_true: Probability,
    n_rounds: usize,
    n_sims: usize,
) -> Result<(Payoff, Payoff)> {
    MonteCarlo::new(strategy1, strategy2, rule, p_true, n_rounds, n_sims)?
        .run()
        .map(|tally| tally.means())
}
