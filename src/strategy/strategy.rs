use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// A forecasting rule for one player.
///
/// Strategies are pure state machines. Each round they receive the round
/// index, their own payoff from the previous round and the state they
/// returned last time, and emit a guess together with the next state.
/// Adaptive strategies decode the previous outcome with
/// [`Decoded::from_feedback`] against the guess stored in their state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Always forecast heads with certainty.
    AlwaysHeads,
    /// Always forecast tails with certainty.
    AlwaysTails,
    /// Uniform guess each round, ignoring feedback.
    Random,
    /// Empirical heads frequency over decoded outcomes.
    Frequentist,
    /// Beta-Binomial posterior mean, starting from Beta(alpha, beta).
    Bayesian { alpha: f64, beta: f64 },
    /// Exponentially smoothed heads estimate, weighting new outcomes by `alpha`.
    Smoothing { alpha: Probability },
}

impl Strategy {
    pub const ALL: [Self; 6] = [
        Self::AlwaysHeads,
        Self::AlwaysTails,
        Self::Random,
        Self::Frequentist,
        Self::bayesian(),
        Self::smoothing(),
    ];

    /// Bayesian updating from the uniform prior.
    pub const fn bayesian() -> Self {
        Self::Bayesian {
            alpha: BETA_PRIOR.0,
            beta: BETA_PRIOR.1,
        }
    }
    /// Exponential smoothing with the default weight.
    pub const fn smoothing() -> Self {
        Self::Smoothing {
            alpha: DEFAULT_SMOOTHING,
        }
    }

    /// Whether this strategy learns from feedback.
    pub fn is_adaptive(&self) -> bool {
        match self {
            Self::AlwaysHeads | Self::AlwaysTails | Self::Random => false,
            Self::Frequentist | Self::Bayesian { .. } | Self::Smoothing { .. } => true,
        }
    }

    /// Rejects parameters that would emit guesses outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Bayesian { alpha, beta } if !(alpha > 0.0 && beta > 0.0) => {
                Err(Error::Configuration(format!(
                    "beta prior must be positive, got ({}, {})",
                    alpha, beta
                )))
            }
            Self::Bayesian { alpha, beta } if !(alpha.is_finite() && beta.is_finite()) => {
                Err(Error::Configuration(format!(
                    "beta prior must be finite, got ({}, {})",
                    alpha, beta
                )))
            }
            Self::Smoothing { alpha } if !(0.0..=1.0).contains(&alpha) => Err(
                Error::Configuration(format!("smoothing weight {} outside [0, 1]", alpha)),
            ),
            _ => Ok(()),
        }
    }

    /// Advances the state machine by one round.
    ///
    /// `feedback` is this player's payoff from round `round - 1` and is
    /// ignored at round 0. Non-adaptive strategies return `state` untouched.
    pub fn step<R: Rng>(
        &self,
        round: usize,
        feedback: Option<Payoff>,
        state: State,
        rng: &mut R,
    ) -> Result<(Guess, State)> {
        match *self {
            Self::AlwaysHeads => Ok((1.0, state)),
            Self::AlwaysTails => Ok((0.0, state)),
            Self::Random => Ok((rng.random::<Guess>(), state)),
            Self::Frequentist => {
                let (mut heads, mut tails, last) = match state {
                    State::Empty => (0, 0, UNINFORMED_GUESS),
                    State::Frequentist { heads, tails, last } => (heads, tails, last),
                    other => return Err(self.mismatch(other)),
                };
                match Self::observe(round, feedback, last) {
                    Some(Outcome::Heads) => heads += 1,
                    Some(Outcome::Tails) => tails += 1,
                    None => {}
                }
                let guess = match heads + tails {
                    0 => UNINFORMED_GUESS,
                    n => heads as Guess / n as Guess,
                };
                Ok((guess, State::Frequentist { heads, tails, last: guess }))
            }
            Self::Bayesian { alpha, beta } => {
                let (mut alpha, mut beta, last) = match state {
                    State::Empty => (alpha, beta, UNINFORMED_GUESS),
                    State::Bayesian { alpha, beta, last } => (alpha, beta, last),
                    other => return Err(self.mismatch(other)),
                };
                match Self::observe(round, feedback, last) {
                    Some(Outcome::Heads) => alpha += 1.0,
                    Some(Outcome::Tails) => beta += 1.0,
                    None => {}
                }
                // posterior mean alpha / (alpha + beta), without summing the counts
                let guess = 1.0 / (1.0 + beta / alpha);
                Ok((guess, State::Bayesian { alpha, beta, last: guess }))
            }
            Self::Smoothing { alpha } => {
                let (mut estimate, last) = match state {
                    State::Empty => (UNINFORMED_GUESS, UNINFORMED_GUESS),
                    State::Smoothing { estimate, last } => (estimate, last),
                    other => return Err(self.mismatch(other)),
                };
                if let Some(outcome) = Self::observe(round, feedback, last) {
                    estimate = alpha * outcome.value() + (1.0 - alpha) * estimate;
                }
                Ok((estimate, State::Smoothing { estimate, last: estimate }))
            }
        }
    }

    /// Decoded outcome of the previous round, if there was one and it was legible.
    fn observe(round: usize, feedback: Option<Payoff>, last: Guess) -> Option<Outcome> {
        feedback
            .filter(|_| round > 0)
            .and_then(|payoff| Decoded::from_feedback(last, payoff).outcome())
    }

    fn mismatch(&self, state: State) -> Error {
        Error::StateMismatch {
            strategy: self.to_string(),
            state: state.to_string(),
        }
    }
}

/// Accepts `smoothing:<alpha>` and `bayesian:<alpha>,<beta>` for non-default parameters.
impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        let (name, args) = s.split_once(':').unwrap_or((s.as_str(), ""));
        let strategy = match (name, args) {
            ("heads", "") => Self::AlwaysHeads,
            ("tails", "") => Self::AlwaysTails,
            ("random", "") => Self::Random,
            ("frequentist", "") => Self::Frequentist,
            ("bayesian", "") => Self::bayesian(),
            ("bayesian", args) => match args.split_once(',') {
                Some((alpha, beta)) => Self::Bayesian {
                    alpha: alpha.trim().parse()?,
                    beta: beta.trim().parse()?,
                },
                None => return Err(anyhow::anyhow!("bayesian prior needs alpha,beta")),
            },
            ("smoothing", "") => Self::smoothing(),
            ("smoothing", alpha) => Self::Smoothing {
                alpha: alpha.trim().parse()?,
            },
            _ => return Err(anyhow::anyhow!("unknown strategy: {}", s)),
        };
        strategy.validate()?;
        Ok(strategy)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlwaysHeads => write!(f, "heads"),
            Self::AlwaysTails => write!(f, "tails"),
            Self::Random => write!(f, "random"),
            Self::Frequentist => write!(f, "frequentist"),
            Self::Bayesian { alpha, beta } => write!(f, "bayesian:{},{}", alpha, beta),
            Self::Smoothing { alpha } => write!(f, "smoothing:{}", alpha),
        }
    }
}
