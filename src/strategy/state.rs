use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Private memory of one strategy for one player over one run.
///
/// Threaded by value through every [`Strategy::step`] call. A run starts
/// every player at [`State::Empty`] and drops the state when it ends, so
/// nothing learned in one game leaks into another.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum State {
    /// Nothing stepped yet. Constant and random strategies never leave it.
    #[default]
    Empty,
    Frequentist {
        heads: u64,
        tails: u64,
        last: Guess,
    },
    /// Beta pseudo-counts.
    Bayesian {
        alpha: f64,
        beta: f64,
        last: Guess,
    },
    Smoothing {
        estimate: Probability,
        last: Guess,
    },
}

impl State {
    /// The guess that earned the next payoff, if this state tracks one.
    pub fn last(&self) -> Option<Guess> {
        match self {
            Self::Empty => None,
            Self::Frequentist { last, .. } => Some(*last),
            Self::Bayesian { last, .. } => Some(*last),
            Self::Smoothing { last, .. } => Some(*last),
        }
    }
    /// Outcomes decoded so far. Only counting states know this.
    pub fn observations(&self) -> Option<u64> {
        match self {
            Self::Frequentist { heads, tails, .. } => Some(heads + tails),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Frequentist { heads, tails, .. } => write!(f, "frequentist({}H {}T)", heads, tails),
            Self::Bayesian { alpha, beta, .. } => write!(f, "bayesian(α={} β={})", alpha, beta),
            Self::Smoothing { estimate, .. } => write!(f, "smoothing({:.4})", estimate),
        }
    }
}
