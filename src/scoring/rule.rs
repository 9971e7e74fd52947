use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Strictly proper scoring rules for binary forecasts.
///
/// Each rule maps a guess and the realized outcome to a payoff where higher
/// is better. Reporting the true heads probability uniquely maximizes the
/// expected payoff under every rule.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Negative Brier loss, `-(g - o)²`. Range [-1, 0].
    Quadratic,
    /// `ln g` on heads, `ln(1 - g)` on tails, with `g` clamped by [`LOG_EPSILON`].
    Logarithmic,
    /// Guess mass on the outcome over the guess vector's L2 norm. Range [0, 1].
    Spherical,
}

impl ScoringRule {
    pub const ALL: [Self; 3] = [Self::Quadratic, Self::Logarithmic, Self::Spherical];

    /// Scores a single guess against the realized outcome.
    pub fn score(&self, guess: Guess, outcome: Outcome) -> Result<Payoff> {
        if !(0.0..=1.0).contains(&guess) {
            return Err(Error::InvalidGuess(guess));
        }
        Ok(match self {
            Self::Quadratic => Self::quadratic(guess, outcome),
            Self::Logarithmic => Self::logarithmic(guess, outcome),
            Self::Spherical => Self::spherical(guess, outcome),
        })
    }

    /// Expected payoff of reporting `guess` when heads has probability `q`.
    pub fn expected(&self, q: Probability, guess: Guess) -> Result<Payoff> {
        let heads = self.score(guess, Outcome::Heads)?;
        let tails = self.score(guess, Outcome::Tails)?;
        Ok(q * heads + (1.0 - q) * tails)
    }

    fn quadratic(guess: Guess, outcome: Outcome) -> Payoff {
        -(guess - outcome.value()).powi(2)
    }

    fn logarithmic(guess: Guess, outcome: Outcome) -> Payoff {
        let guess = guess.clamp(LOG_EPSILON, 1.0 - LOG_EPSILON);
        match outcome {
            Outcome::Heads => guess.ln(),
            Outcome::Tails => (1.0 - guess).ln(),
        }
    }

    fn spherical(guess: Guess, outcome: Outcome) -> Payoff {
        let norm = (guess * guess + (1.0 - guess) * (1.0 - guess)).sqrt();
        if norm < SPHERICAL_DEGENERACY {
            return match outcome {
                Outcome::Tails if guess < SPHERICAL_EXTREME => 1.0,
                Outcome::Heads if guess > 1.0 - SPHERICAL_EXTREME => 1.0,
                _ => 0.0,
            };
        }
        match outcome {
            Outcome::Heads => guess / norm,
            Outcome::Tails => (1.0 - guess) / norm,
        }
    }
}

impl TryFrom<&str> for ScoringRule {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "quadratic" | "brier" => Ok(Self::Quadratic),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            "spherical" => Ok(Self::Spherical),
            other => Err(anyhow::anyhow!("unknown scoring rule: {}", other)),
        }
    }
}

impl std::fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quadratic => write!(f, "quadratic"),
            Self::Logarithmic => write!(f, "logarithmic"),
            Self::Spherical => write!(f, "spherical"),
        }
    }
}
