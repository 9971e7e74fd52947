//! Outcome inference from partial feedback.
//!
//! Players never see the coin. An adaptive strategy remembers the guess it
//! played and compares the payoff it received against the payoffs that guess
//! would have earned under each outcome. The hypotheticals always use the
//! quadratic formula `-(g - o)²`, whichever rule actually scored the round,
//! so decoding is exact under [`ScoringRule::Quadratic`] and approximate
//! otherwise.
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Best reading of the previous round's hidden outcome.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoded {
    Tails,
    Heads,
    /// Both hypotheticals are equally close. Strategies skip their update.
    Ambiguous,
}

impl Decoded {
    /// Reconstructs the outcome behind `payoff`, given the guess that earned it.
    pub fn from_feedback(guess: Guess, payoff: Payoff) -> Self {
        let if_tails = -(guess - 0.0).powi(2);
        let if_heads = -(guess - 1.0).powi(2);
        let to_tails = (payoff - if_tails).abs();
        let to_heads = (payoff - if_heads).abs();
        if to_tails < to_heads {
            Self::Tails
        } else if to_heads < to_tails {
            Self::Heads
        } else {
            Self::Ambiguous
        }
    }
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Tails => Some(Outcome::Tails),
            Self::Heads => Some(Outcome::Heads),
            Self::Ambiguous => None,
        }
    }
}

impl From<Outcome> for Decoded {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Tails => Self::Tails,
            Outcome::Heads => Self::Heads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_feedback_decodes_exactly() {
        for i in (0..=100).filter(|i| *i != 50) {
            let guess = i as Guess / 100.0;
            for outcome in [Outcome::Heads, Outcome::Tails] {
                let payoff = ScoringRule::Quadratic.score(guess, outcome).unwrap();
                assert_eq!(
                    Decoded::from_feedback(guess, payoff),
                    Decoded::from(outcome),
                    "guess {:.2}",
                    guess
                );
            }
        }
    }
    #[test]
    fn coin_flip_guess_is_ambiguous() {
        for outcome in [Outcome::Heads, Outcome::Tails] {
            let payoff = ScoringRule::Quadratic.score(0.5, outcome).unwrap();
            assert_eq!(Decoded::from_feedback(0.5, payoff), Decoded::Ambiguous);
            assert_eq!(Decoded::from_feedback(0.5, payoff).outcome(), None);
        }
    }
    #[test]
    fn boundary_guesses_decode() {
        assert_eq!(Decoded::from_feedback(1.0, 0.0), Decoded::Heads);
        assert_eq!(Decoded::from_feedback(1.0, -1.0), Decoded::Tails);
        assert_eq!(Decoded::from_feedback(0.0, 0.0), Decoded::Tails);
        assert_eq!(Decoded::from_feedback(0.0, -1.0), Decoded::Heads);
    }
    #[test]
    fn decoding_ignores_the_active_rule() {
        // both log payoffs at 0.6 sit nearer the quadratic tails hypothetical
        let guess = 0.6;
        for outcome in [Outcome::Heads, Outcome::Tails] {
            let payoff = ScoringRule::Logarithmic.score(guess, outcome).unwrap();
            assert_eq!(Decoded::from_feedback(guess, payoff), Decoded::Tails);
        }
        // both spherical payoffs are positive, so they sit nearer heads
        for outcome in [Outcome::Heads, Outcome::Tails] {
            let payoff = ScoringRule::Spherical.score(guess, outcome).unwrap();
            assert_eq!(Decoded::from_feedback(guess, payoff), Decoded::Heads);
        }
    }
}
