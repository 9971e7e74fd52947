use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Realized side of the coin for one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// Event did not happen (0).
    Tails,
    /// Event happened (1).
    Heads,
}

impl Outcome {
    /// Flips a coin that lands heads with probability `p_true`.
    /// Consumes exactly one draw from `rng`.
    pub fn flip<R: Rng>(rng: &mut R, p_true: Probability) -> Self {
        Self::from(rng.random::<f64>() < p_true)
    }
    /// Numeric value of the event, 0.0 or 1.0.
    pub fn value(&self) -> f64 {
        match self {
            Self::Tails => 0.0,
            Self::Heads => 1.0,
        }
    }
}

impl From<bool> for Outcome {
    fn from(heads: bool) -> Self {
        match heads {
            true => Self::Heads,
            false => Self::Tails,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Tails => 0,
            Outcome::Heads => 1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn certain_coins_never_flip() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        assert!((0..1000).all(|_| Outcome::flip(rng, 1.0) == Outcome::Heads));
        assert!((0..1000).all(|_| Outcome::flip(rng, 0.0) == Outcome::Tails));
    }
    #[test]
    fn biased_coin_frequency() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let heads = (0..20_000)
            .map(|_| Outcome::flip(rng, 0.63))
            .filter(|o| *o == Outcome::Heads)
            .count();
        let freq = heads as f64 / 20_000.0;
        assert!((freq - 0.63).abs() < 0.02, "heads frequency {:.4}", freq);
    }
}
