use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything that happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub outcome: Outcome,
    pub guesses: [Guess; 2],
    pub payoffs: [Payoff; 2],
}

/// Round-by-round record of one repeated game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History(Vec<Round>);

impl History {
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }
    pub fn push(&mut self, round: Round) {
        self.0.push(round);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }
    /// Payoff pairs indexed by round.
    pub fn payoffs(&self) -> Vec<(Payoff, Payoff)> {
        self.0
            .iter()
            .map(|r| (r.payoffs[0], r.payoffs[1]))
            .collect()
    }
    /// One player's payoff sequence.
    ///
    /// # Panics
    ///
    /// If `player` is not 0 or 1.
    pub fn scores(&self, player: usize) -> Vec<Payoff> {
        assert!(player < 2, "two players per game, got seat {}", player);
        self.0.iter().map(|r| r.payoffs[player]).collect()
    }
    /// One player's guess sequence.
    ///
    /// # Panics
    ///
    /// If `player` is not 0 or 1.
    pub fn guesses(&self, player: usize) -> Vec<Guess> {
        assert!(player < 2, "two players per game, got seat {}", player);
        self.0.iter().map(|r| r.guesses[player]).collect()
    }
    /// Summed payoffs of both players.
    pub fn totals(&self) -> (Payoff, Payoff) {
        self.0.iter().fold((0.0, 0.0), |(a, b), r| {
            (a + r.payoffs[0], b + r.payoffs[1])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> History {
        let mut history = History::with_capacity(3);
        for (outcome, guesses) in [
            (Outcome::Heads, [1.0, 0.5]),
            (Outcome::Tails, [1.0, 0.5]),
            (Outcome::Heads, [0.0, 0.5]),
        ] {
            let payoffs = guesses.map(|g| ScoringRule::Quadratic.score(g, outcome).unwrap());
            history.push(Round {
                outcome,
                guesses,
                payoffs,
            });
        }
        history
    }

    #[test]
    fn sequences_follow_round_order() {
        let history = sample();
        assert_eq!(history.len(), 3);
        assert_eq!(history.scores(0), vec![0.0, -1.0, -1.0]);
        assert_eq!(history.guesses(1), vec![0.5; 3]);
        assert_eq!(history.payoffs()[1], (-1.0, -0.25));
        assert_eq!(history.totals(), (-2.0, -0.75));
    }
    #[test]
    #[should_panic(expected = "two players per game")]
    fn third_seat_panics() {
        sample().scores(2);
    }
    #[test]
    #[should_panic(expected = "two players per game")]
    fn third_seat_panics_even_when_empty() {
        History::default().guesses(2);
    }
    #[test]
    fn serializes_for_reporting() {
        let json = serde_json::to_value(sample()).unwrap();
        let rounds = json.as_array().unwrap();
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0]["outcome"], "Heads");
        assert_eq!(rounds[2]["payoffs"][1], -0.25);
    }
}
