use crate::*;
use rand::Rng;

/// One seat in a repeated game.
///
/// Owns the strategy's state and the payoff it earned last round. Neither
/// is ever visible to the other seat.
#[derive(Debug, Clone)]
pub struct Player {
    strategy: Strategy,
    state: State,
    feedback: Option<Payoff>,
}

impl From<Strategy> for Player {
    fn from(strategy: Strategy) -> Self {
        Self {
            strategy,
            state: State::Empty,
            feedback: None,
        }
    }
}

impl Player {
    /// Asks the strategy for this round's guess, threading its state through.
    pub fn act<R: Rng>(&mut self, round: usize, rng: &mut R) -> Result<Guess> {
        let state = std::mem::take(&mut self.state);
        let (guess, state) = self.strategy.step(round, self.feedback, state, rng)?;
        self.state = state;
        Ok(guess)
    }
    /// Hands back this player's own payoff for use next round.
    pub fn observe(&mut self, payoff: Payoff) {
        self.feedback = Some(payoff);
    }
    pub fn state(&self) -> &State {
        &self.state
    }
}
