use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One repeated game between two forecasters.
///
/// Each round both players guess before the coin is flipped, a single
/// shared coin decides the outcome, and each player learns only its own
/// payoff. The run owns its RNG, which drives the coin and any random
/// strategy, so a seeded run is fully reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    strategies: [Strategy; 2],
    rule: ScoringRule,
    p_true: Probability,
    n_rounds: usize,
}

impl Simulation {
    pub fn new(
        a: Strategy,
        b: Strategy,
        rule: ScoringRule,
        p_true: Probability,
        n_rounds: usize,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&p_true) {
            return Err(Error::Configuration(format!(
                "p_true {} outside [0, 1]",
                p_true
            )));
        }
        if n_rounds == 0 {
            return Err(Error::Configuration("n_rounds must be positive".into()));
        }
        a.validate()?;
        b.validate()?;
        Ok(Self {
            strategies: [a, b],
            rule,
            p_true,
            n_rounds,
        })
    }

    pub fn strategies(&self) -> [Strategy; 2] {
        self.strategies
    }
    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Plays all rounds from fresh player state.
    /// Without a seed the RNG is drawn from the operating system.
    pub fn run(&self, seed: Option<u64>) -> Result<History> {
        let ref mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut players = self.strategies.map(Player::from);
        let mut history = History::with_capacity(self.n_rounds);
        for round in 0..self.n_rounds {
            let guesses = [players[0].act(round, rng)?, players[1].act(round, rng)?];
            let outcome = Outcome::flip(rng, self.p_true);
            let payoffs = [
                self.rule.score(guesses[0], outcome)?,
                self.rule.score(guesses[1], outcome)?,
            ];
            players[0].observe(payoffs[0]);
            players[1].observe(payoffs[1]);
            history.push(Round {
                outcome,
                guesses,
                payoffs,
            });
        }
        let (a, b) = history.totals();
        log::debug!(
            "{:<12} vs {:<12} {:<12} seed {:<8} totals {:>+10.3} {:>+10.3}",
            self.strategies[0].to_string(),
            self.strategies[1].to_string(),
            self.rule.to_string(),
            seed.map_or("none".to_string(), |s| s.to_string()),
            a,
            b,
        );
        Ok(history)
    }
}
