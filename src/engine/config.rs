use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Run parameters shared by single games and Monte Carlo batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub p_true: Probability,
    pub n_rounds: usize,
    pub n_sims: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            p_true: DEFAULT_P_TRUE,
            n_rounds: DEFAULT_N_ROUNDS,
            n_sims: DEFAULT_N_SIMS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p_true) {
            return Err(Error::Configuration(format!(
                "p_true {} outside [0, 1]",
                self.p_true
            )));
        }
        if self.n_rounds == 0 {
            return Err(Error::Configuration("n_rounds must be positive".into()));
        }
        if self.n_sims == 0 {
            return Err(Error::Configuration("n_sims must be positive".into()));
        }
        Ok(())
    }
    /// A single game between two strategies under these parameters.
    pub fn simulation(&self, a: Strategy, b: Strategy, rule: ScoringRule) -> Result<Simulation> {
        self.validate()?;
        Simulation::new(a, b, rule, self.p_true, self.n_rounds)
    }
    /// A batch of `n_sims` seeded games under these parameters.
    pub fn monte_carlo(&self, a: Strategy, b: Strategy, rule: ScoringRule) -> Result<MonteCarlo> {
        self.validate()?;
        MonteCarlo::new(a, b, rule, self.p_true, self.n_rounds, self.n_sims)
    }
}
