use crate::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Independent repetitions of one [`Simulation`].
///
/// Run `i` is seeded with `i`, so batches are deterministic and no two runs
/// share a random stream. Every run starts its players from empty state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarlo {
    simulation: Simulation,
    n_sims: usize,
}

impl MonteCarlo {
    pub fn new(
        a: Strategy,
        b: Strategy,
        rule: ScoringRule,
        p_true: Probability,
        n_rounds: usize,
        n_sims: usize,
    ) -> Result<Self> {
        if n_sims == 0 {
            return Err(Error::Configuration("n_sims must be positive".into()));
        }
        Ok(Self {
            simulation: Simulation::new(a, b, rule, p_true, n_rounds)?,
            n_sims,
        })
    }

    /// Plays every run and collects each player's total score, in seed order.
    pub fn run(&self) -> Result<Tally> {
        let tally = Tally::from(self.totals()?);
        let [a, b] = self.simulation.strategies();
        let (ma, mb) = tally.means();
        let (sa, sb) = tally.stdevs();
        log::info!(
            "{:<12} vs {:<12} {:<12} {:>4} runs  mean {:>+10.3} ± {:<8.3} {:>+10.3} ± {:<8.3}",
            a.to_string(),
            b.to_string(),
            self.simulation.rule().to_string(),
            tally.runs(),
            ma,
            sa,
            mb,
            sb,
        );
        Ok(tally)
    }

    #[cfg(not(feature = "parallel"))]
    fn totals(&self) -> Result<Vec<(Payoff, Payoff)>> {
        (0..self.n_sims as u64)
            .map(|seed| self.simulation.run(Some(seed)).map(|h| h.totals()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn totals(&self) -> Result<Vec<(Payoff, Payoff)>> {
        (0..self.n_sims as u64)
            .into_par_iter()
            .map(|seed| self.simulation.run(Some(seed)).map(|h| h.totals()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_average_exactly() {
        let (a, b) = run_multiple_simulations(
            Strategy::AlwaysHeads,
            Strategy::AlwaysTails,
            ScoringRule::Quadratic,
            1.0,
            10,
            4,
        )
        .unwrap();
        assert_eq!((a, b), (0.0, -10.0));
    }
    #[test]
    fn averages_seeded_runs() {
        let batch = MonteCarlo::new(
            Strategy::Random,
            Strategy::AlwaysHeads,
            ScoringRule::Spherical,
            0.63,
            100,
            6,
        )
        .unwrap();
        let tally = batch.run().unwrap();
        let expected = (0..6)
            .map(|seed| {
                Simulation::new(Strategy::Random, Strategy::AlwaysHeads, ScoringRule::Spherical, 0.63, 100)
                    .unwrap()
                    .run(Some(seed))
                    .unwrap()
                    .totals()
            })
            .collect::<Vec<_>>();
        assert_eq!(tally.totals(), expected.as_slice());
        assert_eq!(tally, batch.run().unwrap());
    }
    #[test]
    fn learners_restart_fresh_each_run() {
        let learner = Strategy::Bayesian { alpha: 1.5, beta: 1.0 };
        let simulation =
            Simulation::new(learner, Strategy::Frequentist, ScoringRule::Quadratic, 0.63, 200).unwrap();
        let batch =
            MonteCarlo::new(learner, Strategy::Frequentist, ScoringRule::Quadratic, 0.63, 200, 4).unwrap();
        let histories = (0..4)
            .map(|seed| simulation.run(Some(seed)).unwrap())
            .collect::<Vec<_>>();
        for history in &histories {
            let guesses = history.guesses(0);
            assert!((guesses[0] - 0.6).abs() < 1e-12);
            assert!(guesses.iter().any(|g| *g != guesses[0]), "learner never moved");
        }
        let expected = histories.iter().map(History::totals).collect::<Vec<_>>();
        let tally = batch.run().unwrap();
        assert_eq!(tally.totals(), expected.as_slice());
        assert_eq!(tally, batch.run().unwrap());
    }
    #[test]
    fn defaults_drive_a_batch() {
        let config = Config {
            n_rounds: 50,
            ..Config::default()
        };
        let tally = config
            .monte_carlo(Strategy::bayesian(), Strategy::smoothing(), ScoringRule::Logarithmic)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(tally.runs(), DEFAULT_N_SIMS);
    }
    #[test]
    fn truthful_forecaster_beats_the_extremes() {
        let batch = |s: Strategy| {
            MonteCarlo::new(
                Strategy::Bayesian { alpha: 1.5, beta: 1.0 },
                s,
                ScoringRule::Quadratic,
                0.63,
                2000,
                5,
            )
            .and_then(|mc| mc.run())
            .map(|tally| tally.means())
            .unwrap()
        };
        for opponent in [Strategy::AlwaysHeads, Strategy::AlwaysTails, Strategy::Random] {
            let (learner, other) = batch(opponent);
            assert!(learner > other, "{} scored {:.2} vs {:.2}", opponent, learner, other);
        }
    }
    #[test]
    fn rejects_empty_batches() {
        assert!(matches!(
            MonteCarlo::new(Strategy::Random, Strategy::Random, ScoringRule::Quadratic, 0.5, 10, 0),
            Err(Error::Configuration(_))
        ));
    }
}
