use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Per-run total scores of both players across a Monte Carlo batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally(Vec<(Payoff, Payoff)>);

impl From<Vec<(Payoff, Payoff)>> for Tally {
    fn from(totals: Vec<(Payoff, Payoff)>) -> Self {
        Self(totals)
    }
}

impl Tally {
    pub fn runs(&self) -> usize {
        self.0.len()
    }
    pub fn totals(&self) -> &[(Payoff, Payoff)] {
        &self.0
    }
    /// Mean total score of each player.
    pub fn means(&self) -> (Payoff, Payoff) {
        let n = self.runs().max(1) as Payoff;
        let (a, b) = self.sums();
        (a / n, b / n)
    }
    /// Sample standard deviation of each player's total. Zero below two runs.
    pub fn stdevs(&self) -> (Payoff, Payoff) {
        if self.runs() < 2 {
            return (0.0, 0.0);
        }
        let (ma, mb) = self.means();
        let (va, vb) = self.0.iter().fold((0.0, 0.0), |(va, vb), (a, b)| {
            (va + (a - ma).powi(2), vb + (b - mb).powi(2))
        });
        let n = (self.runs() - 1) as Payoff;
        ((va / n).sqrt(), (vb / n).sqrt())
    }
    fn sums(&self) -> (Payoff, Payoff) {
        self.0
            .iter()
            .fold((0.0, 0.0), |(sa, sb), (a, b)| (sa + a, sb + b))
    }
}
