//! Repeated games and Monte Carlo batches.

mod config;
mod history;
mod montecarlo;
mod player;
mod simulation;
mod tally;

pub use config::*;
pub use history::*;
pub use montecarlo::*;
pub use player::*;
pub use simulation::*;
pub use tally::*;
