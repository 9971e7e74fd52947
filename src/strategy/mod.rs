//! Forecasting strategies under partial feedback.

mod state;
mod strategy;

pub use state::*;
pub use strategy::*;
