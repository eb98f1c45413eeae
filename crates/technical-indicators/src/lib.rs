pub mod calculator;
pub mod indicators;

#[cfg(test)]
mod indicators_tests;

pub use calculator::*;
pub use indicators::*;
