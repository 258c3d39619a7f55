//! Domain layer: vote direction and the tally algorithm.

pub mod direction;
pub mod tally;
