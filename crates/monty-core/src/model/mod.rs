pub mod board;
pub mod door;
pub mod outcome;
pub mod strategy;
