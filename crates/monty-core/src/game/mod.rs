pub mod host;
pub mod round;
