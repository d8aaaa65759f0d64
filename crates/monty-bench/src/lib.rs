#![deny(warnings)]
pub mod experiment;
pub mod logging;
pub mod report;
