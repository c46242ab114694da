pub mod cli;
pub mod config;
pub mod estimator;
pub mod report;
pub mod utils;
