pub mod cli;
pub mod config;
pub mod dataset;
pub mod dump;
pub mod logging;
