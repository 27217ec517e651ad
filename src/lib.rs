pub mod cli;
pub mod client;
pub mod config;
pub mod dataset;
pub mod space;
pub mod utils;
