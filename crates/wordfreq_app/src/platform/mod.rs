//! CLI shell around the engine: arguments, config file, logging and chart output.
mod app;
pub mod cli;
mod config;
pub mod logging;
mod render;

pub use app::run_app;
