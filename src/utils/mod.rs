/// Module containing environment-driven configuration helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
