/// OpenAlgo client implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per endpoint family
pub mod interfaces;
/// Rate limiter module for API request pacing
pub mod rate_limiter;
