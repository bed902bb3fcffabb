/// Account service interface
pub mod account;
/// Market data service interface
pub mod market;
/// Options service interface
pub mod options;
/// Order service interface
pub mod order;
/// Utility service interface
pub mod utility;
