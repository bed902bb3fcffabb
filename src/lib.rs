/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # OpenAlgo Client
//!
//! A Rust client for the [OpenAlgo](https://openalgo.in) trading REST API.
//!
//! Every operation is a single request against `{host}/api/{version}/<endpoint>`:
//! the client attaches the API key to the JSON payload, sends it, and shapes the
//! JSON response into typed models (with tabular `Display` for books and
//! candle history).
//!
//! ## Features
//!
//! - **Orders**: place, smart, basket, split, modify, cancel, close, status
//! - **Account**: funds, order/trade/position books, holdings, analyzer mode, margin
//! - **Market data**: quotes, depth, history, intervals, symbols, search, expiry, instruments
//! - **Options**: greeks, symbol resolution, option orders, option chain, synthetic futures
//! - **Utilities**: market holidays and timings, telegram notifications
//! - **Strategy webhooks**: TradingView-style strategy order messages
//! - **Indicators**: trend indicators (SMA, EMA, Supertrend, Ichimoku, ...)
//!
//! ## Example
//!
//! ```ignore
//! use openalgo::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let order = PlaceOrderRequest::new("RELIANCE", Action::Buy, "NSE")
//!         .with_strategy("Rust")
//!         .with_quantity(1);
//!     let response = client.place_order(&order).await?;
//!     println!("order id: {:?}", response.orderid);
//!     Ok(())
//! }
//! ```

/// Core application layer: configuration, client and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Technical indicators computed over candle columns
pub mod indicators;
/// Request/response models and the HTTP layer
pub mod model;
/// Commonly used imports
pub mod prelude;
/// Typed response models and tabular rendering
pub mod presentation;
/// TradingView strategy webhook helper
pub mod strategy;
/// Utility functions
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
