/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # OpenAlgo Client Prelude
//!
//! Brings the client, its service traits, request builders and response
//! models into scope with a single import.
//!
//! ```rust
//! use openalgo::prelude::*;
//!
//! let config = Config::with_api_key("my-api-key", "http://127.0.0.1:5000");
//! let order = PlaceOrderRequest::limit("SBIN", Action::Buy, EXCHANGE_NSE, 1, 800.0);
//! assert_eq!(order.price_type, PriceType::Limit);
//! assert_eq!(config.rest_api.base_url(), "http://127.0.0.1:5000/api/v1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Exchange codes and defaults
pub use crate::constants::*;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// OpenAlgo REST client
pub use crate::application::client::Client;

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketService;
pub use crate::application::interfaces::options::OptionsService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::utility::UtilityService;

/// TradingView strategy webhook
pub use crate::strategy::{Strategy, StrategyMessage};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request builders
pub use crate::model::requests::*;

/// Order acknowledgements
pub use crate::model::responses::{
    BasketOrderResponse, BasketOrderResult, CancelAllResponse, MessageResponse, OrderResponse,
    SplitOrderResponse, SplitOrderResult,
};

/// Request enumerations
pub use crate::presentation::order::{Action, InstrumentKind, OptionType, PriceType, Product};

/// Response models
pub use crate::presentation::account::*;
pub use crate::presentation::market::*;
pub use crate::presentation::options::*;
pub use crate::presentation::utility::*;

// ============================================================================
// INDICATORS
// ============================================================================

/// Trend indicators
pub use crate::indicators::trend::*;
