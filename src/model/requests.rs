/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::DEFAULT_STRATEGY;
use crate::error::AppError;
use crate::presentation::order::{Action, InstrumentKind, OptionType, PriceType, Product};
use crate::presentation::serialization::{
    number_or_string_f64, number_or_string_i64, number_or_string_u64, string_as_float_opt,
    string_as_u64_opt,
};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

// OpenAlgo expects quantities and prices as strings in order payloads.
fn as_string<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn opt_as_string<T: Display, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Parameters for `placeorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PlaceOrderRequest {
    /// Strategy tag shown in the OpenAlgo order log
    pub strategy: String,
    /// Trading symbol in OpenAlgo format, e.g. `RELIANCE`, `NIFTY25NOV2526000CE`
    pub symbol: String,
    /// Buy or sell
    pub action: Action,
    /// Exchange code, e.g. `NSE`, `NFO`
    pub exchange: String,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Product type
    pub product: Product,
    /// Quantity in units (not lots)
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Limit price for LIMIT and SL orders
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price for SL and SL-M orders
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
    /// Quantity disclosed to the market
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_u64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub disclosed_quantity: Option<u64>,
}

impl PlaceOrderRequest {
    /// Creates a MARKET / MIS order for one unit under the default strategy tag
    pub fn new(symbol: impl Into<String>, action: Action, exchange: impl Into<String>) -> Self {
        Self {
            strategy: DEFAULT_STRATEGY.to_string(),
            symbol: symbol.into(),
            action,
            exchange: exchange.into(),
            price_type: PriceType::Market,
            product: Product::Mis,
            quantity: 1,
            price: None,
            trigger_price: None,
            disclosed_quantity: None,
        }
    }

    /// Creates a market order for `quantity` units
    pub fn market(
        symbol: impl Into<String>,
        action: Action,
        exchange: impl Into<String>,
        quantity: u64,
    ) -> Self {
        Self::new(symbol, action, exchange).with_quantity(quantity)
    }

    /// Creates a limit order for `quantity` units at `price`
    pub fn limit(
        symbol: impl Into<String>,
        action: Action,
        exchange: impl Into<String>,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self::new(symbol, action, exchange)
            .with_quantity(quantity)
            .with_price_type(PriceType::Limit)
            .with_price(price)
    }

    /// Sets the strategy tag
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Sets the price type
    #[must_use]
    pub fn with_price_type(mut self, price_type: PriceType) -> Self {
        self.price_type = price_type;
        self
    }

    /// Sets the product
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    /// Sets the quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the limit price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the trigger price
    #[must_use]
    pub fn with_trigger_price(mut self, trigger_price: f64) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Sets the disclosed quantity
    #[must_use]
    pub fn with_disclosed_quantity(mut self, disclosed_quantity: u64) -> Self {
        self.disclosed_quantity = Some(disclosed_quantity);
        self
    }
}

/// Parameters for `placesmartorder`: an order sized so that the strategy's
/// position in the symbol ends up at `position_size`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SmartOrderRequest {
    /// The underlying order parameters
    #[serde(flatten)]
    pub order: PlaceOrderRequest,
    /// Target net position; negative for short
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_i64")]
    pub position_size: i64,
}

impl SmartOrderRequest {
    /// Creates a smart order from order parameters and a target position
    pub fn new(order: PlaceOrderRequest, position_size: i64) -> Self {
        Self {
            order,
            position_size,
        }
    }
}

/// One leg of a basket order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BasketOrderItem {
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Buy or sell
    pub action: Action,
    /// Quantity in units
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Product type
    pub product: Product,
    /// Limit price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
    /// Disclosed quantity
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_u64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub disclosed_quantity: Option<u64>,
}

impl From<PlaceOrderRequest> for BasketOrderItem {
    fn from(order: PlaceOrderRequest) -> Self {
        Self {
            symbol: order.symbol,
            exchange: order.exchange,
            action: order.action,
            quantity: order.quantity,
            price_type: order.price_type,
            product: order.product,
            price: order.price,
            trigger_price: order.trigger_price,
            disclosed_quantity: order.disclosed_quantity,
        }
    }
}

/// Parameters for `basketorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct BasketOrderRequest {
    /// Strategy tag applied to every leg
    pub strategy: String,
    /// Orders placed together
    pub orders: Vec<BasketOrderItem>,
}

impl BasketOrderRequest {
    /// Creates an empty basket
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            orders: Vec::new(),
        }
    }

    /// Appends an order; its own strategy tag is replaced by the basket's
    #[must_use]
    pub fn with_order(mut self, order: PlaceOrderRequest) -> Self {
        self.orders.push(order.into());
        self
    }

    /// Rejects baskets the server would reject anyway
    pub fn validate(&self) -> Result<(), AppError> {
        if self.orders.is_empty() {
            return Err(AppError::InvalidInput(
                "basket order requires at least one order".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for `splitorder`: `quantity` is sent as several orders of at
/// most `split_size` units
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SplitOrderRequest {
    /// Strategy tag
    pub strategy: String,
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Buy or sell
    pub action: Action,
    /// Total quantity
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Maximum quantity per child order
    #[serde(
        rename = "splitsize",
        serialize_with = "as_string",
        deserialize_with = "number_or_string_u64"
    )]
    pub split_size: u64,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Product type
    pub product: Product,
    /// Limit price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
    /// Disclosed quantity
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_u64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub disclosed_quantity: Option<u64>,
}

impl SplitOrderRequest {
    /// Creates a split order from regular order parameters
    pub fn new(order: PlaceOrderRequest, split_size: u64) -> Self {
        Self {
            strategy: order.strategy,
            symbol: order.symbol,
            exchange: order.exchange,
            action: order.action,
            quantity: order.quantity,
            split_size,
            price_type: order.price_type,
            product: order.product,
            price: order.price,
            trigger_price: order.trigger_price,
            disclosed_quantity: order.disclosed_quantity,
        }
    }

    /// Rejects a zero split size, which would never terminate server-side
    pub fn validate(&self) -> Result<(), AppError> {
        if self.split_size == 0 {
            return Err(AppError::InvalidInput(
                "split size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for `modifyorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ModifyOrderRequest {
    /// Order to modify
    #[serde(rename = "orderid")]
    pub order_id: String,
    /// Strategy tag
    pub strategy: String,
    /// Trading symbol
    pub symbol: String,
    /// Buy or sell
    pub action: Action,
    /// Exchange code
    pub exchange: String,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Product type
    pub product: Product,
    /// New quantity
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// New price
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_f64")]
    pub price: f64,
    /// Disclosed quantity, `0` when not used
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub disclosed_quantity: u64,
    /// Trigger price, `0` when not used
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_f64")]
    pub trigger_price: f64,
}

impl ModifyOrderRequest {
    /// Creates a modification as a LIMIT order at `price`
    pub fn new(
        order_id: impl Into<String>,
        symbol: impl Into<String>,
        action: Action,
        exchange: impl Into<String>,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            strategy: DEFAULT_STRATEGY.to_string(),
            symbol: symbol.into(),
            action,
            exchange: exchange.into(),
            price_type: PriceType::Limit,
            product: Product::Mis,
            quantity,
            price,
            disclosed_quantity: 0,
            trigger_price: 0.0,
        }
    }

    /// Sets the strategy tag
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Sets the price type
    #[must_use]
    pub fn with_price_type(mut self, price_type: PriceType) -> Self {
        self.price_type = price_type;
        self
    }

    /// Sets the product
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    /// Sets the trigger price
    #[must_use]
    pub fn with_trigger_price(mut self, trigger_price: f64) -> Self {
        self.trigger_price = trigger_price;
        self
    }

    /// Sets the disclosed quantity
    #[must_use]
    pub fn with_disclosed_quantity(mut self, disclosed_quantity: u64) -> Self {
        self.disclosed_quantity = disclosed_quantity;
        self
    }
}

/// Parameters for `cancelorder` and `orderstatus`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRefRequest {
    /// Broker order id
    #[serde(rename = "orderid")]
    pub order_id: String,
    /// Strategy tag
    pub strategy: String,
}

impl OrderRefRequest {
    /// References an order under a strategy tag
    pub fn new(order_id: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            strategy: strategy.into(),
        }
    }
}

/// Parameters for strategy-wide operations (`cancelallorder`, `closeposition`)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StrategyRequest {
    /// Strategy tag
    pub strategy: String,
}

impl StrategyRequest {
    /// Creates a strategy-wide request
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
        }
    }
}

impl Default for StrategyRequest {
    fn default() -> Self {
        Self::new(DEFAULT_STRATEGY)
    }
}

/// Parameters for `openposition`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OpenPositionRequest {
    /// Strategy tag
    pub strategy: String,
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Product type
    pub product: Product,
}

impl OpenPositionRequest {
    /// Creates an open position query
    pub fn new(
        strategy: impl Into<String>,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        product: Product,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            symbol: symbol.into(),
            exchange: exchange.into(),
            product,
        }
    }
}

/// Parameters for `analyzer/toggle`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerToggleRequest {
    /// `true` switches to analyze (sandbox) mode, `false` to live
    pub mode: bool,
}

/// One position in a `margin` calculation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarginPosition {
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Buy or sell
    pub action: Action,
    /// Quantity in units
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Product type
    pub product: Product,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Limit price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
}

impl From<PlaceOrderRequest> for MarginPosition {
    fn from(order: PlaceOrderRequest) -> Self {
        Self {
            symbol: order.symbol,
            exchange: order.exchange,
            action: order.action,
            quantity: order.quantity,
            product: order.product,
            price_type: order.price_type,
            price: order.price,
            trigger_price: order.trigger_price,
        }
    }
}

/// Parameters for `margin`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarginRequest {
    /// Positions evaluated together
    pub positions: Vec<MarginPosition>,
}

impl MarginRequest {
    /// Adds a position to the calculation
    #[must_use]
    pub fn with_position(mut self, position: impl Into<MarginPosition>) -> Self {
        self.positions.push(position.into());
        self
    }
}

/// Symbol/exchange pair used by `quotes`, `depth`, `symbol` and `multiquotes`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SymbolRequest {
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
}

impl SymbolRequest {
    /// Creates a symbol reference
    pub fn new(symbol: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
        }
    }
}

/// Parameters for `multiquotes`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MultiQuotesRequest {
    /// Symbols to quote
    pub symbols: Vec<SymbolRequest>,
}

impl MultiQuotesRequest {
    /// Adds a symbol
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>, exchange: impl Into<String>) -> Self {
        self.symbols.push(SymbolRequest::new(symbol, exchange));
        self
    }
}

/// Parameters for `history`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HistoryRequest {
    /// Trading symbol
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Candle interval as listed by `intervals`, e.g. `1m`, `5m`, `D`
    pub interval: String,
    /// First day, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`
    pub end_date: String,
}

impl HistoryRequest {
    /// Creates a history request from `YYYY-MM-DD` strings
    pub fn new(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        interval: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            interval: interval.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Creates a history request from calendar dates
    pub fn from_dates(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        interval: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self::new(
            symbol,
            exchange,
            interval,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        )
    }
}

/// Parameters for `search`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    /// Free text query, e.g. `NIFTY 26000 DEC CE`
    pub query: String,
    /// Restricts results to one exchange
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
}

impl SearchRequest {
    /// Searches all exchanges
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            exchange: None,
        }
    }

    /// Restricts the search to one exchange
    #[must_use]
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }
}

/// Parameters for `expiry`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ExpiryRequest {
    /// Underlying symbol, e.g. `NIFTY`
    pub symbol: String,
    /// Derivatives exchange, e.g. `NFO`
    pub exchange: String,
    /// Futures or options
    #[serde(rename = "instrumenttype")]
    pub instrument_type: InstrumentKind,
}

impl ExpiryRequest {
    /// Creates an expiry listing request
    pub fn new(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        instrument_type: InstrumentKind,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            instrument_type,
        }
    }
}

/// Parameters for `optiongreeks`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionGreeksRequest {
    /// Option symbol, e.g. `NIFTY25NOV2526000CE`
    pub symbol: String,
    /// Exchange code
    pub exchange: String,
    /// Annual risk-free rate in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    /// Use this instrument's price as the underlying (e.g. a future)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_symbol: Option<String>,
    /// Exchange of `underlying_symbol`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_exchange: Option<String>,
    /// Expiry time of day `HH:MM` for contracts that do not expire at 15:30
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
}

impl OptionGreeksRequest {
    /// Creates a greeks request
    pub fn new(symbol: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            ..Default::default()
        }
    }

    /// Sets the interest rate
    #[must_use]
    pub fn with_interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = Some(interest_rate);
        self
    }

    /// Prices against another underlying instrument
    #[must_use]
    pub fn with_underlying(
        mut self,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        self.underlying_symbol = Some(symbol.into());
        self.underlying_exchange = Some(exchange.into());
        self
    }

    /// Sets the expiry time of day
    #[must_use]
    pub fn with_expiry_time(mut self, expiry_time: impl Into<String>) -> Self {
        self.expiry_time = Some(expiry_time.into());
        self
    }
}

/// Parameters for `optionsymbol`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionSymbolRequest {
    /// Strategy tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Underlying, e.g. `NIFTY`
    pub underlying: String,
    /// Exchange of the underlying, e.g. `NSE_INDEX`
    pub exchange: String,
    /// Expiry in `DDMMMYY`, e.g. `25NOV25`
    pub expiry_date: String,
    /// Strike interval; resolved server-side when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_int: Option<u32>,
    /// Strike offset from ATM: `ATM`, `ITM1`..`ITM50`, `OTM1`..`OTM50`
    pub offset: String,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionSymbolRequest {
    /// Creates an option symbol request
    pub fn new(
        underlying: impl Into<String>,
        exchange: impl Into<String>,
        expiry_date: impl Into<String>,
        offset: impl Into<String>,
        option_type: OptionType,
    ) -> Self {
        Self {
            strategy: None,
            underlying: underlying.into(),
            exchange: exchange.into(),
            expiry_date: expiry_date.into(),
            strike_int: None,
            offset: offset.into(),
            option_type,
        }
    }

    /// Sets the strategy tag
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Sets the strike interval
    #[must_use]
    pub fn with_strike_int(mut self, strike_int: u32) -> Self {
        self.strike_int = Some(strike_int);
        self
    }
}

/// Parameters for `optionsorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionsOrderRequest {
    /// Strategy tag
    pub strategy: String,
    /// Underlying, e.g. `NIFTY`
    pub underlying: String,
    /// Exchange of the underlying
    pub exchange: String,
    /// Expiry in `DDMMMYY`
    pub expiry_date: String,
    /// Strike interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_int: Option<u32>,
    /// Strike offset from ATM
    pub offset: String,
    /// Call or put
    pub option_type: OptionType,
    /// Buy or sell
    pub action: Action,
    /// Quantity in units
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Price type
    #[serde(rename = "pricetype")]
    pub price_type: PriceType,
    /// Product type
    pub product: Product,
    /// Limit price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
    /// Disclosed quantity
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_u64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub disclosed_quantity: Option<u64>,
    /// Splits the order into chunks of this size
    #[serde(
        default,
        rename = "splitsize",
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_u64_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub split_size: Option<u64>,
}

impl OptionsOrderRequest {
    /// Creates a MARKET / MIS option order on a resolved strike
    pub fn new(symbol: OptionSymbolRequest, action: Action, quantity: u64) -> Self {
        Self {
            strategy: symbol
                .strategy
                .unwrap_or_else(|| DEFAULT_STRATEGY.to_string()),
            underlying: symbol.underlying,
            exchange: symbol.exchange,
            expiry_date: symbol.expiry_date,
            strike_int: symbol.strike_int,
            offset: symbol.offset,
            option_type: symbol.option_type,
            action,
            quantity,
            price_type: PriceType::Market,
            product: Product::Mis,
            price: None,
            trigger_price: None,
            disclosed_quantity: None,
            split_size: None,
        }
    }

    /// Sets the strategy tag
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Sets the price type
    #[must_use]
    pub fn with_price_type(mut self, price_type: PriceType) -> Self {
        self.price_type = price_type;
        self
    }

    /// Sets the product
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    /// Sets the limit price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the trigger price
    #[must_use]
    pub fn with_trigger_price(mut self, trigger_price: f64) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Sets the split size
    #[must_use]
    pub fn with_split_size(mut self, split_size: u64) -> Self {
        self.split_size = Some(split_size);
        self
    }
}

/// One leg of `optionsmultiorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionLeg {
    /// Strike offset from ATM
    pub offset: String,
    /// Call or put
    pub option_type: OptionType,
    /// Buy or sell
    pub action: Action,
    /// Quantity in units
    #[serde(serialize_with = "as_string", deserialize_with = "number_or_string_u64")]
    pub quantity: u64,
    /// Per-leg expiry, for calendar spreads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Price type, MARKET when omitted
    #[serde(rename = "pricetype", skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    /// Product type, MIS when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    /// Limit price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(
        default,
        serialize_with = "opt_as_string",
        deserialize_with = "string_as_float_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_price: Option<f64>,
}

impl OptionLeg {
    /// Creates a market leg
    pub fn new(
        offset: impl Into<String>,
        option_type: OptionType,
        action: Action,
        quantity: u64,
    ) -> Self {
        Self {
            offset: offset.into(),
            option_type,
            action,
            quantity,
            expiry_date: None,
            price_type: None,
            product: None,
            price: None,
            trigger_price: None,
        }
    }

    /// Sets a per-leg expiry
    #[must_use]
    pub fn with_expiry_date(mut self, expiry_date: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }

    /// Makes the leg a LIMIT order at `price`
    #[must_use]
    pub fn with_limit_price(mut self, price: f64) -> Self {
        self.price_type = Some(PriceType::Limit);
        self.price = Some(price);
        self
    }

    /// Sets the product
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }
}

/// Parameters for `optionsmultiorder`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionsMultiOrderRequest {
    /// Strategy tag
    pub strategy: String,
    /// Underlying, e.g. `NIFTY`
    pub underlying: String,
    /// Exchange of the underlying
    pub exchange: String,
    /// Default expiry for legs without their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Strike interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_int: Option<u32>,
    /// Legs, placed buy legs first by the server
    pub legs: Vec<OptionLeg>,
}

impl OptionsMultiOrderRequest {
    /// Creates a multi-leg order without legs
    pub fn new(
        strategy: impl Into<String>,
        underlying: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            underlying: underlying.into(),
            exchange: exchange.into(),
            expiry_date: None,
            strike_int: None,
            legs: Vec::new(),
        }
    }

    /// Sets the default expiry
    #[must_use]
    pub fn with_expiry_date(mut self, expiry_date: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }

    /// Sets the strike interval
    #[must_use]
    pub fn with_strike_int(mut self, strike_int: u32) -> Self {
        self.strike_int = Some(strike_int);
        self
    }

    /// Appends a leg
    #[must_use]
    pub fn with_leg(mut self, leg: OptionLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Rejects orders without legs, or legs without any expiry
    pub fn validate(&self) -> Result<(), AppError> {
        if self.legs.is_empty() {
            return Err(AppError::InvalidInput(
                "options multi order requires at least one leg".to_string(),
            ));
        }
        if self.expiry_date.is_none() && self.legs.iter().any(|l| l.expiry_date.is_none()) {
            return Err(AppError::InvalidInput(
                "every leg needs an expiry date when no default expiry is set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for `optionchain`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionChainRequest {
    /// Underlying, e.g. `NIFTY`
    pub underlying: String,
    /// Exchange of the underlying
    pub exchange: String,
    /// Expiry in `DDMMMYY`
    pub expiry_date: String,
    /// Number of strikes on each side of ATM; full chain when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_count: Option<u32>,
}

impl OptionChainRequest {
    /// Requests the full chain for one expiry
    pub fn new(
        underlying: impl Into<String>,
        exchange: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            exchange: exchange.into(),
            expiry_date: expiry_date.into(),
            strike_count: None,
        }
    }

    /// Limits the chain to `strike_count` strikes on each side of ATM
    #[must_use]
    pub fn with_strike_count(mut self, strike_count: u32) -> Self {
        self.strike_count = Some(strike_count);
        self
    }
}

/// Parameters for `syntheticfuture`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SyntheticFutureRequest {
    /// Underlying, e.g. `NIFTY`
    pub underlying: String,
    /// Exchange of the underlying
    pub exchange: String,
    /// Expiry in `DDMMMYY`
    pub expiry_date: String,
}

impl SyntheticFutureRequest {
    /// Creates a synthetic future request
    pub fn new(
        underlying: impl Into<String>,
        exchange: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            exchange: exchange.into(),
            expiry_date: expiry_date.into(),
        }
    }
}

/// Parameters for `market/holidays`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HolidaysRequest {
    /// Calendar year
    pub year: i32,
}

/// Parameters for `market/timings`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TimingsRequest {
    /// Day, `YYYY-MM-DD`
    pub date: String,
}

/// Parameters for `telegram/notify`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TelegramRequest {
    /// OpenAlgo login name linked to the telegram bot
    pub username: String,
    /// Message text
    pub message: String,
    /// Priority from 1 (lowest) to 10
    pub priority: u8,
}

impl TelegramRequest {
    /// Creates a notification with the default priority of 5
    pub fn new(username: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: message.into(),
            priority: 5,
        }
    }

    /// Sets the priority
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}
