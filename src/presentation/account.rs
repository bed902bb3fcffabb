use crate::presentation::serialization::{
    fmt_opt, fmt_opt_str, number_as_string_opt, string_as_bool_opt, string_as_float_opt,
    string_as_int_opt,
};
use crate::presentation::{add_row, new_table};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Funds and margin utilisation (`funds`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Funds {
    /// Cash available for new orders
    #[serde(default, rename = "availablecash", deserialize_with = "string_as_float_opt")]
    pub available_cash: Option<f64>,
    /// Collateral value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub collateral: Option<f64>,
    /// Realized mark-to-market
    #[serde(default, rename = "m2mrealized", deserialize_with = "string_as_float_opt")]
    pub m2m_realized: Option<f64>,
    /// Unrealized mark-to-market
    #[serde(default, rename = "m2munrealized", deserialize_with = "string_as_float_opt")]
    pub m2m_unrealized: Option<f64>,
    /// Margin used
    #[serde(default, rename = "utiliseddebits", deserialize_with = "string_as_float_opt")]
    pub utilised_debits: Option<f64>,
}

/// An order as reported by `orderbook` and `orderstatus`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Broker order id
    #[serde(default, rename = "orderid", deserialize_with = "number_as_string_opt")]
    pub order_id: Option<String>,
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Buy or sell
    #[serde(default)]
    pub action: Option<String>,
    /// Quantity in units
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub quantity: Option<f64>,
    /// Limit price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub price: Option<f64>,
    /// Trigger price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub trigger_price: Option<f64>,
    /// Average fill price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub average_price: Option<f64>,
    /// Price type
    #[serde(default, rename = "pricetype")]
    pub price_type: Option<String>,
    /// Product type
    #[serde(default)]
    pub product: Option<String>,
    /// Broker status, e.g. `complete`, `open`, `rejected`
    #[serde(default)]
    pub order_status: Option<String>,
    /// Broker timestamp as sent
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Order counts returned alongside the order book
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderStatistics {
    /// Buy orders
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_buy_orders: Option<f64>,
    /// Sell orders
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_sell_orders: Option<f64>,
    /// Completed orders
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_completed_orders: Option<f64>,
    /// Open orders
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_open_orders: Option<f64>,
    /// Rejected orders
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_rejected_orders: Option<f64>,
}

/// The day's orders (`orderbook`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    /// Orders
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Counters
    #[serde(default)]
    pub statistics: OrderStatistics,
}

impl OrderBook {
    /// Orders whose status is `open` or `trigger pending`
    pub fn open_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|o| {
            o.order_status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("open") || s.eq_ignore_ascii_case("trigger pending"))
        })
    }
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&[
            "ORDER ID", "SYMBOL", "EXCHANGE", "ACTION", "QTY", "PRICE", "TYPE", "PRODUCT",
            "STATUS", "TIME",
        ]);
        for o in &self.orders {
            add_row(
                &mut table,
                vec![
                    fmt_opt_str(o.order_id.as_deref()),
                    fmt_opt_str(o.symbol.as_deref()),
                    fmt_opt_str(o.exchange.as_deref()),
                    fmt_opt_str(o.action.as_deref()),
                    o.quantity.map(|q| format!("{q}")).unwrap_or_else(|| "-".to_string()),
                    fmt_opt(o.price),
                    fmt_opt_str(o.price_type.as_deref()),
                    fmt_opt_str(o.product.as_deref()),
                    fmt_opt_str(o.order_status.as_deref()),
                    fmt_opt_str(o.timestamp.as_deref()),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// An execution (`tradebook`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    /// Broker order id
    #[serde(default, rename = "orderid", deserialize_with = "number_as_string_opt")]
    pub order_id: Option<String>,
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Buy or sell
    #[serde(default)]
    pub action: Option<String>,
    /// Filled quantity
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub quantity: Option<f64>,
    /// Fill price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub average_price: Option<f64>,
    /// Quantity times price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub trade_value: Option<f64>,
    /// Product type
    #[serde(default)]
    pub product: Option<String>,
    /// Broker timestamp as sent
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The day's executions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TradeBook(pub Vec<Trade>);

impl fmt::Display for TradeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&[
            "ORDER ID", "SYMBOL", "EXCHANGE", "ACTION", "QTY", "AVG PRICE", "VALUE", "PRODUCT",
            "TIME",
        ]);
        for t in &self.0 {
            add_row(
                &mut table,
                vec![
                    fmt_opt_str(t.order_id.as_deref()),
                    fmt_opt_str(t.symbol.as_deref()),
                    fmt_opt_str(t.exchange.as_deref()),
                    fmt_opt_str(t.action.as_deref()),
                    t.quantity.map(|q| format!("{q}")).unwrap_or_else(|| "-".to_string()),
                    fmt_opt(t.average_price),
                    fmt_opt(t.trade_value),
                    fmt_opt_str(t.product.as_deref()),
                    fmt_opt_str(t.timestamp.as_deref()),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// A net position (`positionbook`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Product type
    #[serde(default)]
    pub product: Option<String>,
    /// Net quantity, negative when short
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub quantity: Option<i64>,
    /// Average entry price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub average_price: Option<f64>,
    /// Last traded price, when the broker reports it
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ltp: Option<f64>,
    /// Profit and loss, when the broker reports it
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub pnl: Option<f64>,
}

/// Net positions for the day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PositionBook(pub Vec<Position>);

impl PositionBook {
    /// Positions with a non-zero quantity
    pub fn open(&self) -> impl Iterator<Item = &Position> {
        self.0.iter().filter(|p| p.quantity.unwrap_or(0) != 0)
    }
}

impl fmt::Display for PositionBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["SYMBOL", "EXCHANGE", "PRODUCT", "QTY", "AVG PRICE", "LTP", "PNL"]);
        for p in &self.0 {
            add_row(
                &mut table,
                vec![
                    fmt_opt_str(p.symbol.as_deref()),
                    fmt_opt_str(p.exchange.as_deref()),
                    fmt_opt_str(p.product.as_deref()),
                    p.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
                    fmt_opt(p.average_price),
                    fmt_opt(p.ltp),
                    fmt_opt(p.pnl),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// A delivery holding
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Product type
    #[serde(default)]
    pub product: Option<String>,
    /// Units held
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub quantity: Option<i64>,
    /// Profit and loss
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub pnl: Option<f64>,
    /// Profit and loss in percent
    #[serde(default, rename = "pnlpercent", deserialize_with = "string_as_float_opt")]
    pub pnl_percent: Option<f64>,
}

/// Portfolio totals returned alongside holdings
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct HoldingStatistics {
    /// Current value
    #[serde(default, rename = "totalholdingvalue", deserialize_with = "string_as_float_opt")]
    pub total_holding_value: Option<f64>,
    /// Invested value
    #[serde(default, rename = "totalinvvalue", deserialize_with = "string_as_float_opt")]
    pub total_investment_value: Option<f64>,
    /// Total profit and loss
    #[serde(default, rename = "totalprofitandloss", deserialize_with = "string_as_float_opt")]
    pub total_profit_and_loss: Option<f64>,
    /// Total profit and loss in percent
    #[serde(default, rename = "totalpnlpercentage", deserialize_with = "string_as_float_opt")]
    pub total_pnl_percentage: Option<f64>,
}

/// Delivery holdings (`holdings`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Holdings {
    /// Holdings
    #[serde(default)]
    pub holdings: Vec<Holding>,
    /// Totals
    #[serde(default)]
    pub statistics: HoldingStatistics,
}

impl fmt::Display for Holdings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["SYMBOL", "EXCHANGE", "PRODUCT", "QTY", "PNL", "PNL %"]);
        for h in &self.holdings {
            add_row(
                &mut table,
                vec![
                    fmt_opt_str(h.symbol.as_deref()),
                    fmt_opt_str(h.exchange.as_deref()),
                    fmt_opt_str(h.product.as_deref()),
                    h.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
                    fmt_opt(h.pnl),
                    fmt_opt(h.pnl_percent),
                ],
            );
        }
        write!(f, "{table}")?;
        writeln!(
            f,
            "Holding value: {}  Invested: {}  P&L: {} ({}%)",
            fmt_opt(self.statistics.total_holding_value),
            fmt_opt(self.statistics.total_investment_value),
            fmt_opt(self.statistics.total_profit_and_loss),
            fmt_opt(self.statistics.total_pnl_percentage),
        )
    }
}

/// Net open quantity of one symbol under a strategy (`openposition`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OpenPosition {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Net quantity, `0` when flat
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub quantity: Option<i64>,
}

/// Analyzer (sandbox) mode state (`analyzer`, `analyzer/toggle`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerStatus {
    /// `true` when orders are simulated
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub analyze_mode: Option<bool>,
    /// `analyze` or `live`
    #[serde(default)]
    pub mode: Option<String>,
    /// Number of analyzer log entries
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub total_logs: Option<i64>,
    /// Message returned by a toggle
    #[serde(default)]
    pub message: Option<String>,
}

/// Margin required for a set of positions (`margin`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Margin {
    /// Total margin
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub total_margin_required: Option<f64>,
    /// SPAN component
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub span_margin: Option<f64>,
    /// Exposure component
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub exposure_margin: Option<f64>,
}
