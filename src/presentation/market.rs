use crate::constants::IST_OFFSET_SECS;
use crate::error::AppError;
use crate::presentation::serialization::{
    fmt_opt, fmt_opt_str, string_as_float, string_as_float_opt, string_as_int_opt,
};
use crate::presentation::{add_row, new_table};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Level 1 quote (`quotes`, `multiquotes`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Day open
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub open: Option<f64>,
    /// Day high
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub high: Option<f64>,
    /// Day low
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub low: Option<f64>,
    /// Last traded price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ltp: Option<f64>,
    /// Best bid
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub bid: Option<f64>,
    /// Best ask
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ask: Option<f64>,
    /// Previous close
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub prev_close: Option<f64>,
    /// Traded volume
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub volume: Option<f64>,
    /// Open interest
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub oi: Option<f64>,
}

impl Quote {
    /// Bid/ask midpoint when both sides are quoted
    #[must_use]
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(b), Some(a)) if b > 0.0 && a > 0.0 => Some((b + a) / 2.0),
            _ => None,
        }
    }

    /// Change from the previous close in percent
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        match (self.ltp, self.prev_close) {
            (Some(ltp), Some(prev)) if prev != 0.0 => Some((ltp - prev) / prev * 100.0),
            _ => None,
        }
    }
}

/// One symbol of a `multiquotes` response
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MultiQuote {
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Quote, absent when the symbol could not be quoted
    #[serde(default)]
    pub data: Option<Quote>,
    /// Per-symbol error
    #[serde(default)]
    pub error: Option<String>,
}

/// One price level of the order book
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct DepthLevel {
    /// Price
    #[serde(default, deserialize_with = "string_as_float")]
    pub price: f64,
    /// Quantity resting at `price`
    #[serde(default, deserialize_with = "string_as_float")]
    pub quantity: f64,
}

/// Market depth (`depth`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Depth {
    /// Bid levels, best first
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
    /// Ask levels, best first
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
    /// Last traded price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ltp: Option<f64>,
    /// Last traded quantity
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ltq: Option<f64>,
    /// Day open
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub open: Option<f64>,
    /// Day high
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub high: Option<f64>,
    /// Day low
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub low: Option<f64>,
    /// Previous close
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub prev_close: Option<f64>,
    /// Traded volume
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub volume: Option<f64>,
    /// Open interest
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub oi: Option<f64>,
    /// Total quantity on the bid side
    #[serde(default, rename = "totalbuyqty", deserialize_with = "string_as_float_opt")]
    pub total_buy_qty: Option<f64>,
    /// Total quantity on the ask side
    #[serde(default, rename = "totalsellqty", deserialize_with = "string_as_float_opt")]
    pub total_sell_qty: Option<f64>,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["BID QTY", "BID", "ASK", "ASK QTY"]);
        let levels = self.bids.len().max(self.asks.len());
        for i in 0..levels {
            let bid = self.bids.get(i);
            let ask = self.asks.get(i);
            add_row(
                &mut table,
                vec![
                    fmt_opt(bid.map(|l| l.quantity)),
                    fmt_opt(bid.map(|l| l.price)),
                    fmt_opt(ask.map(|l| l.price)),
                    fmt_opt(ask.map(|l| l.quantity)),
                ],
            );
        }
        write!(f, "{table}")?;
        writeln!(
            f,
            "LTP: {}  Total buy: {}  Total sell: {}",
            fmt_opt(self.ltp),
            fmt_opt(self.total_buy_qty),
            fmt_opt(self.total_sell_qty)
        )
    }
}

/// Candle row as returned by `history`, before shaping
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandle {
    /// Epoch seconds, epoch milliseconds or a date/time string
    pub timestamp: Value,
    /// Open
    #[serde(default, deserialize_with = "string_as_float")]
    pub open: f64,
    /// High
    #[serde(default, deserialize_with = "string_as_float")]
    pub high: f64,
    /// Low
    #[serde(default, deserialize_with = "string_as_float")]
    pub low: f64,
    /// Close
    #[serde(default, deserialize_with = "string_as_float")]
    pub close: f64,
    /// Volume
    #[serde(default, deserialize_with = "string_as_float")]
    pub volume: f64,
    /// Open interest, zero for non-derivatives
    #[serde(default, deserialize_with = "string_as_float")]
    pub oi: f64,
}

/// One OHLCV bar in exchange time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    /// Bar start in Asia/Kolkata time
    pub timestamp: DateTime<FixedOffset>,
    /// Open
    pub open: f64,
    /// High
    pub high: f64,
    /// Low
    pub low: f64,
    /// Close
    pub close: f64,
    /// Volume
    pub volume: f64,
    /// Open interest
    pub oi: f64,
}

/// Asia/Kolkata offset; India observes no daylight saving
pub fn ist() -> Result<FixedOffset, AppError> {
    FixedOffset::east_opt(IST_OFFSET_SECS)
        .ok_or_else(|| AppError::InvalidInput("invalid IST offset".to_string()))
}

fn parse_timestamp(value: &Value, tz: &FixedOffset) -> Result<DateTime<FixedOffset>, AppError> {
    let from_epoch = |raw: i64| {
        // Values beyond year 2286 in seconds are taken as milliseconds
        let utc = if raw.abs() >= 10_000_000_000 {
            DateTime::from_timestamp_millis(raw)
        } else {
            DateTime::from_timestamp(raw, 0)
        };
        utc.map(|t| t.with_timezone(tz))
            .ok_or_else(|| AppError::Deserialization(format!("timestamp out of range: {raw}")))
    };

    match value {
        Value::Number(n) => {
            let raw = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or_else(|| AppError::Deserialization(format!("invalid timestamp: {n}")))?;
            from_epoch(raw)
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(raw) = s.parse::<i64>() {
                return from_epoch(raw);
            }
            if let Ok(t) = DateTime::parse_from_rfc3339(s) {
                return Ok(t.with_timezone(tz));
            }
            let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
                .ok_or_else(|| AppError::Deserialization(format!("invalid timestamp: {s}")))?;
            tz.from_local_datetime(&naive)
                .single()
                .ok_or_else(|| AppError::Deserialization(format!("ambiguous timestamp: {s}")))
        }
        other => Err(AppError::Deserialization(format!(
            "invalid timestamp: {other}"
        ))),
    }
}

/// Candle history shaped as a table: ascending, unique timestamps in IST
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    candles: Vec<Candle>,
}

impl History {
    /// Shapes raw `history` rows
    ///
    /// Rows are sorted by timestamp; when several rows share a timestamp the
    /// first one received is kept.
    pub fn from_raw(rows: Vec<RawCandle>) -> Result<Self, AppError> {
        let tz = ist()?;
        let mut candles = rows
            .into_iter()
            .map(|row| {
                Ok(Candle {
                    timestamp: parse_timestamp(&row.timestamp, &tz)?,
                    open: row.open,
                    high: row.high,
                    low: row.low,
                    close: row.close,
                    volume: row.volume,
                    oi: row.oi,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        candles.sort_by_key(|c| c.timestamp);
        candles.dedup_by_key(|c| c.timestamp);
        Ok(Self { candles })
    }

    /// Shapes the `data` array of a `history` response
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let rows: Vec<RawCandle> = serde_json::from_value(value)?;
        Self::from_raw(rows)
    }

    /// Candles in ascending time order
    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Number of candles
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// True when no candles were returned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Most recent candle
    #[must_use]
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Timestamp column
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<FixedOffset>> {
        self.candles.iter().map(|c| c.timestamp).collect()
    }

    /// Open column
    #[must_use]
    pub fn open(&self) -> Vec<f64> {
        self.column(|c| c.open)
    }

    /// High column
    #[must_use]
    pub fn high(&self) -> Vec<f64> {
        self.column(|c| c.high)
    }

    /// Low column
    #[must_use]
    pub fn low(&self) -> Vec<f64> {
        self.column(|c| c.low)
    }

    /// Close column
    #[must_use]
    pub fn close(&self) -> Vec<f64> {
        self.column(|c| c.close)
    }

    /// Volume column
    #[must_use]
    pub fn volume(&self) -> Vec<f64> {
        self.column(|c| c.volume)
    }

    /// Open interest column
    #[must_use]
    pub fn oi(&self) -> Vec<f64> {
        self.column(|c| c.oi)
    }

    fn column(&self, f: impl Fn(&Candle) -> f64) -> Vec<f64> {
        self.candles.iter().map(f).collect()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["TIMESTAMP", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME", "OI"]);
        for c in &self.candles {
            add_row(
                &mut table,
                vec![
                    c.timestamp.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
                    format!("{:.2}", c.open),
                    format!("{:.2}", c.high),
                    format!("{:.2}", c.low),
                    format!("{:.2}", c.close),
                    format!("{}", c.volume),
                    format!("{}", c.oi),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// Candle intervals supported by the connected broker (`intervals`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Intervals {
    /// Second intervals, e.g. `5s`
    #[serde(default)]
    pub seconds: Vec<String>,
    /// Minute intervals, e.g. `1m`
    #[serde(default)]
    pub minutes: Vec<String>,
    /// Hour intervals, e.g. `1h`
    #[serde(default)]
    pub hours: Vec<String>,
    /// Daily, e.g. `D`
    #[serde(default)]
    pub days: Vec<String>,
    /// Weekly, e.g. `W`
    #[serde(default)]
    pub weeks: Vec<String>,
    /// Monthly, e.g. `M`
    #[serde(default)]
    pub months: Vec<String>,
}

impl Intervals {
    /// Every supported interval, shortest family first
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.seconds
            .iter()
            .chain(&self.minutes)
            .chain(&self.hours)
            .chain(&self.days)
            .chain(&self.weeks)
            .chain(&self.months)
            .map(String::as_str)
    }

    /// True when the broker supports `interval`
    #[must_use]
    pub fn supports(&self, interval: &str) -> bool {
        self.all().any(|i| i == interval)
    }
}

/// Instrument master record (`symbol`, `search`, `instruments`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SymbolInfo {
    /// OpenAlgo symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Broker symbol
    #[serde(default, rename = "brsymbol")]
    pub broker_symbol: Option<String>,
    /// Instrument name
    #[serde(default)]
    pub name: Option<String>,
    /// OpenAlgo exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// Broker exchange
    #[serde(default, rename = "brexchange")]
    pub broker_exchange: Option<String>,
    /// Broker token, numeric for most brokers
    #[serde(default, deserialize_with = "crate::presentation::serialization::number_as_string_opt")]
    pub token: Option<String>,
    /// Expiry as `DD-MMM-YY`, empty for cash instruments
    #[serde(default)]
    pub expiry: Option<String>,
    /// Strike, `-1` or `0` for non-options
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub strike: Option<f64>,
    /// Lot size
    #[serde(default, rename = "lotsize", deserialize_with = "string_as_int_opt")]
    pub lot_size: Option<i64>,
    /// Instrument type, e.g. `EQ`, `FUTIDX`, `CE`
    #[serde(default, rename = "instrumenttype")]
    pub instrument_type: Option<String>,
    /// Tick size
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub tick_size: Option<f64>,
}

/// Instrument records rendered as a table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SymbolList(pub Vec<SymbolInfo>);

impl SymbolList {
    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the records
    pub fn iter(&self) -> impl Iterator<Item = &SymbolInfo> {
        self.0.iter()
    }
}

impl fmt::Display for SymbolList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&[
            "SYMBOL", "EXCHANGE", "NAME", "TYPE", "EXPIRY", "STRIKE", "LOT", "TICK",
        ]);
        for s in &self.0 {
            add_row(
                &mut table,
                vec![
                    fmt_opt_str(s.symbol.as_deref()),
                    fmt_opt_str(s.exchange.as_deref()),
                    fmt_opt_str(s.name.as_deref()),
                    fmt_opt_str(s.instrument_type.as_deref()),
                    fmt_opt_str(s.expiry.as_deref()),
                    fmt_opt(s.strike),
                    s.lot_size
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    fmt_opt(s.tick_size),
                ],
            );
        }
        write!(f, "{table}")
    }
}
