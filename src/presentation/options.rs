use crate::presentation::serialization::{
    fmt_opt, number_as_string_opt, string_as_float_opt, string_as_int_opt,
};
use crate::presentation::{add_row, new_table};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Option sensitivities
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Greeks {
    /// Delta
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub delta: Option<f64>,
    /// Gamma
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub gamma: Option<f64>,
    /// Theta, per day
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub theta: Option<f64>,
    /// Vega, per 1% volatility
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub vega: Option<f64>,
    /// Rho, per 1% rate
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub rho: Option<f64>,
}

/// Implied volatility and greeks of one contract (`optiongreeks`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionGreeks {
    /// Option symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Underlying the price was taken from
    #[serde(default)]
    pub underlying: Option<String>,
    /// Strike
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub strike: Option<f64>,
    /// `CE` or `PE`
    #[serde(default)]
    pub option_type: Option<String>,
    /// Expiry date as reported
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Underlying price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub spot_price: Option<f64>,
    /// Option price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub option_price: Option<f64>,
    /// Fractional days left
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub days_to_expiry: Option<f64>,
    /// Interest rate used, percent
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub interest_rate: Option<f64>,
    /// Implied volatility, percent
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub implied_volatility: Option<f64>,
    /// Greeks
    #[serde(default)]
    pub greeks: Greeks,
}

/// A strike resolved from underlying, expiry and offset (`optionsymbol`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionSymbol {
    /// Option symbol, e.g. `NIFTY25NOV2526000CE`
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange of the contract
    #[serde(default)]
    pub exchange: Option<String>,
    /// Lot size
    #[serde(default, rename = "lotsize", deserialize_with = "string_as_int_opt")]
    pub lot_size: Option<i64>,
    /// Tick size
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub tick_size: Option<f64>,
    /// Underlying price used to find ATM
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub underlying_ltp: Option<f64>,
}

/// Acknowledgement of `optionsorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionsOrderResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Broker order id
    #[serde(default, rename = "orderid", deserialize_with = "number_as_string_opt")]
    pub order_id: Option<String>,
    /// Resolved option symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange of the contract
    #[serde(default)]
    pub exchange: Option<String>,
    /// Offset requested
    #[serde(default)]
    pub offset: Option<String>,
    /// `CE` or `PE`
    #[serde(default)]
    pub option_type: Option<String>,
    /// Underlying
    #[serde(default)]
    pub underlying: Option<String>,
    /// Underlying price at resolution
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub underlying_ltp: Option<f64>,
    /// `live` or `analyze`
    #[serde(default)]
    pub mode: Option<String>,
}

/// Outcome of one leg of `optionsmultiorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionLegResult {
    /// Leg number, starting at 1
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub leg: Option<i64>,
    /// Resolved option symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Offset requested
    #[serde(default)]
    pub offset: Option<String>,
    /// `CE` or `PE`
    #[serde(default)]
    pub option_type: Option<String>,
    /// `BUY` or `SELL`
    #[serde(default)]
    pub action: Option<String>,
    /// `success` or `error`
    #[serde(default)]
    pub status: Option<String>,
    /// Broker order id
    #[serde(default, rename = "orderid", deserialize_with = "number_as_string_opt")]
    pub order_id: Option<String>,
    /// `live` or `analyze`
    #[serde(default)]
    pub mode: Option<String>,
    /// Error detail for failed legs
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement of `optionsmultiorder`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionsMultiOrderResponse {
    /// Response status
    #[serde(default)]
    pub status: Option<String>,
    /// Underlying
    #[serde(default)]
    pub underlying: Option<String>,
    /// Underlying price at resolution
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub underlying_ltp: Option<f64>,
    /// Per-leg outcomes
    #[serde(default)]
    pub results: Vec<OptionLegResult>,
}

impl OptionsMultiOrderResponse {
    /// Legs the broker rejected
    pub fn failed_legs(&self) -> impl Iterator<Item = &OptionLegResult> {
        self.results
            .iter()
            .filter(|r| !r.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("success")))
    }
}

/// Quote of one side of a strike in the chain
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OptionQuote {
    /// Option symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Moneyness label, e.g. `ATM`, `ITM2`, `OTM1`
    #[serde(default)]
    pub label: Option<String>,
    /// Last traded price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ltp: Option<f64>,
    /// Best bid
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub bid: Option<f64>,
    /// Best ask
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub ask: Option<f64>,
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
    /// Lot size
    #[serde(default, rename = "lotsize", deserialize_with = "string_as_int_opt")]
    pub lot_size: Option<i64>,
    /// Tick size
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub tick_size: Option<f64>,
}

/// One strike of the chain with both sides
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ChainStrike {
    /// Strike
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub strike: Option<f64>,
    /// Call side
    #[serde(default)]
    pub ce: Option<OptionQuote>,
    /// Put side
    #[serde(default)]
    pub pe: Option<OptionQuote>,
}

/// Option chain around ATM (`optionchain`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionChain {
    /// Underlying
    #[serde(default)]
    pub underlying: Option<String>,
    /// Underlying price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub underlying_ltp: Option<f64>,
    /// Expiry as requested
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// At-the-money strike
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub atm_strike: Option<f64>,
    /// Strikes in ascending order
    #[serde(default)]
    pub chain: Vec<ChainStrike>,
}

impl OptionChain {
    /// Row for the ATM strike
    #[must_use]
    pub fn atm(&self) -> Option<&ChainStrike> {
        let atm = self.atm_strike?;
        self.chain
            .iter()
            .find(|s| s.strike.is_some_and(|k| (k - atm).abs() < f64::EPSILON))
    }
}

impl fmt::Display for OptionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&[
            "CE OI", "CE LTP", "CE LABEL", "STRIKE", "PE LABEL", "PE LTP", "PE OI",
        ]);
        let label = |q: Option<&OptionQuote>| {
            q.and_then(|q| q.label.clone())
                .unwrap_or_else(|| "-".to_string())
        };
        for row in &self.chain {
            let ce = row.ce.as_ref();
            let pe = row.pe.as_ref();
            add_row(
                &mut table,
                vec![
                    fmt_opt(ce.and_then(|q| q.oi)),
                    fmt_opt(ce.and_then(|q| q.ltp)),
                    label(ce),
                    fmt_opt(row.strike),
                    label(pe),
                    fmt_opt(pe.and_then(|q| q.ltp)),
                    fmt_opt(pe.and_then(|q| q.oi)),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// Futures price implied by put-call parity at ATM (`syntheticfuture`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SyntheticFuture {
    /// Underlying
    #[serde(default)]
    pub underlying: Option<String>,
    /// Underlying price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub underlying_ltp: Option<f64>,
    /// Expiry
    #[serde(default)]
    pub expiry: Option<String>,
    /// At-the-money strike
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub atm_strike: Option<f64>,
    /// Strike + call price - put price
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub synthetic_future_price: Option<f64>,
}

impl SyntheticFuture {
    /// Synthetic minus spot: positive in contango
    #[must_use]
    pub fn basis(&self) -> Option<f64> {
        Some(self.synthetic_future_price? - self.underlying_ltp?)
    }
}
