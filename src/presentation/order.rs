/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Buy
    #[default]
    Buy,
    /// Sell
    Sell,
}

/// Order price type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PriceType {
    /// Executed immediately at the current market price
    #[default]
    #[serde(rename = "MARKET")]
    Market,
    /// Executed at the given price or better
    #[serde(rename = "LIMIT")]
    Limit,
    /// Stop-loss limit: becomes a limit order once the trigger price trades
    #[serde(rename = "SL")]
    StopLoss,
    /// Stop-loss market: becomes a market order once the trigger price trades
    #[serde(rename = "SL-M")]
    StopLossMarket,
}

/// Product type the order is booked under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Product {
    /// Cash and carry (delivery equity)
    Cnc,
    /// Normal (carry-forward derivatives)
    Nrml,
    /// Margin intraday square-off
    #[default]
    Mis,
}

/// Option right
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionType {
    /// Call
    #[default]
    Ce,
    /// Put
    Pe,
}

/// Instrument family used by the `expiry` endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    /// Futures contracts
    #[default]
    Futures,
    /// Option contracts
    Options,
}

macro_rules! impl_wire_str {
    ($ty:ty, $name:literal, { $($variant:path => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// Value as sent on the wire
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.trim().to_ascii_uppercase();
                $(
                    if upper == $wire.to_ascii_uppercase() {
                        return Ok($variant);
                    }
                )+
                Err(AppError::InvalidInput(format!("unknown {}: {}", $name, s)))
            }
        }
    };
}

impl_wire_str!(Action, "action", {
    Action::Buy => "BUY",
    Action::Sell => "SELL",
});

impl_wire_str!(PriceType, "price type", {
    PriceType::Market => "MARKET",
    PriceType::Limit => "LIMIT",
    PriceType::StopLoss => "SL",
    PriceType::StopLossMarket => "SL-M",
});

impl_wire_str!(Product, "product", {
    Product::Cnc => "CNC",
    Product::Nrml => "NRML",
    Product::Mis => "MIS",
});

impl_wire_str!(OptionType, "option type", {
    OptionType::Ce => "CE",
    OptionType::Pe => "PE",
});

impl_wire_str!(InstrumentKind, "instrument type", {
    InstrumentKind::Futures => "futures",
    InstrumentKind::Options => "options",
});
