use crate::presentation::market::ist;
use crate::presentation::serialization::string_as_int_opt;
use crate::presentation::{add_row, new_table};
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session of an exchange that stays open on a holiday
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ExchangeSession {
    /// Exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Session start, epoch milliseconds
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub start_time: Option<i64>,
    /// Session end, epoch milliseconds
    #[serde(default, deserialize_with = "string_as_int_opt")]
    pub end_time: Option<i64>,
}

impl ExchangeSession {
    /// Session start in IST
    #[must_use]
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        to_ist(self.start_time?)
    }

    /// Session end in IST
    #[must_use]
    pub fn end(&self) -> Option<DateTime<FixedOffset>> {
        to_ist(self.end_time?)
    }
}

fn to_ist(millis: i64) -> Option<DateTime<FixedOffset>> {
    let tz = ist().ok()?;
    DateTime::from_timestamp_millis(millis).map(|t| t.with_timezone(&tz))
}

fn fmt_time(t: Option<DateTime<FixedOffset>>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// A market holiday (`market/holidays`)
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Holiday {
    /// Day, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    /// Holiday name
    #[serde(default)]
    pub description: Option<String>,
    /// `TRADING_HOLIDAY`, `SETTLEMENT_HOLIDAY` or `SPECIAL_SESSION`
    #[serde(default)]
    pub holiday_type: Option<String>,
    /// Exchanges closed for the day
    #[serde(default)]
    pub closed_exchanges: Vec<String>,
    /// Exchanges trading a special session
    #[serde(default)]
    pub open_exchanges: Vec<ExchangeSession>,
}

/// Holidays of one year
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Holidays(pub Vec<Holiday>);

impl Holidays {
    /// Holidays on which `exchange` is closed
    pub fn closed_for<'a>(&'a self, exchange: &'a str) -> impl Iterator<Item = &'a Holiday> {
        self.0
            .iter()
            .filter(move |h| h.closed_exchanges.iter().any(|e| e == exchange))
    }
}

impl fmt::Display for Holidays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["DATE", "DESCRIPTION", "TYPE", "CLOSED"]);
        for h in &self.0 {
            add_row(
                &mut table,
                vec![
                    h.date.clone().unwrap_or_default(),
                    h.description.clone().unwrap_or_default(),
                    h.holiday_type.clone().unwrap_or_default(),
                    h.closed_exchanges.join(","),
                ],
            );
        }
        write!(f, "{table}")
    }
}

/// Trading sessions of one day (`market/timings`), empty on holidays
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MarketTimings(pub Vec<ExchangeSession>);

impl MarketTimings {
    /// Session of one exchange
    #[must_use]
    pub fn for_exchange(&self, exchange: &str) -> Option<&ExchangeSession> {
        self.0
            .iter()
            .find(|s| s.exchange.as_deref() == Some(exchange))
    }
}

impl fmt::Display for MarketTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = new_table(&["EXCHANGE", "OPEN", "CLOSE"]);
        for s in &self.0 {
            add_row(
                &mut table,
                vec![
                    s.exchange.clone().unwrap_or_default(),
                    fmt_time(s.start()),
                    fmt_time(s.end()),
                ],
            );
        }
        write!(f, "{table}")
    }
}
