/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Technical indicators over candle columns
//!
//! Every function takes plain `&[f64]` series (see the column accessors of
//! [`History`](crate::presentation::market::History)) and returns series of
//! the same length, `NaN` where the indicator is still warming up. Series
//! given together are aligned to the shortest one, keeping the most recent
//! values.

use crate::error::AppError;

/// Trend-following moving averages and bands
pub mod trend;

pub use trend::*;

/// Rejects periods of zero or longer than the data
pub(crate) fn validate_period(period: usize, len: usize) -> Result<(), AppError> {
    if period == 0 {
        return Err(AppError::InvalidInput(
            "period must be greater than zero".to_string(),
        ));
    }
    if period > len {
        return Err(AppError::InvalidInput(format!(
            "period {period} is longer than the data ({len} values)"
        )));
    }
    Ok(())
}

/// Trims series to the length of the shortest one, keeping their tails
pub(crate) fn align<'a, const N: usize>(series: [&'a [f64]; N]) -> [&'a [f64]; N] {
    let len = series.iter().map(|s| s.len()).min().unwrap_or(0);
    series.map(|s| &s[s.len() - len..])
}
